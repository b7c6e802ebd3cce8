//! 界面组件

pub mod help;
pub mod input;
pub mod results;
pub mod statusbar;
pub mod tabs;
