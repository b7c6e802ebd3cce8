//! 中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, HelpTexts, HintTexts, InputTexts, KeyNames, ResultsTexts,
    StatusBarTexts, TabTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "汉字阅读器",
        quit: "退出",
    },

    tabs: TabTexts {
        url: "网址",
        text: "文本",
    },

    input: InputTexts {
        url_title: "文章网址",
        text_title: "中文文本",
        url_placeholder: "https://example.com/article",
        text_placeholder: "在此粘贴或输入中文文本……",
    },

    results: ResultsTexts {
        title: "分析结果",
        analyzing: "分析中...",
        empty_hint_url: "输入网址后按 Enter 开始分析。",
        empty_hint_text: "输入文本后按 Ctrl+s 开始分析。",
        error_title: "错误",
        source: "来源",
        score: "难度",
        tokens: "词数",
        unknown_coverage: "未知词",
        coverage: "HSK 覆盖率",
        unknown_level: "未知",
    },

    status_bar: StatusBarTexts {
        analyzing: "分析中...",
        busy: "已有分析正在进行",
        done: "分析完成",
        failed: "分析失败",
        theme_changed: "已切换主题",
        language_changed: "已切换语言",
        config_save_failed: "设置保存失败",
    },

    hints: HintTexts {
        keys: KeyNames {
            tab: "Tab",
            enter: "Enter",
            ctrl_s: "Ctrl+s",
            esc: "Esc",
            alt_h: "Alt+h",
            alt_q: "Alt+q",
        },
        actions: ActionTexts {
            switch_mode: "切换模式",
            analyze: "分析",
            newline: "换行",
            clear: "清空",
            help: "帮助",
        },
    },

    help: HelpTexts {
        title: "快捷键",
        shortcuts: &[
            ("Tab", "在网址与文本模式间切换"),
            ("Alt+1 / Alt+2", "选择网址 / 文本模式"),
            ("Enter", "分析（网址模式），换行（文本模式）"),
            ("Ctrl+s", "分析"),
            ("Esc", "清空输入"),
            ("←→ ↑↓ Home End", "移动光标"),
            ("Backspace / Delete", "删除字符"),
            ("Alt+c", "切换主题"),
            ("Alt+l", "切换语言"),
            ("Alt+h", "显示帮助"),
            ("Alt+q / Ctrl+c", "退出"),
        ],
        close_hint: "按 Esc 关闭",
    },
};
