//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HelpTexts, HintTexts, InputTexts, KeyNames, ResultsTexts,
    StatusBarTexts, TabTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Hanz Reader",
        quit: "Quit",
    },

    tabs: TabTexts {
        url: "URL",
        text: "Text",
    },

    input: InputTexts {
        url_title: "Article URL",
        text_title: "Chinese Text",
        url_placeholder: "https://example.com/article",
        text_placeholder: "Paste or type Chinese text here...",
    },

    results: ResultsTexts {
        title: "Analysis",
        analyzing: "Analyzing...",
        empty_hint_url: "Enter a URL and press Enter to analyze it.",
        empty_hint_text: "Enter some text and press Ctrl+s to analyze it.",
        error_title: "Error",
        source: "Source",
        score: "Difficulty",
        tokens: "Tokens",
        unknown_coverage: "Unknown",
        coverage: "HSK Coverage",
        unknown_level: "Unknown",
    },

    status_bar: StatusBarTexts {
        analyzing: "Analyzing...",
        busy: "An analysis is already running",
        done: "Analysis complete",
        failed: "Analysis failed",
        theme_changed: "Theme changed",
        language_changed: "Language changed",
        config_save_failed: "Could not save settings",
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
            switch_mode: "Switch mode",
            analyze: "Analyze",
            newline: "New line",
            clear: "Clear",
            help: "Help",
        },
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        shortcuts: &[
            ("Tab", "Switch between URL and Text mode"),
            ("Alt+1 / Alt+2", "Select URL / Text mode"),
            ("Enter", "Analyze (URL mode), new line (Text mode)"),
            ("Ctrl+s", "Analyze"),
            ("Esc", "Clear the input"),
            ("←→ ↑↓ Home End", "Move the cursor"),
            ("Backspace / Delete", "Delete a character"),
            ("Alt+c", "Switch theme"),
            ("Alt+l", "Switch language"),
            ("Alt+h", "Show this help"),
            ("Alt+q / Ctrl+c", "Quit"),
        ],
        close_hint: "Press Esc to close",
    },
};
