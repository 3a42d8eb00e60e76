//! Static catalog of translation targets.
//!
//! A target names a tone/register/language variant (e.g. `ja_kind`,
//! `en_formal`). The catalog is fixed at compile time and immutable.

use crate::ui::Style;

/// Base language of a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseLang {
    Ja,
    En,
}

impl BaseLang {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }
}

impl std::str::FromStr for BaseLang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            other => Err(format!("Unknown base language '{other}' (expected ja or en)")),
        }
    }
}

/// A translation target with localized display names.
#[derive(Debug, Clone)]
pub struct TranslationTarget {
    /// Unique key (e.g. "ja_kind").
    pub identifier: &'static str,
    pub base_lang: BaseLang,
    /// English display name.
    pub disp_en: &'static str,
    /// Japanese display name.
    pub disp_ja: &'static str,
}

/// All available translation targets.
pub const TARGETS: &[TranslationTarget] = &[
    // Japanese variants
    TranslationTarget {
        identifier: "ja_kind",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (Kind)",
        disp_ja: "日本語 (優しく)",
    },
    TranslationTarget {
        identifier: "ja_formal_friendly",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (Formal yet Friendly)",
        disp_ja: "日本語 (丁寧でフレンドリー)",
    },
    TranslationTarget {
        identifier: "ja_formal_aggr",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (Formally Aggressive)",
        disp_ja: "日本語 (丁寧に攻撃的)",
    },
    TranslationTarget {
        identifier: "ja_twitter",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (Twitter)",
        disp_ja: "日本語 (Twitter)",
    },
    TranslationTarget {
        identifier: "ja_n1",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (N1)",
        disp_ja: "日本語 (N1)",
    },
    TranslationTarget {
        identifier: "ja_n2",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (N2)",
        disp_ja: "日本語 (N2)",
    },
    TranslationTarget {
        identifier: "ja_n3",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (N3)",
        disp_ja: "日本語 (N3)",
    },
    TranslationTarget {
        identifier: "ja_n4",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (N4)",
        disp_ja: "日本語 (N4)",
    },
    TranslationTarget {
        identifier: "ja_n5",
        base_lang: BaseLang::Ja,
        disp_en: "Japanese (N5)",
        disp_ja: "日本語 (N5)",
    },
    // English variants
    TranslationTarget {
        identifier: "en_casual",
        base_lang: BaseLang::En,
        disp_en: "English (Casual)",
        disp_ja: "英語 (カジュアル)",
    },
    TranslationTarget {
        identifier: "en_formal",
        base_lang: BaseLang::En,
        disp_en: "English (Formal)",
        disp_ja: "英語 (フォーマル)",
    },
    TranslationTarget {
        identifier: "en_formal_friendly",
        base_lang: BaseLang::En,
        disp_en: "English (Formal yet Friendly)",
        disp_ja: "英語 (フォーマルでフレンドリー)",
    },
    TranslationTarget {
        identifier: "en_internet",
        base_lang: BaseLang::En,
        disp_en: "English (Internet)",
        disp_ja: "英語 (インターネット)",
    },
    TranslationTarget {
        identifier: "en_offensive_internet",
        base_lang: BaseLang::En,
        disp_en: "English (Offensive Internet)",
        disp_ja: "英語 (攻撃的インターネット)",
    },
];

/// Looks up a target by identifier.
pub fn find_target(identifier: &str) -> Option<&'static TranslationTarget> {
    TARGETS.iter().find(|t| t.identifier == identifier)
}

/// Returns the targets for one base language, in catalog order.
pub fn targets_for_lang(lang: BaseLang) -> Vec<&'static TranslationTarget> {
    TARGETS.iter().filter(|t| t.base_lang == lang).collect()
}

/// Prints the target catalog to stdout, optionally filtered by base language.
pub fn print_targets(lang: Option<BaseLang>) {
    println!("{}", Style::header("Available translation targets"));
    for target in TARGETS {
        if lang.is_some_and(|l| l != target.base_lang) {
            continue;
        }
        println!(
            "  {:22} {:3} {}  {}",
            Style::value(target.identifier),
            Style::code(target.base_lang.code()),
            Style::secondary(target.disp_en),
            Style::secondary(target.disp_ja),
        );
    }
}
