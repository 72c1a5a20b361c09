//! Display languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A display language for header text.
///
/// `Ja` is the default and is encoded without a suffix in header tags
/// (`CURRENT` rather than `CURRENT_JA`). `Kana` is Japanese rendered in
/// katakana for reading aids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeaderLang {
    #[default]
    Ja,
    En,
    Kana,
    Zh,
    Ko,
}

impl HeaderLang {
    /// All languages in their canonical rotation order.
    pub const ALL: [HeaderLang; 5] = [
        HeaderLang::Ja,
        HeaderLang::Kana,
        HeaderLang::En,
        HeaderLang::Zh,
        HeaderLang::Ko,
    ];

    /// Decode a header-tag suffix. Anything unrecognised (including a
    /// missing suffix) is Japanese.
    pub fn from_suffix(suffix: Option<&str>) -> Self {
        match suffix {
            Some("EN") => HeaderLang::En,
            Some("KANA") => HeaderLang::Kana,
            Some("ZH") => HeaderLang::Zh,
            Some("KO") => HeaderLang::Ko,
            _ => HeaderLang::Ja,
        }
    }

    /// The suffix used when encoding a header tag, `None` for Japanese.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            HeaderLang::Ja => None,
            HeaderLang::En => Some("EN"),
            HeaderLang::Kana => Some("KANA"),
            HeaderLang::Zh => Some("ZH"),
            HeaderLang::Ko => Some("KO"),
        }
    }

    /// Separator used when listing several station names.
    pub fn list_separator(self) -> &'static str {
        match self {
            HeaderLang::En => " & ",
            HeaderLang::Ja | HeaderLang::Kana | HeaderLang::Zh | HeaderLang::Ko => "・",
        }
    }
}

impl fmt::Display for HeaderLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().unwrap_or("JA"))
    }
}

/// Name variants carried by stations and lines.
///
/// Only the Japanese name is guaranteed; every other variant falls back to
/// it when the topology provider has no translation.
pub trait LocalizedName {
    fn name_ja(&self) -> &str;
    fn name_katakana(&self) -> Option<&str>;
    fn name_roman(&self) -> Option<&str>;
    fn name_chinese(&self) -> Option<&str>;
    fn name_korean(&self) -> Option<&str>;

    /// The name to show for `lang`.
    fn name_for(&self, lang: HeaderLang) -> &str {
        let variant = match lang {
            HeaderLang::Ja => None,
            HeaderLang::Kana => self.name_katakana(),
            HeaderLang::En => self.name_roman(),
            HeaderLang::Zh => self.name_chinese(),
            HeaderLang::Ko => self.name_korean(),
        };
        variant
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.name_ja())
    }
}
