//! Languages the bot translates between.

use std::fmt;

/// A translation language.
///
/// The bot only ever translates Japanese to English, but the pair is passed
/// explicitly to every [`Translator`](super::Translator) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Japanese,
    English,
}

impl Language {
    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Japanese => "ja",
            Self::English => "en",
        }
    }

    /// Code DeepL expects in `source_lang`.
    pub const fn deepl_source(self) -> &'static str {
        match self {
            Self::Japanese => "JA",
            Self::English => "EN",
        }
    }

    /// Code DeepL expects in `target_lang`.
    ///
    /// Bare `EN` is deprecated as a target, so English maps to `EN-US`.
    pub const fn deepl_target(self) -> &'static str {
        match self {
            Self::Japanese => "JA",
            Self::English => "EN-US",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
