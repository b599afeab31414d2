//! Language selection for the UI chrome.

use serde::{Deserialize, Serialize};

/// Language the interface is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Dutch,
    English,
}

impl Language {
    pub fn pick(self, dutch: &'static str, english: &'static str) -> &'static str {
        match self {
            Language::Dutch => dutch,
            Language::English => english,
        }
    }
}

/// What the user asked for in the settings panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    #[default]
    System,
    Dutch,
    English,
}

impl LanguagePreference {
    pub fn resolve(self) -> Language {
        match self {
            LanguagePreference::System => detect_system_language(),
            LanguagePreference::Dutch => Language::Dutch,
            LanguagePreference::English => Language::English,
        }
    }
}

pub fn detect_system_language() -> Language {
    match sys_locale::get_locale() {
        Some(locale) => language_from_locale(&locale),
        None => {
            tracing::debug!("no system locale reported, using English");
            Language::English
        }
    }
}

/// Maps a BCP 47 / POSIX locale tag to a supported language.
pub fn language_from_locale(locale: &str) -> Language {
    let primary = locale
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    if primary == "nl" {
        Language::Dutch
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("nl-NL", Language::Dutch)]
    #[case("nl_BE.UTF-8", Language::Dutch)]
    #[case("NL", Language::Dutch)]
    #[case("en-US", Language::English)]
    #[case("de_DE", Language::English)]
    #[case("", Language::English)]
    fn locale_tags_map_to_languages(#[case] locale: &str, #[case] expected: Language) {
        assert_eq!(language_from_locale(locale), expected);
    }

    #[test]
    fn explicit_preferences_ignore_the_system() {
        assert_eq!(LanguagePreference::Dutch.resolve(), Language::Dutch);
        assert_eq!(LanguagePreference::English.resolve(), Language::English);
    }

    #[test]
    fn pick_returns_matching_text() {
        assert_eq!(Language::Dutch.pick("Kies", "Choose"), "Kies");
        assert_eq!(Language::English.pick("Kies", "Choose"), "Choose");
    }
}
