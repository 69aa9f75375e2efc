//! [`Locale`] definitions.

use common::define_kind;

#[cfg(doc)]
use crate::domain::Project;

define_kind! {
    #[doc = "Two-letter language code of a [`Project`]."]
    #[case = "lowercase"]
    enum Locale {
        #[doc = "German."]
        De = 1,

        #[doc = "English."]
        En = 2,
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::De
    }
}

impl Locale {
    /// Returns the file name of a presentation generated for a property with
    /// the provided `title`.
    #[must_use]
    pub fn presentation_name(self, title: Option<&str>) -> String {
        let prefix = match self {
            Self::De => "Exposé",
            Self::En => "Brochure",
        };
        match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => format!("{prefix}: {title}"),
            None => prefix.to_owned(),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Locale;

    #[test]
    fn parses_two_letter_codes() {
        assert_eq!(Locale::from_str("de").unwrap(), Locale::De);
        assert_eq!(Locale::from_str("en").unwrap(), Locale::En);
        assert!(Locale::from_str("DE").is_err());
        assert!(Locale::from_str("fr").is_err());

        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn names_presentation_per_locale() {
        assert_eq!(
            Locale::De.presentation_name(Some("Lakeview Villa")),
            "Exposé: Lakeview Villa",
        );
        assert_eq!(
            Locale::En.presentation_name(Some(" Lakeview Villa ")),
            "Brochure: Lakeview Villa",
        );
        assert_eq!(Locale::En.presentation_name(Some("  ")), "Brochure");
        assert_eq!(Locale::De.presentation_name(None), "Exposé");
    }
}
