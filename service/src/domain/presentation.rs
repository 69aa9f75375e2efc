//! [`Presentation`] definitions.

use std::{str::FromStr, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{AsRef, Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use regex::Regex;

use crate::domain::Locale;
#[cfg(doc)]
use crate::domain::Project;

/// Base URL of the presentations editor.
const EDITOR_URL: &str = "https://docs.google.com/presentation/d";

/// Presentation generated from a template for a [`Project`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Presentation {
    /// ID of this [`Presentation`] in the external presentation service.
    pub id: Id,

    /// [`DateTime`] when this [`Presentation`] was generated.
    pub generated_at: GenerationDateTime,
}

impl Presentation {
    /// Returns the read-only view URL of this [`Presentation`] with an
    /// interface in the provided [`Locale`].
    #[must_use]
    pub fn view_url(&self, locale: Locale) -> String {
        format!("{EDITOR_URL}/{}/preview?hl={locale}", self.id)
    }

    /// Returns the editable URL of this [`Presentation`] with an interface in
    /// the provided [`Locale`].
    #[must_use]
    pub fn edit_url(&self, locale: Locale) -> String {
        format!("{EDITOR_URL}/{}/edit?hl={locale}", self.id)
    }
}

/// Checks whether the given `id` is a valid file ID of the external
/// presentation service.
fn is_file_id(id: &str) -> bool {
    static REGEX: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9_-]{1,256}$").expect("valid regex")
    });

    REGEX.is_match(id)
}

/// ID of a [`Presentation`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        is_file_id(&id).then_some(Self(id))
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `presentation::Id`")
    }
}

/// ID of a template a [`Presentation`] is generated from.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct TemplateId(String);

impl TemplateId {
    /// Creates a new [`TemplateId`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        is_file_id(&id).then_some(Self(id))
    }
}

impl FromStr for TemplateId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `TemplateId`")
    }
}

/// ID of an object (slide or page element) inside a [`Presentation`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[as_ref(str, String)]
#[from(String, &str)]
pub struct ObjectId(String);

/// Slides of a [`Presentation`] in their current order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Layout {
    /// [`Slide`]s of this [`Layout`].
    pub slides: Vec<Slide>,
}

impl Layout {
    /// Finds the first [`Element`], in slide order, whose title contains the
    /// provided `marker`.
    #[must_use]
    pub fn find_element(&self, marker: &str) -> Option<&Element> {
        self.slides
            .iter()
            .flat_map(|s| &s.elements)
            .find(|e| e.title.as_deref().is_some_and(|t| t.contains(marker)))
    }
}

/// Single slide of a [`Layout`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Slide {
    /// [`ObjectId`] of this [`Slide`].
    pub id: ObjectId,

    /// Page [`Element`]s placed on this [`Slide`].
    pub elements: Vec<Element>,
}

/// Page element of a [`Slide`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Element {
    /// [`ObjectId`] of this [`Element`].
    pub id: ObjectId,

    /// Label given to this [`Element`] by the template author.
    pub title: Option<String>,
}

/// [`DateTime`] when a [`Presentation`] was generated.
pub type GenerationDateTime = DateTimeOf<(Presentation, unit::Generation)>;

#[cfg(test)]
mod spec {
    use crate::domain::Locale;

    use super::{
        Element, GenerationDateTime, Id, Layout, ObjectId, Presentation,
        Slide, TemplateId,
    };

    fn element(id: &str, title: Option<&str>) -> Element {
        Element {
            id: id.into(),
            title: title.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn validates_file_ids() {
        assert!(Id::new("1aBc-De_F").is_some());
        assert!(Id::new("").is_none());
        assert!(Id::new("../etc/passwd").is_none());
        assert!(Id::new("a b").is_none());
        assert!(TemplateId::new("1TmPl4te").is_some());
        assert!(TemplateId::new("a".repeat(257)).is_none());
    }

    #[test]
    fn builds_locale_aware_urls() {
        let presentation = Presentation {
            id: Id::new("abc123").unwrap(),
            generated_at: GenerationDateTime::now(),
        };

        assert_eq!(
            presentation.view_url(Locale::De),
            "https://docs.google.com/presentation/d/abc123/preview?hl=de",
        );
        assert_eq!(
            presentation.edit_url(Locale::En),
            "https://docs.google.com/presentation/d/abc123/edit?hl=en",
        );
    }

    #[test]
    fn finds_first_element_by_title_substring() {
        let layout = Layout {
            slides: vec![
                Slide {
                    id: "s0".into(),
                    elements: vec![
                        element("e0", None),
                        element("e1", Some("Logo {{logo}}")),
                    ],
                },
                Slide {
                    id: "s1".into(),
                    elements: vec![element("e2", Some("logo again"))],
                },
            ],
        };

        assert_eq!(
            layout.find_element("logo").unwrap().id,
            ObjectId::from("e1"),
        );
        assert_eq!(
            layout.find_element("again").unwrap().id,
            ObjectId::from("e2"),
        );
        assert!(layout.find_element("agentimg").is_none());
    }
}
