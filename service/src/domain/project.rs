//! [`Project`] definitions.

#[cfg(doc)]
use common::DateTime;
use common::{unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    image, page,
    presentation::{Presentation, TemplateId},
    Locale, Property,
};

/// Brochure project going through the wizard: a [`Property`] with its
/// images, page selection and, once generated, its [`Presentation`].
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    /// ID of this [`Project`].
    pub id: Id,

    /// [`Locale`] of this [`Project`].
    pub locale: Locale,

    /// Template chosen for this [`Project`], if any.
    pub template: Option<TemplateId>,

    /// [`Property`] this [`Project`] advertises.
    pub property: Property,

    /// Uploaded images, in upload order.
    pub images: Vec<image::Url>,

    /// Pages selected to be included into the [`Presentation`].
    pub selection: page::Selection,

    /// [`Presentation`] generated for this [`Project`], if any.
    pub presentation: Option<Presentation>,

    /// [`DateTime`] when this [`Project`] was created.
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Project`] was modified last time.
    pub updated_at: ModificationDateTime,
}

impl Project {
    /// Creates a new blank [`Project`].
    #[must_use]
    pub fn new(locale: Locale, template: Option<TemplateId>) -> Self {
        let now = CreationDateTime::now();
        Self {
            id: Id::new(),
            locale,
            template,
            property: Property::new(),
            images: Vec::new(),
            selection: page::Selection::all(),
            presentation: None,
            created_at: now,
            updated_at: now.coerce(),
        }
    }

    /// Returns the display title of this [`Project`], if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.property.title()
    }

    /// Returns the display address of this [`Project`], if any.
    #[must_use]
    pub fn address(&self) -> Option<String> {
        self.property.address()
    }

    /// Returns [`image::Assignments`] of this [`Project`].
    #[must_use]
    pub fn image_assignments(&self) -> image::Assignments {
        image::Assignments::assemble(
            &self.images,
            &self.property,
            &self.selection,
        )
    }
}

/// ID of a [`Project`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// [`DateTime`] when a [`Project`] was created.
pub type CreationDateTime = DateTimeOf<(Project, unit::Creation)>;

/// [`DateTime`] when a [`Project`] was modified.
pub type ModificationDateTime = DateTimeOf<(Project, unit::Modification)>;
