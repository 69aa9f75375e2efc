//! [`Project`]-related definitions.

use common::DateTime;
use derive_more::{Display, From, Into};
use juniper::{
    graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLObject,
    GraphQLScalar,
};
use serde_json::Value;
use service::domain::{self, page};
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// A brochure project.
#[derive(Clone, Debug, From)]
pub struct Project(domain::Project);

/// A brochure project filled through the wizard.
#[graphql_object(context = Context)]
impl Project {
    /// Unique identifier of this `Project`.
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Locale of this `Project`.
    pub fn locale(&self) -> Locale {
        self.0.locale.into()
    }

    /// Template chosen for this `Project`, if any.
    pub fn template(&self) -> Option<scalar::TemplateId> {
        self.0.template.clone().map(Into::into)
    }

    /// Display title of this `Project`.
    pub fn title(&self) -> Option<String> {
        self.0.title().map(ToOwned::to_owned)
    }

    /// Display address of this `Project`.
    pub fn address(&self) -> Option<String> {
        self.0.address()
    }

    /// Property fields of this `Project` ordered by name.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.fields",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn fields(&self) -> Vec<Field> {
        self.0
            .property
            .iter()
            .map(|(name, value)| Field {
                name: name.to_owned(),
                value: match value {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    v @ (Value::Bool(_)
                    | Value::Number(_)
                    | Value::Array(_)
                    | Value::Object(_)) => Some(v.to_string()),
                },
            })
            .collect()
    }

    /// Names of the required property fields not filled yet.
    pub fn missing_fields(&self) -> Vec<String> {
        self.0
            .property
            .missing_fields()
            .into_iter()
            .map(|f| f.name())
            .collect()
    }

    /// Uploaded images of this `Project` in upload order.
    pub fn images(&self) -> Vec<scalar::ImageUrl> {
        self.0.images.iter().cloned().map(Into::into).collect()
    }

    /// Selection of every page category of this `Project`.
    pub fn pages(&self) -> Vec<PageSelection> {
        self.0
            .selection
            .normalized()
            .iter()
            .map(|(category, selected)| PageSelection {
                category: category.into(),
                selected,
            })
            .collect()
    }

    /// Number of images to upload to fill the selected pages.
    pub fn required_images(&self) -> i32 {
        i32::try_from(self.0.selection.required_images()).unwrap_or(i32::MAX)
    }

    /// Presentation generated for this `Project`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Project.presentation",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn presentation(&self) -> Option<api::Presentation> {
        self.0
            .presentation
            .clone()
            .map(|p| api::Presentation::new(p, self.0.locale))
    }

    /// `DateTime` when this `Project` was created.
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }

    /// `DateTime` when this `Project` was modified last time.
    pub fn updated_at(&self) -> DateTime {
        self.0.updated_at.coerce()
    }
}

/// Unique identifier of a `Project`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::project::Id)]
#[into(domain::project::Id)]
#[graphql(name = "ProjectId", transparent)]
pub struct Id(Uuid);

/// Locale of a `Project`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
pub enum Locale {
    /// German.
    De,

    /// English.
    En,
}

impl From<domain::Locale> for Locale {
    fn from(locale: domain::Locale) -> Self {
        use domain::Locale as L;
        match locale {
            L::De => Self::De,
            L::En => Self::En,
        }
    }
}

impl From<Locale> for domain::Locale {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::De => Self::De,
            Locale::En => Self::En,
        }
    }
}

/// Single property field of a `Project`.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "PropertyField")]
pub struct Field {
    /// Name of this field.
    pub name: String,

    /// Value of this field. Non-string values are JSON-encoded.
    pub value: Option<String>,
}

/// Property field to be set on a `Project`.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "PropertyFieldInput")]
pub struct FieldInput {
    /// Name of the field.
    pub name: String,

    /// Value of the field, `null` clears it.
    pub value: Option<String>,
}

/// Converts the provided [`FieldInput`]s into a [`domain::Property`].
pub(crate) fn property(fields: Vec<FieldInput>) -> domain::Property {
    fields
        .into_iter()
        .map(|FieldInput { name, value }| {
            (name, value.map_or(Value::Null, Value::String))
        })
        .collect()
}

/// Category of presentation pages.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
pub enum PageCategory {
    /// Photos of the building and the plot.
    ExteriorPhotos,

    /// Photos of the rooms.
    InteriorPhotos,

    /// Floor plan.
    FloorPlan,

    /// Neighbourhood and location.
    Location,

    /// Energy certificate.
    EnergyCertificate,
}

impl From<page::Category> for PageCategory {
    fn from(category: page::Category) -> Self {
        use page::Category as C;
        match category {
            C::ExteriorPhotos => Self::ExteriorPhotos,
            C::InteriorPhotos => Self::InteriorPhotos,
            C::FloorPlan => Self::FloorPlan,
            C::Location => Self::Location,
            C::EnergyCertificate => Self::EnergyCertificate,
        }
    }
}

impl From<PageCategory> for page::Category {
    fn from(category: PageCategory) -> Self {
        match category {
            PageCategory::ExteriorPhotos => Self::ExteriorPhotos,
            PageCategory::InteriorPhotos => Self::InteriorPhotos,
            PageCategory::FloorPlan => Self::FloorPlan,
            PageCategory::Location => Self::Location,
            PageCategory::EnergyCertificate => Self::EnergyCertificate,
        }
    }
}

/// Whether a `PageCategory` is included into the presentation.
#[derive(Clone, Copy, Debug, GraphQLObject)]
pub struct PageSelection {
    /// Category of the pages.
    pub category: PageCategory,

    /// Whether the pages are included.
    pub selected: bool,
}

/// Whether a `PageCategory` should be included into the presentation.
#[derive(Clone, Copy, Debug, GraphQLInputObject)]
pub struct PageSelectionInput {
    /// Category of the pages.
    pub category: PageCategory,

    /// Whether the pages should be included.
    pub selected: bool,
}

/// Converts the provided [`PageSelectionInput`]s into a [`page::Selection`].
pub(crate) fn selection(pages: Vec<PageSelectionInput>) -> page::Selection {
    pages
        .into_iter()
        .map(|p| (p.category.into(), p.selected))
        .collect()
}
