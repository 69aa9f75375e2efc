//! [`Presentation`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{command::generate_presentation, domain};

use crate::{api::scalar, Context};

/// A presentation generated for a `Project`.
#[derive(Clone, Debug)]
pub struct Presentation {
    /// Underlying [`domain::Presentation`].
    presentation: domain::Presentation,

    /// [`domain::Locale`] of the URLs of this [`Presentation`].
    locale: domain::Locale,
}

impl Presentation {
    /// Creates a new [`Presentation`] with URLs in the provided
    /// [`domain::Locale`].
    #[must_use]
    pub fn new(
        presentation: domain::Presentation,
        locale: domain::Locale,
    ) -> Self {
        Self {
            presentation,
            locale,
        }
    }
}

impl From<generate_presentation::Output> for Presentation {
    fn from(output: generate_presentation::Output) -> Self {
        let generate_presentation::Output {
            presentation,
            locale,
        } = output;
        Self::new(presentation, locale)
    }
}

/// A presentation generated for a `Project`.
#[graphql_object(context = Context)]
impl Presentation {
    /// Unique identifier of this `Presentation`.
    pub fn id(&self) -> Id {
        self.presentation.id.clone().into()
    }

    /// Read-only URL of this `Presentation`.
    pub fn view_url(&self) -> String {
        self.presentation.view_url(self.locale)
    }

    /// Editable URL of this `Presentation`.
    pub fn edit_url(&self) -> String {
        self.presentation.edit_url(self.locale)
    }

    /// `DateTime` when this `Presentation` was generated.
    pub fn generated_at(&self) -> DateTime {
        self.presentation.generated_at.coerce()
    }
}

/// Unique identifier of a `Presentation`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "PresentationId",
    with = scalar::Via::<domain::presentation::Id>,
)]
pub struct Id(domain::presentation::Id);
