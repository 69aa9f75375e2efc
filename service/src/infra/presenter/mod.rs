//! [`Presenter`]-related implementations.

#[cfg(feature = "google-slides")]
pub mod google_slides;

use derive_more::{Display, Error as StdError, From};

use crate::domain::{merge, presentation};

#[cfg(feature = "google-slides")]
pub use self::google_slides::GoogleSlides;

/// Operation over presentations stored in an external service.
pub use common::Handler as Presenter;

/// Request to copy a presentation template into a new presentation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Draft {
    /// Template to copy.
    pub template: presentation::TemplateId,

    /// Name of the created presentation.
    pub name: String,
}

/// [`merge::Plan`] to be applied to a presentation atomically.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Batch {
    /// Presentation to apply the [`merge::Plan`] to.
    pub presentation: presentation::Id,

    /// Changes to apply.
    pub plan: merge::Plan,
}

/// [`Presenter`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "google-slides")]
    /// [`GoogleSlides`] error.
    GoogleSlides(google_slides::Error),
}
