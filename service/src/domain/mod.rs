//! Domain definitions.

pub mod image;
pub mod locale;
pub mod merge;
pub mod page;
pub mod presentation;
pub mod project;
pub mod property;

pub use self::{
    locale::Locale, presentation::Presentation, project::Project,
    property::Property,
};
