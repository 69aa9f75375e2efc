//! Infrastructure layer.

pub mod database;
pub mod presenter;

pub use self::{database::Database, presenter::Presenter};
#[cfg(feature = "postgres")]
pub use self::database::{postgres, Postgres};
#[cfg(feature = "google-slides")]
pub use self::presenter::{google_slides, GoogleSlides};
