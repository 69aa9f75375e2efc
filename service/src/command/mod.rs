//! [`Command`] definition.

pub mod create_project;
pub mod generate_presentation;
pub mod update_project;

#[cfg(test)]
pub(crate) mod mock;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    create_project::CreateProject, generate_presentation::GeneratePresentation,
    update_project::UpdateProject,
};
