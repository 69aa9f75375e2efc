//! [`Command`] for updating a [`Project`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        image, page, presentation::TemplateId, project, Locale, Project,
        Property,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating a [`Project`] with the wizard's input.
///
/// Absent values are left unchanged.
#[derive(Clone, Debug)]
pub struct UpdateProject {
    /// ID of the [`Project`] to be updated.
    pub project_id: project::Id,

    /// New [`Locale`] of the [`Project`].
    pub locale: Option<Locale>,

    /// New [`Property`] of the [`Project`], replacing the whole one.
    pub property: Option<Property>,

    /// New uploaded images of the [`Project`], in upload order.
    pub images: Option<Vec<image::Url>>,

    /// New [`page::Selection`] of the [`Project`].
    pub selection: Option<page::Selection>,

    /// New template of the [`Project`].
    pub template: Option<TemplateId>,
}

impl UpdateProject {
    /// Creates a new [`UpdateProject`] [`Command`] changing nothing.
    #[must_use]
    pub fn new(project_id: project::Id) -> Self {
        Self {
            project_id,
            locale: None,
            property: None,
            images: None,
            selection: None,
            template: None,
        }
    }
}

impl<Db, Pr> Command<UpdateProject> for Service<Db, Pr>
where
    Db: Database<
            Select<By<Option<Project>, project::Id>>,
            Ok = Option<Project>,
            Err = Traced<database::Error>,
        > + Database<Update<Project>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Project;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateProject) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateProject {
            project_id,
            locale,
            property,
            images,
            selection,
            template,
        } = cmd;

        if let Some(name) = property.as_ref().and_then(|p| {
            p.iter()
                .map(|(name, _)| name)
                .find(|name| !Property::is_valid_name(name))
        }) {
            return Err(tracerr::new!(E::InvalidPropertyField(
                name.to_owned()
            )));
        }

        let mut project = self
            .database()
            .execute(Select(By::<Option<Project>, _>::new(project_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ProjectNotExists(project_id))
            .map_err(tracerr::wrap!())?;

        if let Some(locale) = locale {
            project.locale = locale;
        }
        if let Some(property) = property {
            project.property = property;
        }
        if let Some(images) = images {
            project.images = images;
        }
        if let Some(selection) = selection {
            project.selection = selection;
        }
        if let Some(template) = template {
            project.template = Some(template);
        }
        project.updated_at = project::ModificationDateTime::now();

        self.database()
            .execute(Update(project.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(project)
    }
}

/// Error of [`UpdateProject`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Project`] doesn't exist.
    #[display("`Project(id: {_0})` does not exist")]
    #[from(ignore)]
    ProjectNotExists(#[error(not(source))] project::Id),

    /// [`Property`] contains a field with an invalid name.
    #[display("`{_0}` is not a valid property field name")]
    #[from(ignore)]
    InvalidPropertyField(#[error(not(source))] String),
}
