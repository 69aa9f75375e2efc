//! [`Command`] for creating a new [`Project`].

use common::operations::Insert;
use tracerr::Traced;

use crate::{
    domain::{presentation::TemplateId, Locale, Project},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new blank [`Project`].
#[derive(Clone, Debug, Default)]
pub struct CreateProject {
    /// [`Locale`] of a new [`Project`].
    pub locale: Locale,

    /// Template chosen for a new [`Project`], if any.
    pub template: Option<TemplateId>,
}

impl<Db, Pr> Command<CreateProject> for Service<Db, Pr>
where
    Db: Database<Insert<Project>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Project;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateProject) -> Result<Self::Ok, Self::Err> {
        let CreateProject { locale, template } = cmd;

        let project = Project::new(locale, template);
        self.database()
            .execute(Insert(project.clone()))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(project)
    }
}

/// Error of [`CreateProject`] [`Command`] execution.
pub type ExecutionError = database::Error;
