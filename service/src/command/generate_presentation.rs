//! [`Command`] for generating a [`Presentation`] of a [`Project`].

use common::operations::{By, Duplicate, Select, Submit, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::presentation::TemplateId;
use crate::{
    domain::{
        merge,
        presentation::{self, Layout},
        project, Locale, Presentation, Project,
    },
    infra::{
        database,
        presenter::{self, Batch, Draft},
        Database, Presenter,
    },
    Service,
};

use super::Command;

/// [`Command`] for generating a [`Presentation`] of a [`Project`] from its
/// template.
///
/// A [`Project`] already having a [`Presentation`] gets it returned as is.
#[derive(Clone, Copy, Debug, From)]
pub struct GeneratePresentation {
    /// ID of the [`Project`] to generate a [`Presentation`] for.
    pub project_id: project::Id,
}

impl<Db, Pr> Command<GeneratePresentation> for Service<Db, Pr>
where
    Db: Database<
            Select<By<Option<Project>, project::Id>>,
            Ok = Option<Project>,
            Err = Traced<database::Error>,
        > + Database<Update<Project>, Ok = (), Err = Traced<database::Error>>,
    Pr: Presenter<
            Duplicate<Draft>,
            Ok = presentation::Id,
            Err = Traced<presenter::Error>,
        > + Presenter<
            Select<By<Layout, presentation::Id>>,
            Ok = Layout,
            Err = Traced<presenter::Error>,
        > + Presenter<Submit<Batch>, Ok = (), Err = Traced<presenter::Error>>,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: GeneratePresentation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let GeneratePresentation { project_id } = cmd;

        let mut project = self
            .database()
            .execute(Select(By::<Option<Project>, _>::new(project_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ProjectNotExists(project_id))
            .map_err(tracerr::wrap!())?;
        if let Some(presentation) = &project.presentation {
            log::debug!(
                "reusing `{}` presentation of `Project(id: {project_id})`",
                presentation.id,
            );
            return Ok(Output {
                presentation: presentation.clone(),
                locale: project.locale,
            });
        }

        let template = project
            .template
            .clone()
            .or_else(|| self.config().default_template.clone())
            .ok_or(E::NoTemplate(project_id))
            .map_err(tracerr::wrap!())?;

        let id = self
            .presenter()
            .execute(Duplicate(Draft {
                template,
                name: project.locale.presentation_name(project.title()),
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let layout = self
            .presenter()
            .execute(Select(By::<Layout, _>::new(id.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let plan = merge::Plan::compute(
            &project.property,
            &project.image_assignments(),
            &project.selection,
            &layout,
        );
        log::info!(
            "filling `{id}` presentation of `Project(id: {project_id})` \
             with {} changes",
            plan.len(),
        );
        self.presenter()
            .execute(Submit(Batch {
                presentation: id.clone(),
                plan,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let presentation = Presentation {
            id,
            generated_at: presentation::GenerationDateTime::now(),
        };
        let locale = project.locale;
        project.presentation = Some(presentation.clone());
        project.updated_at = project::ModificationDateTime::now();
        self.database()
            .execute(Update(project))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(Output {
            presentation,
            locale,
        })
    }
}

/// Output of [`GeneratePresentation`] [`Command`].
#[derive(Clone, Debug)]
pub struct Output {
    /// Generated or already existing [`Presentation`].
    pub presentation: Presentation,

    /// [`Locale`] of the [`Project`] the [`Presentation`] belongs to.
    pub locale: Locale,
}

/// Error of [`GeneratePresentation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Presenter`] error.
    #[display("`Presenter` operation failed: {_0}")]
    Presenter(presenter::Error),

    /// [`Project`] doesn't exist.
    #[display("`Project(id: {_0})` does not exist")]
    #[from(ignore)]
    ProjectNotExists(#[error(not(source))] project::Id),

    /// Neither the [`Project`] nor the [`Service`] defines a [`TemplateId`].
    #[display("no template is set for `Project(id: {_0})`")]
    #[from(ignore)]
    NoTemplate(#[error(not(source))] project::Id),
}
