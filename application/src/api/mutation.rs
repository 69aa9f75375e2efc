//! GraphQL [`Mutation`]s definitions.

use juniper::graphql_object;
use service::{command, Command as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL mutations.
#[derive(Clone, Copy, Debug)]
pub struct Mutation;

impl Mutation {
    /// Name of the [`tracing::Span`] for the mutations.
    const SPAN_NAME: &'static str = "GraphQL mutation";
}

#[graphql_object(context = Context)]
impl Mutation {
    /// Creates a new blank `Project`.
    ///
    /// Without a `template` the server's default one is used on generation.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "createProject",
            locale = ?locale,
            otel.name = Self::SPAN_NAME,
            template = ?template.as_ref().map(ToString::to_string),
        ),
    )]
    pub async fn create_project(
        locale: Option<api::project::Locale>,
        template: Option<api::scalar::TemplateId>,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        ctx.service()
            .execute(command::CreateProject {
                locale: locale.map(Into::into).unwrap_or_default(),
                template: template.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Updates the `Project` with the provided wizard input.
    ///
    /// Omitted arguments leave the corresponding data unchanged. Provided
    /// `fields` replace all the property fields of the `Project`.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist;
    /// - `INVALID_PROPERTY_FIELD` - a field name is not a valid identifier.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "updateProject",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn update_project(
        id: api::project::Id,
        locale: Option<api::project::Locale>,
        fields: Option<Vec<api::project::FieldInput>>,
        images: Option<Vec<api::scalar::ImageUrl>>,
        pages: Option<Vec<api::project::PageSelectionInput>>,
        template: Option<api::scalar::TemplateId>,
        ctx: &Context,
    ) -> Result<api::Project, Error> {
        ctx.service()
            .execute(command::UpdateProject {
                project_id: id.into(),
                locale: locale.map(Into::into),
                property: fields.map(api::project::property),
                images: images
                    .map(|i| i.into_iter().map(Into::into).collect()),
                selection: pages.map(api::project::selection),
                template: template.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Generates the `Presentation` of the `Project` from its template.
    ///
    /// Returns the existing `Presentation` if it was generated already.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROJECT_NOT_EXISTS` - the `Project` with the specified ID does not
    ///                          exist;
    /// - `TEMPLATE_REQUIRED` - neither the `Project` nor the server defines a
    ///                         template;
    /// - `GENERATION_FAILED` - the presentation service rejected a request.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "generatePresentation",
            otel.name = Self::SPAN_NAME,
            project_id = %project_id,
        ),
    )]
    pub async fn generate_presentation(
        project_id: api::project::Id,
        ctx: &Context,
    ) -> Result<api::Presentation, Error> {
        ctx.service()
            .execute(command::GeneratePresentation {
                project_id: project_id.into(),
            })
            .await
            .map(Into::into)
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }
}

impl AsError for command::update_project::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "INVALID_PROPERTY_FIELD"]
                #[status = BAD_REQUEST]
                #[message = "Property field name must start with a letter \
                             and contain only letters, digits and `_`"]
                InvalidPropertyField,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::ProjectNotExists(_) => {
                Some(api::ProjectError::NotExists.into())
            }
            Self::InvalidPropertyField(_) => {
                Some(Error::InvalidPropertyField.into())
            }
        }
    }
}

impl AsError for command::generate_presentation::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "TEMPLATE_REQUIRED"]
                #[status = UNPROCESSABLE_ENTITY]
                #[message = "`Project` has no template and no default one \
                             is configured"]
                TemplateRequired,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::Presenter(e) => e.try_as_error(),
            Self::ProjectNotExists(_) => {
                Some(api::ProjectError::NotExists.into())
            }
            Self::NoTemplate(_) => Some(Error::TemplateRequired.into()),
        }
    }
}
