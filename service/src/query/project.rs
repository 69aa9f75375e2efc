//! [`Query`] collection related to a single [`Project`].

use common::operations::By;

use crate::domain::{project, Project};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Project`] by its [`project::Id`].
pub type ById = DatabaseQuery<By<Option<Project>, project::Id>>;

#[cfg(test)]
mod spec {
    use crate::{
        command::mock::{MockDatabase, MockPresenter},
        domain::{project, Locale, Project},
        Config, Query as _, Service,
    };

    use super::ById;

    #[tokio::test]
    async fn selects_project_by_id() {
        let db = MockDatabase::default();
        let project = Project::new(Locale::En, None);
        db.put(project.clone());
        let service = Service::new(Config::default(), db, MockPresenter::new());

        assert_eq!(
            service.execute(ById::by(project.id)).await.unwrap(),
            Some(project),
        );
        assert_eq!(
            service.execute(ById::by(project::Id::new())).await.unwrap(),
            None,
        );
    }
}
