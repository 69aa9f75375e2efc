//! In-memory [`Database`] and [`Presenter`] used by [`Command`] tests.
//!
//! [`Command`]: super::Command

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use common::operations::{By, Duplicate, Insert, Select, Submit, Update};
use tracerr::Traced;

use crate::{
    domain::{merge, presentation, presentation::Layout, project, Project},
    infra::{
        database,
        presenter::{self, google_slides, Batch, Draft},
        Database, Presenter,
    },
};

/// [`Database`] keeping [`Project`]s in memory.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockDatabase(Arc<Mutex<HashMap<project::Id, Project>>>);

impl MockDatabase {
    /// Stores the provided [`Project`].
    pub(crate) fn put(&self, project: Project) {
        _ = self.0.lock().unwrap().insert(project.id, project);
    }

    /// Returns the stored [`Project`] with the provided [`project::Id`].
    pub(crate) fn get(&self, id: project::Id) -> Option<Project> {
        self.0.lock().unwrap().get(&id).cloned()
    }
}

impl Database<Select<By<Option<Project>, project::Id>>> for MockDatabase {
    type Ok = Option<Project>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Project>, project::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.get(by.into_inner()))
    }
}

impl Database<Insert<Project>> for MockDatabase {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(project): Insert<Project>,
    ) -> Result<Self::Ok, Self::Err> {
        self.put(project);
        Ok(())
    }
}

impl Database<Update<Project>> for MockDatabase {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(project): Update<Project>,
    ) -> Result<Self::Ok, Self::Err> {
        self.put(project);
        Ok(())
    }
}

/// Call received by a [`MockPresenter`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Call {
    /// Template copying.
    Duplicate { template: String, name: String },

    /// [`Layout`] reading.
    Layout(String),

    /// [`merge::Plan`] submission.
    Submit(merge::Plan),
}

/// [`Presenter`] recording its [`Call`]s.
#[derive(Clone, Debug)]
pub(crate) struct MockPresenter {
    /// ID given to copies.
    copy_id: String,

    /// [`Layout`] of copies.
    layout: Layout,

    /// Message of the error every [`Call`] fails with, if any.
    failure: Option<String>,

    /// Recorded [`Call`]s.
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockPresenter {
    /// Creates a new [`MockPresenter`] producing empty copies.
    pub(crate) fn new() -> Self {
        Self {
            copy_id: "copy".to_owned(),
            layout: Layout::default(),
            failure: None,
            calls: Arc::default(),
        }
    }

    /// Sets the ID given to copies.
    pub(crate) fn copy_as(mut self, id: &str) -> Self {
        id.clone_into(&mut self.copy_id);
        self
    }

    /// Sets the [`Layout`] of copies.
    pub(crate) fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Makes every [`Call`] fail with the provided `message`.
    pub(crate) fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_owned());
        self
    }

    /// Returns the recorded [`Call`]s.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Records the provided [`Call`], failing if configured so.
    fn record(&self, call: Call) -> Result<(), Traced<presenter::Error>> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(tracerr::new!(presenter::Error::from(
                google_slides::Error::Api {
                    status: 403,
                    message: message.clone(),
                }
            ))),
            None => Ok(()),
        }
    }
}

impl Presenter<Duplicate<Draft>> for MockPresenter {
    type Ok = presentation::Id;
    type Err = Traced<presenter::Error>;

    async fn execute(
        &self,
        Duplicate(draft): Duplicate<Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.record(Call::Duplicate {
            template: draft.template.to_string(),
            name: draft.name,
        })?;
        Ok(presentation::Id::new(self.copy_id.clone()).unwrap())
    }
}

impl Presenter<Select<By<Layout, presentation::Id>>> for MockPresenter {
    type Ok = Layout;
    type Err = Traced<presenter::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Layout, presentation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.record(Call::Layout(by.into_inner().to_string()))?;
        Ok(self.layout.clone())
    }
}

impl Presenter<Submit<Batch>> for MockPresenter {
    type Ok = ();
    type Err = Traced<presenter::Error>;

    async fn execute(
        &self,
        Submit(batch): Submit<Batch>,
    ) -> Result<Self::Ok, Self::Err> {
        self.record(Call::Submit(batch.plan))
    }
}
