//! [`Project`]-related [`Database`] implementations.

use common::operations::{By, Insert, Select, Update};
use postgres_types::Json;
use tracerr::Traced;

use crate::{
    domain::{
        image, page, presentation, project, Presentation, Project, Property,
    },
    infra::{
        database::{self, Postgres},
        Database,
    },
};

impl Database<Select<By<Option<Project>, project::Id>>> for Postgres {
    type Ok = Option<Project>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Project>, project::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        const SQL: &str = "\
            SELECT id, locale, template, \
                   property, images, selection, \
                   presentation_id, presentation_generated_at, \
                   created_at, updated_at \
            FROM projects \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| {
                let presentation_id: Option<presentation::Id> =
                    row.get("presentation_id");
                let generated_at: Option<presentation::GenerationDateTime> =
                    row.get("presentation_generated_at");
                Project {
                    id: row.get("id"),
                    locale: row.get("locale"),
                    template: row.get("template"),
                    property: row.get::<_, Json<Property>>("property").0,
                    images: row.get::<_, Json<Vec<image::Url>>>("images").0,
                    selection: row
                        .get::<_, Json<page::Selection>>("selection")
                        .0,
                    presentation: presentation_id.zip(generated_at).map(
                        |(id, generated_at)| Presentation { id, generated_at },
                    ),
                    created_at: row.get("created_at"),
                    updated_at: row.get("updated_at"),
                }
            }))
    }
}

impl Database<Insert<Project>> for Postgres
where
    Self: Database<Update<Project>, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(project): Insert<Project>,
    ) -> Result<Self::Ok, Self::Err> {
        self.execute(Update(project)).await.map_err(tracerr::wrap!())
    }
}

impl Database<Update<Project>> for Postgres {
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Update(project): Update<Project>,
    ) -> Result<Self::Ok, Self::Err> {
        let title = project.title().map(ToOwned::to_owned);
        let address = project.address();
        let Project {
            id,
            locale,
            template,
            property,
            images,
            selection,
            presentation,
            created_at,
            updated_at,
        } = project;

        let (presentation_id, generated_at) = presentation
            .map(|p| (p.id, p.generated_at))
            .unzip();
        let (property, images, selection) =
            (Json(property), Json(images), Json(selection));

        const SQL: &str = "\
            INSERT INTO projects (\
                id, locale, template, \
                title, address, \
                property, images, selection, \
                presentation_id, presentation_generated_at, \
                created_at, updated_at \
            ) VALUES (\
                $1::UUID, $2::INT2, $3::VARCHAR, \
                $4::VARCHAR, $5::VARCHAR, \
                $6::JSONB, $7::JSONB, $8::JSONB, \
                $9::VARCHAR, $10::TIMESTAMPTZ, \
                $11::TIMESTAMPTZ, $12::TIMESTAMPTZ \
            ) \
            ON CONFLICT (id) DO UPDATE \
            SET locale = EXCLUDED.locale, \
                template = EXCLUDED.template, \
                title = EXCLUDED.title, \
                address = EXCLUDED.address, \
                property = EXCLUDED.property, \
                images = EXCLUDED.images, \
                selection = EXCLUDED.selection, \
                presentation_id = EXCLUDED.presentation_id, \
                presentation_generated_at = \
                    EXCLUDED.presentation_generated_at, \
                updated_at = EXCLUDED.updated_at";
        self.exec(
            SQL,
            &[
                &id,
                &locale,
                &template,
                &title,
                &address,
                &property,
                &images,
                &selection,
                &presentation_id,
                &generated_at,
                &created_at,
                &updated_at,
            ],
        )
        .await
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}
