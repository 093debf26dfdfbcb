use sea_orm::DatabaseConnection;

use crate::{
    model::manual::{ManualDto, SaveManualDto},
    server::{
        data::manual::ManualRepository,
        error::{manual::ManualError, Error},
        model::db::ManualModel,
    },
};

/// Whether [`ManualService::save`] created a manual or replaced an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Overwritten,
}

/// Manages the manual library used as diagnosis context.
pub struct ManualService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManualService<'a> {
    /// Creates a new instance of [`ManualService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Manuals, most recently updated first, matching the search term on title, brand or model
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<ManualDto>, Error> {
        let term = search.unwrap_or_default();

        let manuals = ManualRepository::new(self.db).list_recent().await?;

        Ok(manuals
            .into_iter()
            .map(manual_to_dto)
            .filter(|manual| manual.matches(term))
            .collect())
    }

    /// The manual for an equipment model
    pub async fn lookup(&self, model: &str) -> Result<ManualDto, Error> {
        let manual = ManualRepository::new(self.db)
            .find_by_model(model)
            .await?
            .ok_or(ManualError::NotFound)?;

        Ok(manual_to_dto(manual))
    }

    /// Creates the manual for a model, or replaces it when `overwrite` is set.
    ///
    /// # Returns
    /// - `Ok((ManualDto, SaveOutcome))` - The stored manual and whether it was new
    /// - `Err(Error::ManualError(MissingFields))` - Title or model is blank
    /// - `Err(Error::ManualError(Conflict))` - A manual exists for the model and `overwrite` is not set
    pub async fn save(&self, manual: &SaveManualDto) -> Result<(ManualDto, SaveOutcome), Error> {
        if manual.title.trim().is_empty() || manual.model.trim().is_empty() {
            return Err(ManualError::MissingFields.into());
        }

        let manual_repo = ManualRepository::new(self.db);

        match manual_repo.find_by_model(&manual.model).await? {
            Some(existing) if manual.overwrite => {
                let updated = manual_repo.update(existing, manual).await?;

                Ok((manual_to_dto(updated), SaveOutcome::Overwritten))
            }
            Some(_) => Err(ManualError::Conflict(manual.model.trim().to_string()).into()),
            None => {
                let created = manual_repo.create(manual).await?;

                Ok((manual_to_dto(created), SaveOutcome::Created))
            }
        }
    }

    pub async fn delete(&self, manual_id: i32) -> Result<(), Error> {
        let result = ManualRepository::new(self.db).delete(manual_id).await?;

        if result.rows_affected == 0 {
            return Err(ManualError::NotFound.into());
        }

        Ok(())
    }
}

fn manual_to_dto(manual: ManualModel) -> ManualDto {
    ManualDto {
        id: manual.id,
        title: manual.title,
        brand: manual.brand,
        model: manual.model,
        category: manual.category,
        content: manual.content,
        updated_at: manual.updated_at,
    }
}
