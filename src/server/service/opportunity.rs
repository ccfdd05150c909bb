use sea_orm::{ActiveValue::Set, DatabaseConnection};

use crate::{
    model::opportunity::{NewOpportunityDto, OpportunityDto, OpportunityPatchDto},
    server::{
        data::opportunity::OpportunityRepository,
        error::{application::ApplicationError, Error},
    },
};

pub struct OpportunityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OpportunityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, body: NewOpportunityDto) -> Result<OpportunityDto, Error> {
        let opportunity_repository = OpportunityRepository::new(self.db);

        if body.title.trim().is_empty() || body.company.trim().is_empty() {
            return Err(Error::ValidationError(
                "Título y empresa son obligatorios".to_string(),
            ));
        }

        let vacancies = body.vacancies.unwrap_or(1);
        if vacancies < 1 {
            return Err(Error::ValidationError(
                "Las vacantes deben ser al menos 1".to_string(),
            ));
        }

        let opportunity = opportunity_repository
            .create(
                body.title,
                body.company,
                body.description,
                body.location,
                body.deadline,
                vacancies,
                body.kind.unwrap_or_else(|| "pasantia".to_string()),
            )
            .await?;

        Ok(opportunity.into())
    }

    pub async fn list(&self) -> Result<Vec<OpportunityDto>, Error> {
        let opportunity_repository = OpportunityRepository::new(self.db);

        let opportunities = opportunity_repository.list().await?;

        Ok(opportunities.into_iter().map(OpportunityDto::from).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        patch: OpportunityPatchDto,
    ) -> Result<OpportunityDto, Error> {
        let opportunity_repository = OpportunityRepository::new(self.db);

        let opportunity = opportunity_repository
            .get(id)
            .await?
            .ok_or(ApplicationError::OpportunityNotFound(id))?;

        if let Some(vacancies) = patch.vacancies {
            if vacancies < 1 {
                return Err(Error::ValidationError(
                    "Las vacantes deben ser al menos 1".to_string(),
                ));
            }
        }

        let mut active: entity::opportunity::ActiveModel = opportunity.into();
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(company) = patch.company {
            active.company = Set(company);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(location) = patch.location {
            active.location = Set(location);
        }
        if let Some(deadline) = patch.deadline {
            active.deadline = Set(Some(deadline));
        }
        if let Some(vacancies) = patch.vacancies {
            active.vacancies = Set(vacancies);
        }
        if let Some(kind) = patch.kind {
            active.kind = Set(kind);
        }

        let updated = opportunity_repository.update(active).await?;

        Ok(updated.into())
    }

    /// Removes an opportunity; applications pointing at it cascade away.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let opportunity_repository = OpportunityRepository::new(self.db);

        let result = opportunity_repository.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(ApplicationError::OpportunityNotFound(id).into());
        }

        Ok(())
    }
}
