use chrono::{NaiveDate, Utc};
use entity::{opportunity, prelude::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryOrder,
};

pub struct OpportunityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OpportunityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        title: String,
        company: String,
        description: String,
        location: String,
        deadline: Option<NaiveDate>,
        vacancies: i32,
        kind: String,
    ) -> Result<opportunity::Model, DbErr> {
        opportunity::ActiveModel {
            title: Set(title),
            company: Set(company),
            description: Set(description),
            location: Set(location),
            deadline: Set(deadline),
            vacancies: Set(vacancies),
            kind: Set(kind),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<opportunity::Model>, DbErr> {
        Opportunity::find_by_id(id).one(self.db).await
    }

    /// Newest opportunities first.
    pub async fn list(&self) -> Result<Vec<opportunity::Model>, DbErr> {
        Opportunity::find()
            .order_by_desc(opportunity::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        opportunity: opportunity::ActiveModel,
    ) -> Result<opportunity::Model, DbErr> {
        opportunity.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Opportunity::delete_by_id(id).exec(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Opportunity::find().count(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinculo_test_utils::prelude::*;

    mod delete {
        use super::*;
        use sea_orm::{ColumnTrait, QueryFilter};

        /// Expect applications pointing at a removed opportunity to go with it.
        #[tokio::test]
        async fn cascades_to_applications() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;
            let repository = OpportunityRepository::new(&test.state.db);

            repository.delete(opportunity.id).await?;

            let remaining = Application::find()
                .filter(entity::application::Column::OpportunityId.eq(opportunity.id))
                .count(&test.state.db)
                .await?;
            assert_eq!(remaining, 0);
            Ok(())
        }
    }
}
