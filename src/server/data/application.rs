use chrono::{NaiveDateTime, Utc};
use entity::{application, enums::ReviewStatus, opportunity, prelude::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        student_id: i32,
        opportunity_id: i32,
    ) -> Result<application::Model, DbErr> {
        application::ActiveModel {
            student_id: Set(student_id),
            opportunity_id: Set(opportunity_id),
            status: Set(ReviewStatus::Pendiente),
            submitted_at: Set(Utc::now().naive_utc()),
            approval_at: Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<application::Model>, DbErr> {
        Application::find_by_id(id).one(self.db).await
    }

    pub async fn exists_for_pair(
        &self,
        student_id: i32,
        opportunity_id: i32,
    ) -> Result<bool, DbErr> {
        let count = Application::find()
            .filter(application::Column::StudentId.eq(student_id))
            .filter(application::Column::OpportunityId.eq(opportunity_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_for_opportunity(&self, opportunity_id: i32) -> Result<u64, DbErr> {
        Application::find()
            .filter(application::Column::OpportunityId.eq(opportunity_id))
            .count(self.db)
            .await
    }

    /// A student's applications joined with their opportunity, newest first.
    pub async fn list_for_student_with_opportunity(
        &self,
        student_id: i32,
    ) -> Result<Vec<(application::Model, Option<opportunity::Model>)>, DbErr> {
        Application::find()
            .filter(application::Column::StudentId.eq(student_id))
            .order_by_desc(application::Column::SubmittedAt)
            .find_also_related(Opportunity)
            .all(self.db)
            .await
    }

    /// A student's applications in submission order, oldest first.
    pub async fn list_for_student_ordered(
        &self,
        student_id: i32,
    ) -> Result<Vec<application::Model>, DbErr> {
        Application::find()
            .filter(application::Column::StudentId.eq(student_id))
            .order_by_asc(application::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<application::Model>, DbErr> {
        Application::find()
            .order_by_desc(application::Column::SubmittedAt)
            .all(self.db)
            .await
    }

    /// Approved applications ordered by approval timestamp, oldest first,
    /// optionally restricted to approvals inside `[start, end)`.
    pub async fn list_approved_ordered(
        &self,
        window: Option<(NaiveDateTime, NaiveDateTime)>,
    ) -> Result<Vec<application::Model>, DbErr> {
        let mut query = Application::find()
            .filter(application::Column::Status.eq(ReviewStatus::Aprobado));

        if let Some((start, end)) = window {
            query = query
                .filter(application::Column::ApprovalAt.gte(start))
                .filter(application::Column::ApprovalAt.lt(end));
        }

        query
            .order_by_asc(application::Column::ApprovalAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        application: application::ActiveModel,
    ) -> Result<application::Model, DbErr> {
        application.update(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        Application::find().count(self.db).await
    }

    pub async fn count_with_status(&self, status: ReviewStatus) -> Result<u64, DbErr> {
        Application::find()
            .filter(application::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    pub async fn count_submitted_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        Application::find()
            .filter(application::Column::SubmittedAt.gte(start))
            .filter(application::Column::SubmittedAt.lt(end))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinculo_test_utils::prelude::*;

    mod exists_for_pair {
        use super::*;

        /// Expect a true hit only for the student and opportunity that match.
        #[tokio::test]
        async fn detects_existing_pair() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let other = fixtures::insert_student(&test.state.db, 2).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;
            let repository = ApplicationRepository::new(&test.state.db);

            assert!(repository.exists_for_pair(student.id, opportunity.id).await?);
            assert!(!repository.exists_for_pair(other.id, opportunity.id).await?);
            Ok(())
        }
    }

    mod list_for_student_ordered {
        use super::*;

        /// Expect applications back in insertion order regardless of status.
        #[tokio::test]
        async fn orders_by_id() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let first = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            let second = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            let a = fixtures::insert_application(&test.state.db, student.id, first.id).await?;
            let b = fixtures::insert_application(&test.state.db, student.id, second.id).await?;
            let repository = ApplicationRepository::new(&test.state.db);

            let ordered = repository.list_for_student_ordered(student.id).await?;

            assert_eq!(
                ordered.iter().map(|m| m.id).collect::<Vec<_>>(),
                vec![a.id, b.id]
            );
            Ok(())
        }
    }

    mod list_approved_ordered {
        use super::*;
        use chrono::NaiveDate;

        /// Expect only approvals inside the window, oldest first.
        #[tokio::test]
        async fn filters_by_window() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 5, None).await?;
            let other = fixtures::insert_opportunity(&test.state.db, 5, None).await?;
            let day = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
            let inside = fixtures::insert_approved_application(
                &test.state.db,
                student.id,
                opportunity.id,
                day.and_hms_opt(10, 0, 0).unwrap(),
            )
            .await?;
            fixtures::insert_approved_application(
                &test.state.db,
                student.id,
                other.id,
                day.succ_opt().unwrap().and_hms_opt(9, 0, 0).unwrap(),
            )
            .await?;
            let repository = ApplicationRepository::new(&test.state.db);

            let window = (
                day.and_hms_opt(0, 0, 0).unwrap(),
                day.succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap(),
            );
            let rows = repository.list_approved_ordered(Some(window)).await?;

            assert_eq!(rows.iter().map(|m| m.id).collect::<Vec<_>>(), vec![inside.id]);
            Ok(())
        }
    }
}
