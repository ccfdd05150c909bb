use chrono::Utc;
use entity::{enums::ReviewStatus, prelude::*, tutor_request};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Aggregated row for the tutor workload chart.
#[derive(Debug, FromQueryResult)]
pub struct TutorWorkloadRow {
    pub tutor_name: String,
    pub students: i64,
}

pub struct TutorRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TutorRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        student_id: i32,
        title: String,
        document_reference: String,
    ) -> Result<tutor_request::Model, DbErr> {
        tutor_request::ActiveModel {
            student_id: Set(student_id),
            title: Set(title),
            document_reference: Set(document_reference),
            status: Set(ReviewStatus::Pendiente),
            submitted_at: Set(Utc::now().naive_utc()),
            assigned_tutor_name: Set(None),
            assigned_tutor_email: Set(None),
            memo_reference: Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<tutor_request::Model>, DbErr> {
        TutorRequest::find_by_id(id).one(self.db).await
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<tutor_request::Model>, DbErr> {
        TutorRequest::find()
            .filter(tutor_request::Column::StudentId.eq(student_id))
            .order_by_desc(tutor_request::Column::SubmittedAt)
            .all(self.db)
            .await
    }

    /// A student's requests in submission order, oldest first.
    pub async fn list_for_student_ordered(
        &self,
        student_id: i32,
    ) -> Result<Vec<tutor_request::Model>, DbErr> {
        TutorRequest::find()
            .filter(tutor_request::Column::StudentId.eq(student_id))
            .order_by_asc(tutor_request::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<tutor_request::Model>, DbErr> {
        TutorRequest::find()
            .order_by_desc(tutor_request::Column::SubmittedAt)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        request: tutor_request::ActiveModel,
    ) -> Result<tutor_request::Model, DbErr> {
        request.update(self.db).await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        TutorRequest::find().count(self.db).await
    }

    pub async fn count_with_status(&self, status: ReviewStatus) -> Result<u64, DbErr> {
        TutorRequest::find()
            .filter(tutor_request::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    pub async fn count_with_memo(&self) -> Result<u64, DbErr> {
        TutorRequest::find()
            .filter(tutor_request::Column::MemoReference.is_not_null())
            .count(self.db)
            .await
    }

    /// Students per assigned tutor, over approved requests that have a tutor.
    pub async fn workload(&self) -> Result<Vec<TutorWorkloadRow>, DbErr> {
        TutorRequest::find()
            .select_only()
            .column_as(tutor_request::Column::AssignedTutorName, "tutor_name")
            .column_as(tutor_request::Column::Id.count(), "students")
            .filter(tutor_request::Column::Status.eq(ReviewStatus::Aprobado))
            .filter(tutor_request::Column::AssignedTutorName.is_not_null())
            .group_by(tutor_request::Column::AssignedTutorName)
            .into_model::<TutorWorkloadRow>()
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinculo_test_utils::prelude::*;

    mod workload {
        use super::*;
        use sea_orm::ActiveModelTrait;

        /// Expect one row per assigned tutor with the number of their students.
        #[tokio::test]
        async fn groups_by_tutor() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let other = fixtures::insert_student(&test.state.db, 2).await?;
            for student_id in [student.id, other.id] {
                let request = fixtures::insert_tutor_request(&test.state.db, student_id).await?;
                let mut active: tutor_request::ActiveModel = request.into();
                active.status = Set(ReviewStatus::Aprobado);
                active.assigned_tutor_name = Set(Some("Ing. Vega".to_string()));
                active.update(&test.state.db).await?;
            }
            fixtures::insert_tutor_request(&test.state.db, student.id).await?;
            let repository = TutorRequestRepository::new(&test.state.db);

            let rows = repository.workload().await?;

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].tutor_name, "Ing. Vega");
            assert_eq!(rows[0].students, 2);
            Ok(())
        }

        /// Expect a pending request to stay out of the chart even when a
        /// tutor name is already filled in.
        #[tokio::test]
        async fn ignores_unapproved_requests() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let request = fixtures::insert_tutor_request(&test.state.db, student.id).await?;
            let mut active: tutor_request::ActiveModel = request.into();
            active.assigned_tutor_name = Set(Some("Ing. Vega".to_string()));
            active.update(&test.state.db).await?;
            let repository = TutorRequestRepository::new(&test.state.db);

            let rows = repository.workload().await?;

            assert!(rows.is_empty());
            Ok(())
        }
    }

    mod count_with_memo {
        use super::*;
        use sea_orm::ActiveModelTrait;

        /// Expect only requests that carry a memo reference to count.
        #[tokio::test]
        async fn counts_memos_only() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let request = fixtures::insert_tutor_request(&test.state.db, student.id).await?;
            fixtures::insert_tutor_request(&test.state.db, student.id).await?;
            let mut active: tutor_request::ActiveModel = request.into();
            active.memo_reference = Set(Some("memos/memo_1_carta.pdf".to_string()));
            active.update(&test.state.db).await?;
            let repository = TutorRequestRepository::new(&test.state.db);

            assert_eq!(repository.count_with_memo().await?, 1);
            Ok(())
        }
    }
}
