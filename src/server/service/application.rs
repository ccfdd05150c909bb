use std::collections::HashMap;

use entity::prelude::*;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    model::application::{AdminApplicationDto, StudentApplicationDto},
    server::{
        data::{application::ApplicationRepository, opportunity::OpportunityRepository},
        error::{application::ApplicationError, Error},
        util::time,
    },
};

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits an application for a student.
    ///
    /// Refused when the student already applied to the opportunity, when the
    /// deadline has passed, or when submissions have consumed every vacancy.
    pub async fn submit(
        &self,
        student_id: i32,
        opportunity_id: i32,
    ) -> Result<entity::application::Model, Error> {
        let application_repository = ApplicationRepository::new(self.db);
        let opportunity_repository = OpportunityRepository::new(self.db);

        let opportunity = opportunity_repository
            .get(opportunity_id)
            .await?
            .ok_or(ApplicationError::OpportunityNotFound(opportunity_id))?;

        if application_repository
            .exists_for_pair(student_id, opportunity_id)
            .await?
        {
            return Err(ApplicationError::Duplicate {
                student_id,
                opportunity_id,
            }
            .into());
        }

        if let Some(deadline) = opportunity.deadline {
            if time::civil_today() > deadline {
                return Err(ApplicationError::Expired(opportunity_id).into());
            }
        }

        // Check-then-act; concurrent submissions can overshoot the cap.
        let submitted = application_repository
            .count_for_opportunity(opportunity_id)
            .await?;
        if submitted >= opportunity.vacancies as u64 {
            return Err(ApplicationError::Full(opportunity_id).into());
        }

        let application = application_repository
            .create(student_id, opportunity_id)
            .await?;

        Ok(application)
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<StudentApplicationDto>, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        let rows = application_repository
            .list_for_student_with_opportunity(student_id)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(application, opportunity)| StudentApplicationDto {
                id: application.id,
                opportunity_id: application.opportunity_id,
                status: application.status,
                submitted_at: application.submitted_at.format("%Y-%m-%d").to_string(),
                opportunity_title: opportunity.as_ref().map(|o| o.title.clone()),
                company: opportunity.as_ref().map(|o| o.company.clone()),
                location: opportunity.as_ref().map(|o| o.location.clone()),
                kind: opportunity.map(|o| o.kind),
            })
            .collect())
    }

    /// Every application on record, enriched with student and opportunity
    /// fields for the admin review listing.
    pub async fn list_all(&self) -> Result<Vec<AdminApplicationDto>, Error> {
        let application_repository = ApplicationRepository::new(self.db);

        let applications = application_repository.list_all().await?;

        let student_ids: Vec<i32> = applications.iter().map(|a| a.student_id).collect();
        let opportunity_ids: Vec<i32> = applications.iter().map(|a| a.opportunity_id).collect();

        let students: HashMap<i32, entity::user::Model> = User::find()
            .filter(entity::user::Column::Id.is_in(student_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let opportunities: HashMap<i32, entity::opportunity::Model> = Opportunity::find()
            .filter(entity::opportunity::Column::Id.is_in(opportunity_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|o| (o.id, o))
            .collect();

        Ok(applications
            .into_iter()
            .map(|application| {
                let student = students.get(&application.student_id);
                let opportunity = opportunities.get(&application.opportunity_id);

                AdminApplicationDto {
                    id: application.id,
                    student_id: application.student_id,
                    opportunity_id: application.opportunity_id,
                    status: application.status,
                    submitted_at: application.submitted_at.format("%Y-%m-%d").to_string(),
                    student_name: student.map(|s| s.name.clone()),
                    student_email: student.map(|s| s.email.clone()),
                    opportunity_title: opportunity.map(|o| o.title.clone()),
                    kind: opportunity.map(|o| o.kind.clone()),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinculo_test_utils::prelude::*;

    mod submit {
        use super::*;
        use chrono::NaiveDate;

        /// Expect a fresh submission to start out pending.
        #[tokio::test]
        async fn creates_pending_application() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            let service = ApplicationService::new(&test.state.db);

            let application = service.submit(student.id, opportunity.id).await.unwrap();

            assert_eq!(application.status, entity::enums::ReviewStatus::Pendiente);
            assert_eq!(application.approval_at, None);
            Ok(())
        }

        /// Expect a second submission to the same opportunity to be refused.
        #[tokio::test]
        async fn rejects_duplicate() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            let service = ApplicationService::new(&test.state.db);

            service.submit(student.id, opportunity.id).await.unwrap();
            let result = service.submit(student.id, opportunity.id).await;

            assert!(matches!(
                result,
                Err(Error::ApplicationError(ApplicationError::Duplicate { .. }))
            ));
            Ok(())
        }

        /// Expect submissions after the deadline to be refused.
        #[tokio::test]
        async fn rejects_expired() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let past = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let opportunity =
                fixtures::insert_opportunity(&test.state.db, 3, Some(past)).await?;
            let service = ApplicationService::new(&test.state.db);

            let result = service.submit(student.id, opportunity.id).await;

            assert!(matches!(
                result,
                Err(Error::ApplicationError(ApplicationError::Expired(_)))
            ));
            Ok(())
        }

        /// Expect the vacancy cap to close an opportunity once reached.
        #[tokio::test]
        async fn rejects_when_full() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let first = fixtures::insert_student(&test.state.db, 1).await?;
            let second = fixtures::insert_student(&test.state.db, 2).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 1, None).await?;
            let service = ApplicationService::new(&test.state.db);

            service.submit(first.id, opportunity.id).await.unwrap();
            let result = service.submit(second.id, opportunity.id).await;

            assert!(matches!(
                result,
                Err(Error::ApplicationError(ApplicationError::Full(_)))
            ));
            Ok(())
        }

        /// Expect an unknown opportunity id to report not found.
        #[tokio::test]
        async fn rejects_missing_opportunity() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let service = ApplicationService::new(&test.state.db);

            let result = service.submit(student.id, 999).await;

            assert!(matches!(
                result,
                Err(Error::ApplicationError(
                    ApplicationError::OpportunityNotFound(_)
                ))
            ));
            Ok(())
        }
    }

    mod list_for_student {
        use super::*;

        /// Expect rows to carry the joined opportunity fields.
        #[tokio::test]
        async fn enriches_with_opportunity() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;
            let service = ApplicationService::new(&test.state.db);

            let rows = service.list_for_student(student.id).await?;

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].company.as_deref(), Some("Acme"));
            Ok(())
        }
    }
}
