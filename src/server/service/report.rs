//! Daily matching report.
//!
//! Correlates approved applications with tutor requests. There is no foreign
//! key between the two tables; the pairing is positional, matching the n-th
//! application a student ever submitted with their n-th tutor request.
//
// TODO: replace the positional pairing with an explicit application_id column
// on tutor_request and a backfill migration; position breaks as soon as a
// student's applications and requests stop arriving in lockstep.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    model::report::ReportRowDto,
    server::{
        data::{
            application::ApplicationRepository, certification::CertificationRepository,
            experience::ExperienceRepository, opportunity::OpportunityRepository,
            tutor_request::TutorRequestRepository, user::UserRepository,
        },
        error::Error,
    },
};

/// Per-student state cached while walking the approved applications.
struct StudentContext {
    name: String,
    email: String,
    has_documentation: bool,
    applications: Vec<i32>,
    tutor_requests: Vec<entity::tutor_request::Model>,
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the daily report.
    ///
    /// With a date, only approvals stamped on that civil day are included;
    /// without one, every approved application appears. Rows are ordered
    /// newest approval first.
    pub async fn daily_report(&self, date: Option<NaiveDate>) -> Result<Vec<ReportRowDto>, Error> {
        let application_repository = ApplicationRepository::new(self.db);
        let opportunity_repository = OpportunityRepository::new(self.db);

        let window = match date {
            Some(day) => {
                let start = day
                    .and_hms_opt(0, 0, 0)
                    .ok_or_else(|| Error::ParseError(format!("Invalid report date {day}")))?;
                let end = day
                    .checked_add_days(Days::new(1))
                    .and_then(|next| next.and_hms_opt(0, 0, 0))
                    .ok_or_else(|| Error::ParseError(format!("Invalid report date {day}")))?;
                Some((start, end))
            }
            None => None,
        };

        let approved = application_repository.list_approved_ordered(window).await?;

        let mut students: HashMap<i32, StudentContext> = HashMap::new();
        let mut opportunities: HashMap<i32, (String, String)> = HashMap::new();
        let mut rows = Vec::with_capacity(approved.len());

        for application in &approved {
            if !students.contains_key(&application.student_id) {
                let context = self.load_student(application.student_id).await?;
                students.insert(application.student_id, context);
            }
            let student = &students[&application.student_id];

            if !opportunities.contains_key(&application.opportunity_id) {
                let (company, title) = match opportunity_repository
                    .get(application.opportunity_id)
                    .await?
                {
                    Some(opportunity) => (opportunity.company, opportunity.title),
                    None => ("N/A".to_string(), "N/A".to_string()),
                };
                opportunities.insert(application.opportunity_id, (company, title));
            }
            let (company, title) = &opportunities[&application.opportunity_id];

            let position = student
                .applications
                .iter()
                .position(|id| *id == application.id);
            let matched = position.and_then(|index| student.tutor_requests.get(index));

            rows.push(ReportRowDto {
                fecha_aprobacion: application
                    .approval_at
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                estudiante: format!("{} ({})", student.name, application.status.as_str()),
                email: student.email.clone(),
                empresa: company.clone(),
                cargo: title.clone(),
                documentacion_subida: if student.has_documentation {
                    "SÍ".to_string()
                } else {
                    "NO".to_string()
                },
                estado_tutor: matched
                    .map(|request| request.status.as_str().to_string())
                    .unwrap_or_else(|| "Sin Solicitud".to_string()),
                nombre_tutor: matched
                    .and_then(|request| request.assigned_tutor_name.clone())
                    .unwrap_or_else(|| "Por Asignar".to_string()),
            });
        }

        rows.reverse();

        Ok(rows)
    }

    async fn load_student(&self, student_id: i32) -> Result<StudentContext, Error> {
        let user_repository = UserRepository::new(self.db);
        let application_repository = ApplicationRepository::new(self.db);
        let tutor_request_repository = TutorRequestRepository::new(self.db);
        let experience_repository = ExperienceRepository::new(self.db);
        let certification_repository = CertificationRepository::new(self.db);

        let user = user_repository.get(student_id).await?;
        let (name, email, has_cv) = match user {
            Some(user) => (user.name, user.email, user.cv_reference.is_some()),
            None => ("Usuario Eliminado".to_string(), "N/A".to_string(), false),
        };

        let has_documentation = has_cv
            || !experience_repository
                .list_for_student(student_id)
                .await?
                .is_empty()
            || !certification_repository
                .list_for_student(student_id)
                .await?
                .is_empty();

        let applications = application_repository
            .list_for_student_ordered(student_id)
            .await?
            .into_iter()
            .map(|application| application.id)
            .collect();
        let tutor_requests = tutor_request_repository
            .list_for_student_ordered(student_id)
            .await?;

        Ok(StudentContext {
            name,
            email,
            has_documentation,
            applications,
            tutor_requests,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::enums::ReviewStatus;
    use sea_orm::{ActiveModelTrait, ActiveValue::Set};
    use vinculo_test_utils::prelude::*;

    async fn assign_tutor(
        db: &sea_orm::DatabaseConnection,
        request: entity::tutor_request::Model,
        name: &str,
    ) -> Result<(), TestError> {
        let mut active: entity::tutor_request::ActiveModel = request.into();
        active.assigned_tutor_name = Set(Some(name.to_string()));
        active.status = Set(ReviewStatus::Aprobado);
        active.update(db).await?;
        Ok(())
    }

    mod daily_report {
        use super::*;
        use chrono::NaiveDate;

        /// Expect the second application of a student to pair with their
        /// second tutor request, not the first.
        #[tokio::test]
        async fn pairs_by_position() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let student = fixtures::insert_student(db, 1).await?;
            let first_opp = fixtures::insert_opportunity(db, 5, None).await?;
            let second_opp = fixtures::insert_opportunity(db, 5, None).await?;
            let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
            fixtures::insert_application(db, student.id, first_opp.id).await?;
            fixtures::insert_approved_application(
                db,
                student.id,
                second_opp.id,
                day.and_hms_opt(9, 0, 0).unwrap(),
            )
            .await?;
            fixtures::insert_tutor_request(db, student.id).await?;
            let second_request = fixtures::insert_tutor_request(db, student.id).await?;
            assign_tutor(db, second_request, "Ing. Vega").await?;
            let service = ReportService::new(db);

            let rows = service.daily_report(None).await?;

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].nombre_tutor, "Ing. Vega");
            assert_eq!(rows[0].estado_tutor, "Aprobado");
            Ok(())
        }

        /// Expect an application past the end of the request sequence to go
        /// unpaired.
        #[tokio::test]
        async fn out_of_bounds_position_is_unpaired() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let student = fixtures::insert_student(db, 1).await?;
            let first_opp = fixtures::insert_opportunity(db, 5, None).await?;
            let second_opp = fixtures::insert_opportunity(db, 5, None).await?;
            let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
            fixtures::insert_approved_application(
                db,
                student.id,
                first_opp.id,
                day.and_hms_opt(9, 0, 0).unwrap(),
            )
            .await?;
            fixtures::insert_approved_application(
                db,
                student.id,
                second_opp.id,
                day.and_hms_opt(10, 0, 0).unwrap(),
            )
            .await?;
            let request = fixtures::insert_tutor_request(db, student.id).await?;
            assign_tutor(db, request, "Ing. Vega").await?;
            let service = ReportService::new(db);

            let rows = service.daily_report(None).await?;

            // Reversed: rows[0] is the second application.
            assert_eq!(rows[0].estado_tutor, "Sin Solicitud");
            assert_eq!(rows[1].nombre_tutor, "Ing. Vega");
            Ok(())
        }

        /// Expect three applications against a single request to pair only
        /// the oldest one.
        #[tokio::test]
        async fn single_request_pairs_oldest_of_three() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let student = fixtures::insert_student(db, 1).await?;
            let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
            for hour in [9, 10, 11] {
                let opportunity = fixtures::insert_opportunity(db, 5, None).await?;
                fixtures::insert_approved_application(
                    db,
                    student.id,
                    opportunity.id,
                    day.and_hms_opt(hour, 0, 0).unwrap(),
                )
                .await?;
            }
            let request = fixtures::insert_tutor_request(db, student.id).await?;
            assign_tutor(db, request, "Ing. Vega").await?;
            let service = ReportService::new(db);

            let rows = service.daily_report(None).await?;

            // Reversed: rows[2] is the oldest application.
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[2].nombre_tutor, "Ing. Vega");
            assert_eq!(rows[0].estado_tutor, "Sin Solicitud");
            assert_eq!(rows[1].estado_tutor, "Sin Solicitud");
            Ok(())
        }

        /// Expect a student with no tutor requests to show the placeholder
        /// columns.
        #[tokio::test]
        async fn placeholder_without_request() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let student = fixtures::insert_student(db, 1).await?;
            let opportunity = fixtures::insert_opportunity(db, 5, None).await?;
            let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
            fixtures::insert_approved_application(
                db,
                student.id,
                opportunity.id,
                day.and_hms_opt(9, 0, 0).unwrap(),
            )
            .await?;
            let service = ReportService::new(db);

            let rows = service.daily_report(None).await?;

            assert_eq!(rows[0].estado_tutor, "Sin Solicitud");
            assert_eq!(rows[0].nombre_tutor, "Por Asignar");
            assert_eq!(rows[0].documentacion_subida, "NO");
            Ok(())
        }

        /// Expect any piece of documentation to flip the flag to SÍ.
        #[tokio::test]
        async fn documentation_flag_counts_any_kind() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let student = fixtures::insert_student(db, 1).await?;
            fixtures::insert_certification(db, student.id).await?;
            let opportunity = fixtures::insert_opportunity(db, 5, None).await?;
            let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
            fixtures::insert_approved_application(
                db,
                student.id,
                opportunity.id,
                day.and_hms_opt(9, 0, 0).unwrap(),
            )
            .await?;
            let service = ReportService::new(db);

            let rows = service.daily_report(None).await?;

            assert_eq!(rows[0].documentacion_subida, "SÍ");
            Ok(())
        }

        /// Expect rows ordered newest approval first and filtered by day.
        #[tokio::test]
        async fn filters_and_reverses() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let student = fixtures::insert_student(db, 1).await?;
            let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
            for hour in [9, 11] {
                let opportunity = fixtures::insert_opportunity(db, 5, None).await?;
                fixtures::insert_approved_application(
                    db,
                    student.id,
                    opportunity.id,
                    day.and_hms_opt(hour, 0, 0).unwrap(),
                )
                .await?;
            }
            let other = fixtures::insert_opportunity(db, 5, None).await?;
            fixtures::insert_approved_application(
                db,
                student.id,
                other.id,
                day.succ_opt().unwrap().and_hms_opt(8, 0, 0).unwrap(),
            )
            .await?;
            let service = ReportService::new(db);

            let rows = service.daily_report(Some(day)).await?;

            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].fecha_aprobacion, "2026-04-02");
            // Both rows share the date label; ordering is by timestamp.
            Ok(())
        }

        /// Expect the student column to embed the application status.
        #[tokio::test]
        async fn status_in_student_column() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let student = fixtures::insert_student(db, 1).await?;
            let opportunity = fixtures::insert_opportunity(db, 5, None).await?;
            let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
            fixtures::insert_approved_application(
                db,
                student.id,
                opportunity.id,
                day.and_hms_opt(9, 0, 0).unwrap(),
            )
            .await?;
            let service = ReportService::new(db);

            let rows = service.daily_report(None).await?;

            assert_eq!(rows[0].estudiante, "Student 1 (Aprobado)");
            assert_eq!(rows[0].empresa, "Acme");
            assert_eq!(rows[0].cargo, "Backend Intern");
            Ok(())
        }
    }
}
