use chrono::NaiveDate;
use entity::enums::ReviewStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::appointment::AppointmentDto,
    server::{
        data::{
            application::ApplicationRepository, appointment::AppointmentRepository,
            opportunity::OpportunityRepository, user::UserRepository,
        },
        error::{appointment::AppointmentError, Error},
        mailer::Mailer,
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a Mailer,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a Mailer) -> Self {
        Self { db, mailer }
    }

    /// Schedules an interview for an approved application owned by the
    /// calling student, then emails them the confirmation.
    pub async fn schedule(
        &self,
        student_id: i32,
        application_id: i32,
        date: NaiveDate,
        time: String,
    ) -> Result<entity::appointment::Model, Error> {
        let application_repository = ApplicationRepository::new(self.db);
        let appointment_repository = AppointmentRepository::new(self.db);
        let opportunity_repository = OpportunityRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let application = application_repository
            .get(application_id)
            .await?
            .ok_or(AppointmentError::ApplicationNotFound(application_id))?;

        if application.student_id != student_id {
            return Err(AppointmentError::NotOwner(application_id).into());
        }

        if application.status != ReviewStatus::Aprobado {
            return Err(AppointmentError::NotApproved(application_id).into());
        }

        let appointment = appointment_repository
            .create(student_id, application_id, date, time.clone())
            .await?;

        if let Some(student) = user_repository.get(student_id).await? {
            let company = opportunity_repository
                .get(application.opportunity_id)
                .await?
                .map(|o| o.company)
                .unwrap_or_else(|| "N/A".to_string());

            self.mailer.send_appointment_confirmation(
                &student.email,
                &student.name,
                &company,
                &date.format("%Y-%m-%d").to_string(),
                &time,
            );
        }

        Ok(appointment)
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<AppointmentDto>, Error> {
        let appointment_repository = AppointmentRepository::new(self.db);

        let appointments = appointment_repository.list_for_student(student_id).await?;

        let mut rows = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            rows.push(self.to_dto(appointment, false).await?);
        }

        Ok(rows)
    }

    /// Every appointment on record, enriched with the student for the admin
    /// calendar.
    pub async fn list_all(&self) -> Result<Vec<AppointmentDto>, Error> {
        let appointment_repository = AppointmentRepository::new(self.db);

        let appointments = appointment_repository.list_all().await?;

        let mut rows = Vec::with_capacity(appointments.len());
        for appointment in appointments {
            rows.push(self.to_dto(appointment, true).await?);
        }

        Ok(rows)
    }

    async fn to_dto(
        &self,
        appointment: entity::appointment::Model,
        with_student: bool,
    ) -> Result<AppointmentDto, Error> {
        let application_repository = ApplicationRepository::new(self.db);
        let opportunity_repository = OpportunityRepository::new(self.db);
        let user_repository = UserRepository::new(self.db);

        let opportunity_title = match application_repository
            .get(appointment.application_id)
            .await?
        {
            Some(application) => opportunity_repository
                .get(application.opportunity_id)
                .await?
                .map(|o| o.title),
            None => None,
        };

        let student = if with_student {
            user_repository.get(appointment.student_id).await?
        } else {
            None
        };

        Ok(AppointmentDto {
            id: appointment.id,
            application_id: appointment.application_id,
            date: appointment.date,
            time: appointment.time,
            status: appointment.status,
            opportunity_title,
            student_name: student.as_ref().map(|s| s.name.clone()),
            student_email: student.map(|s| s.email),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinculo_test_utils::prelude::*;

    mod schedule {
        use super::*;
        use chrono::NaiveDate;

        fn slot() -> (NaiveDate, String) {
            (
                NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
                "10:30".to_string(),
            )
        }

        /// Expect scheduling to succeed on an approved owned application.
        #[tokio::test]
        async fn schedules_approved_application() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            let (date, time) = slot();
            let application = fixtures::insert_approved_application(
                &test.state.db,
                student.id,
                opportunity.id,
                date.and_hms_opt(8, 0, 0).unwrap(),
            )
            .await?;
            let mailer = Mailer::disabled();
            let service = AppointmentService::new(&test.state.db, &mailer);

            let appointment = service
                .schedule(student.id, application.id, date, time)
                .await
                .unwrap();

            assert_eq!(appointment.status, "Agendada");
            Ok(())
        }

        /// Expect a pending application to be refused.
        #[tokio::test]
        async fn rejects_pending_application() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let student = fixtures::insert_student(&test.state.db, 1).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            let application =
                fixtures::insert_application(&test.state.db, student.id, opportunity.id).await?;
            let (date, time) = slot();
            let mailer = Mailer::disabled();
            let service = AppointmentService::new(&test.state.db, &mailer);

            let result = service.schedule(student.id, application.id, date, time).await;

            assert!(matches!(
                result,
                Err(Error::AppointmentError(AppointmentError::NotApproved(_)))
            ));
            Ok(())
        }

        /// Expect another student's application to be off limits.
        #[tokio::test]
        async fn rejects_foreign_application() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let owner = fixtures::insert_student(&test.state.db, 1).await?;
            let intruder = fixtures::insert_student(&test.state.db, 2).await?;
            let opportunity = fixtures::insert_opportunity(&test.state.db, 3, None).await?;
            let (date, time) = slot();
            let application = fixtures::insert_approved_application(
                &test.state.db,
                owner.id,
                opportunity.id,
                date.and_hms_opt(8, 0, 0).unwrap(),
            )
            .await?;
            let mailer = Mailer::disabled();
            let service = AppointmentService::new(&test.state.db, &mailer);

            let result = service
                .schedule(intruder.id, application.id, date, time)
                .await;

            assert!(matches!(
                result,
                Err(Error::AppointmentError(AppointmentError::NotOwner(_)))
            ));
            Ok(())
        }
    }
}
