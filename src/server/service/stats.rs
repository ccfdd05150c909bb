use chrono::{Days, Utc};
use entity::enums::{ReviewStatus, UserRole};
use sea_orm::DatabaseConnection;

use crate::{
    model::stats::{ActivityPointDto, StatsDto, TutorWorkloadDto},
    server::{
        data::{
            application::ApplicationRepository, opportunity::OpportunityRepository,
            tutor_request::TutorRequestRepository, user::UserRepository,
        },
        error::Error,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates the admin dashboard numbers.
    pub async fn dashboard(&self) -> Result<StatsDto, Error> {
        let user_repository = UserRepository::new(self.db);
        let application_repository = ApplicationRepository::new(self.db);
        let opportunity_repository = OpportunityRepository::new(self.db);
        let tutor_request_repository = TutorRequestRepository::new(self.db);

        let tutor_workload = tutor_request_repository
            .workload()
            .await?
            .into_iter()
            .map(|row| TutorWorkloadDto {
                name: row.tutor_name,
                estudiantes: row.students,
            })
            .collect();

        // Trailing seven days, oldest first, today last.
        let today = Utc::now().date_naive();
        let mut activity_trend = Vec::with_capacity(7);
        for back in (0..7).rev() {
            let day = today
                .checked_sub_days(Days::new(back))
                .ok_or_else(|| Error::InternalError("Date underflow".to_string()))?;
            let start = day
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| Error::InternalError("Invalid day start".to_string()))?;
            let end = day
                .checked_add_days(Days::new(1))
                .and_then(|next| next.and_hms_opt(0, 0, 0))
                .ok_or_else(|| Error::InternalError("Invalid day end".to_string()))?;

            let count = application_repository
                .count_submitted_between(start, end)
                .await?;

            activity_trend.push(ActivityPointDto {
                fecha: day.format("%d/%m").to_string(),
                postulaciones: count as i64,
            });
        }

        Ok(StatsDto {
            students: user_repository.count_by_role(UserRole::Student).await? as i64,
            applications: application_repository.count().await? as i64,
            pending: application_repository
                .count_with_status(ReviewStatus::Pendiente)
                .await? as i64,
            opportunities: opportunity_repository.count().await? as i64,
            tutor_workload,
            activity_trend,
            tutor_requests_total: tutor_request_repository.count().await? as i64,
            tutor_requests_pending: tutor_request_repository
                .count_with_status(ReviewStatus::Pendiente)
                .await? as i64,
            tutor_requests_approved: tutor_request_repository
                .count_with_status(ReviewStatus::Aprobado)
                .await? as i64,
            tutor_requests_with_memo: tutor_request_repository.count_with_memo().await? as i64,
        })
    }
}
