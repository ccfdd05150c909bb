use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TutorWorkloadDto {
    pub name: String,
    pub estudiantes: i64,
}

/// Applications submitted on one of the trailing seven days.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivityPointDto {
    /// Day label, "%d/%m".
    pub fecha: String,
    pub postulaciones: i64,
}

/// Aggregates for the admin dashboard and profile metrics.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatsDto {
    pub students: i64,
    pub applications: i64,
    pub pending: i64,
    pub opportunities: i64,
    pub tutor_workload: Vec<TutorWorkloadDto>,
    pub activity_trend: Vec<ActivityPointDto>,
    pub tutor_requests_total: i64,
    pub tutor_requests_pending: i64,
    pub tutor_requests_approved: i64,
    pub tutor_requests_with_memo: i64,
}
