use entity::enums::ReviewStatus;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubmitApplicationDto {
    pub opportunity_id: i32,
}

/// Application as seen by its owning student, enriched with listing fields.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudentApplicationDto {
    pub id: i32,
    pub opportunity_id: i32,
    #[schema(value_type = String)]
    pub status: ReviewStatus,
    pub submitted_at: String,
    pub opportunity_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub kind: Option<String>,
}

/// Application as seen by the liaison office, enriched with student fields.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminApplicationDto {
    pub id: i32,
    pub student_id: i32,
    pub opportunity_id: i32,
    #[schema(value_type = String)]
    pub status: ReviewStatus,
    pub submitted_at: String,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
    pub opportunity_title: Option<String>,
    pub kind: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ApplicationStatusDto {
    #[schema(value_type = String)]
    pub status: ReviewStatus,
}
