use entity::enums::ReviewStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TutorRequestDto {
    pub id: i32,
    pub title: String,
    pub document_reference: String,
    #[schema(value_type = String)]
    pub status: ReviewStatus,
    pub submitted_at: String,
    pub assigned_tutor_name: Option<String>,
    pub assigned_tutor_email: Option<String>,
    pub memo_reference: Option<String>,
    /// Present on admin listings only.
    pub student_id: Option<i32>,
    pub student_name: Option<String>,
    pub student_email: Option<String>,
}

impl From<entity::tutor_request::Model> for TutorRequestDto {
    fn from(request: entity::tutor_request::Model) -> Self {
        Self {
            id: request.id,
            title: request.title,
            document_reference: request.document_reference,
            status: request.status,
            submitted_at: request.submitted_at.format("%Y-%m-%d").to_string(),
            assigned_tutor_name: request.assigned_tutor_name,
            assigned_tutor_email: request.assigned_tutor_email,
            memo_reference: request.memo_reference,
            student_id: None,
            student_name: None,
            student_email: None,
        }
    }
}

/// Patch applied by the liaison office; absent fields are left unchanged.
#[derive(Default, Deserialize, utoipa::ToSchema)]
pub struct TutorStatusPatchDto {
    #[schema(value_type = Option<String>)]
    pub status: Option<ReviewStatus>,
    pub tutor_name: Option<String>,
    pub tutor_email: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MemoUploadedDto {
    pub message: String,
    pub reference: String,
}
