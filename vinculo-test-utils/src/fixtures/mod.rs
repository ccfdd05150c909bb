//! Database fixture helpers for platform tests.
//!
//! These insert rows directly through the entity crate so repository and
//! service tests can set up state without going through the API surface.

pub mod google;

use chrono::{NaiveDate, Utc};
use entity::enums::{ReviewStatus, UserRole};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Dummy argon2id digest; login tests that need a real digest hash their own.
pub static TEST_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$fixture";

pub async fn insert_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    role: UserRole,
) -> Result<entity::user::Model, DbErr> {
    let user = entity::user::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        email: ActiveValue::Set(email.to_string()),
        password_hash: ActiveValue::Set(Some(TEST_PASSWORD_HASH.to_string())),
        role: ActiveValue::Set(role),
        cv_reference: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    user.insert(db).await
}

/// Insert a student with a generated name and email derived from `n`.
pub async fn insert_student(
    db: &DatabaseConnection,
    n: u32,
) -> Result<entity::user::Model, DbErr> {
    insert_user(
        db,
        &format!("Student {n}"),
        &format!("student{n}@example.edu"),
        UserRole::Student,
    )
    .await
}

pub async fn insert_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    insert_user(db, "Admin", "admin@example.edu", UserRole::Admin).await
}

pub async fn insert_opportunity(
    db: &DatabaseConnection,
    vacancies: i32,
    deadline: Option<NaiveDate>,
) -> Result<entity::opportunity::Model, DbErr> {
    let opportunity = entity::opportunity::ActiveModel {
        title: ActiveValue::Set("Backend Intern".to_string()),
        company: ActiveValue::Set("Acme".to_string()),
        description: ActiveValue::Set("Internship position".to_string()),
        location: ActiveValue::Set("Quito".to_string()),
        deadline: ActiveValue::Set(deadline),
        vacancies: ActiveValue::Set(vacancies),
        kind: ActiveValue::Set("pasantia".to_string()),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    opportunity.insert(db).await
}

pub async fn insert_application(
    db: &DatabaseConnection,
    student_id: i32,
    opportunity_id: i32,
) -> Result<entity::application::Model, DbErr> {
    let application = entity::application::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        opportunity_id: ActiveValue::Set(opportunity_id),
        status: ActiveValue::Set(ReviewStatus::Pendiente),
        submitted_at: ActiveValue::Set(Utc::now().naive_utc()),
        approval_at: ActiveValue::Set(None),
        ..Default::default()
    };

    application.insert(db).await
}

pub async fn insert_approved_application(
    db: &DatabaseConnection,
    student_id: i32,
    opportunity_id: i32,
    approval_at: chrono::NaiveDateTime,
) -> Result<entity::application::Model, DbErr> {
    let application = entity::application::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        opportunity_id: ActiveValue::Set(opportunity_id),
        status: ActiveValue::Set(ReviewStatus::Aprobado),
        submitted_at: ActiveValue::Set(approval_at),
        approval_at: ActiveValue::Set(Some(approval_at)),
        ..Default::default()
    };

    application.insert(db).await
}

pub async fn insert_tutor_request(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::tutor_request::Model, DbErr> {
    let request = entity::tutor_request::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        title: ActiveValue::Set("Solicitud Pasantía".to_string()),
        document_reference: ActiveValue::Set(format!(
            "tutor_requests/solicitud_{student_id}.pdf"
        )),
        status: ActiveValue::Set(ReviewStatus::Pendiente),
        submitted_at: ActiveValue::Set(Utc::now().naive_utc()),
        assigned_tutor_name: ActiveValue::Set(None),
        assigned_tutor_email: ActiveValue::Set(None),
        memo_reference: ActiveValue::Set(None),
        ..Default::default()
    };

    request.insert(db).await
}

pub async fn insert_experience(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::experience::Model, DbErr> {
    let experience = entity::experience::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        title: ActiveValue::Set("Junior Developer".to_string()),
        company: ActiveValue::Set("Acme".to_string()),
        start_date: ActiveValue::Set("2024-01".to_string()),
        end_date: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        ..Default::default()
    };

    experience.insert(db).await
}

pub async fn insert_certification(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::certification::Model, DbErr> {
    let certification = entity::certification::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        title: ActiveValue::Set("Cloud Fundamentals".to_string()),
        institution: ActiveValue::Set("Coursera".to_string()),
        year: ActiveValue::Set("2024".to_string()),
        ..Default::default()
    };

    certification.insert(db).await
}

pub async fn insert_appointment(
    db: &DatabaseConnection,
    student_id: i32,
    application_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    let appointment = entity::appointment::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        application_id: ActiveValue::Set(application_id),
        date: ActiveValue::Set(Utc::now().date_naive()),
        time: ActiveValue::Set("09:00".to_string()),
        status: ActiveValue::Set("Agendada".to_string()),
        ..Default::default()
    };

    appointment.insert(db).await
}
