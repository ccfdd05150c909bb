use entity::enums::UserRole;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[schema(value_type = String)]
    pub role: UserRole,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Successful login response: bearer token plus the authenticated user.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisteredDto {
    pub message: String,
    #[schema(value_type = String)]
    pub role: UserRole,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExperienceDto {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

impl From<entity::experience::Model> for ExperienceDto {
    fn from(experience: entity::experience::Model) -> Self {
        Self {
            id: experience.id,
            title: experience.title,
            company: experience.company,
            start_date: experience.start_date,
            end_date: experience.end_date,
            description: experience.description,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct NewExperienceDto {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CertificationDto {
    pub id: i32,
    pub title: String,
    pub institution: String,
    pub year: String,
}

impl From<entity::certification::Model> for CertificationDto {
    fn from(certification: entity::certification::Model) -> Self {
        Self {
            id: certification.id,
            title: certification.title,
            institution: certification.institution,
            year: certification.year,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct NewCertificationDto {
    pub title: String,
    pub institution: String,
    pub year: String,
}

/// Full student profile with supporting documentation.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[schema(value_type = String)]
    pub role: UserRole,
    pub cv_reference: Option<String>,
    pub experiences: Vec<ExperienceDto>,
    pub certifications: Vec<CertificationDto>,
}
