use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account role stored on the `user` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl UserRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Admin => "admin",
        }
    }
}

/// Review state shared by applications and tutor requests.
///
/// Stored values keep the Spanish labels the reporting surface exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ReviewStatus {
    #[sea_orm(string_value = "Pendiente")]
    Pendiente,
    #[sea_orm(string_value = "Aprobado")]
    Aprobado,
    #[sea_orm(string_value = "Rechazado")]
    Rechazado,
}

impl ReviewStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Pendiente => "Pendiente",
            ReviewStatus::Aprobado => "Aprobado",
            ReviewStatus::Rechazado => "Rechazado",
        }
    }
}
