use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OpportunityDto {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub deadline: Option<NaiveDate>,
    pub vacancies: i32,
    pub kind: String,
    pub created_at: String,
}

impl From<entity::opportunity::Model> for OpportunityDto {
    fn from(opportunity: entity::opportunity::Model) -> Self {
        Self {
            id: opportunity.id,
            title: opportunity.title,
            company: opportunity.company,
            description: opportunity.description,
            location: opportunity.location,
            deadline: opportunity.deadline,
            vacancies: opportunity.vacancies,
            kind: opportunity.kind,
            created_at: opportunity.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct NewOpportunityDto {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub deadline: Option<NaiveDate>,
    pub vacancies: Option<i32>,
    pub kind: Option<String>,
}

/// Partial update; only fields present in the payload mutate.
#[derive(Default, Deserialize, utoipa::ToSchema)]
pub struct OpportunityPatchDto {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub vacancies: Option<i32>,
    pub kind: Option<String>,
}
