use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct ScheduleAppointmentDto {
    pub application_id: i32,
    pub date: NaiveDate,
    /// Interview slot in "HH:MM" form.
    pub time: String,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub application_id: i32,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub opportunity_title: Option<String>,
    /// Present on admin listings only.
    pub student_name: Option<String>,
    pub student_email: Option<String>,
}
