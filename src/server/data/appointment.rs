use chrono::NaiveDate;
use entity::{appointment, prelude::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct AppointmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AppointmentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        student_id: i32,
        application_id: i32,
        date: NaiveDate,
        time: String,
    ) -> Result<appointment::Model, DbErr> {
        appointment::ActiveModel {
            student_id: Set(student_id),
            application_id: Set(application_id),
            date: Set(date),
            time: Set(time),
            status: Set("Agendada".to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<appointment::Model>, DbErr> {
        Appointment::find()
            .filter(appointment::Column::StudentId.eq(student_id))
            .order_by_asc(appointment::Column::Date)
            .all(self.db)
            .await
    }

    pub async fn list_all(&self) -> Result<Vec<appointment::Model>, DbErr> {
        Appointment::find()
            .order_by_asc(appointment::Column::Date)
            .all(self.db)
            .await
    }
}
