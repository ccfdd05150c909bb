use entity::{certification, prelude::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct CertificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CertificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        student_id: i32,
        title: String,
        institution: String,
        year: String,
    ) -> Result<certification::Model, DbErr> {
        certification::ActiveModel {
            student_id: Set(student_id),
            title: Set(title),
            institution: Set(institution),
            year: Set(year),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<certification::Model>, DbErr> {
        Certification::find_by_id(id).one(self.db).await
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<certification::Model>, DbErr> {
        Certification::find()
            .filter(certification::Column::StudentId.eq(student_id))
            .order_by_asc(certification::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Certification::delete_by_id(id).exec(self.db).await
    }
}
