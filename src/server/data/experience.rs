use entity::{experience, prelude::*};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct ExperienceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExperienceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        student_id: i32,
        title: String,
        company: String,
        start_date: String,
        end_date: Option<String>,
        description: Option<String>,
    ) -> Result<experience::Model, DbErr> {
        experience::ActiveModel {
            student_id: Set(student_id),
            title: Set(title),
            company: Set(company),
            start_date: Set(start_date),
            end_date: Set(end_date),
            description: Set(description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<experience::Model>, DbErr> {
        Experience::find_by_id(id).one(self.db).await
    }

    pub async fn list_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<experience::Model>, DbErr> {
        Experience::find()
            .filter(experience::Column::StudentId.eq(student_id))
            .order_by_asc(experience::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Experience::delete_by_id(id).exec(self.db).await
    }
}
