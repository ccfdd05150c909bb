use chrono::Utc;
use entity::{enums::UserRole, prelude::*, user};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: Option<String>,
        role: UserRole,
    ) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            role: Set(role),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<user::Model>, DbErr> {
        User::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        User::find().count(self.db).await
    }

    pub async fn count_by_role(&self, role: UserRole) -> Result<u64, DbErr> {
        User::find()
            .filter(user::Column::Role.eq(role))
            .count(self.db)
            .await
    }

    pub async fn set_cv_reference(
        &self,
        user: user::Model,
        reference: String,
    ) -> Result<user::Model, DbErr> {
        let mut active: user::ActiveModel = user.into();
        active.cv_reference = Set(Some(reference));
        active.update(self.db).await
    }
}
