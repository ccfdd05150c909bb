use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260826_000001_create_user_table::User;

static FK_EXPERIENCE_STUDENT_ID: &str = "fk_experience_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(pk_auto(Experience::Id))
                    .col(integer(Experience::StudentId))
                    .col(string(Experience::Title))
                    .col(string(Experience::Company))
                    .col(string_len(Experience::StartDate, 20))
                    .col(string_len_null(Experience::EndDate, 20))
                    .col(text_null(Experience::Description))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXPERIENCE_STUDENT_ID)
                    .from_tbl(Experience::Table)
                    .from_col(Experience::StudentId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXPERIENCE_STUDENT_ID)
                    .table(Experience::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Experience {
    Table,
    Id,
    StudentId,
    Title,
    Company,
    StartDate,
    EndDate,
    Description,
}
