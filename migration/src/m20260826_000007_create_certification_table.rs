use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260826_000001_create_user_table::User;

static FK_CERTIFICATION_STUDENT_ID: &str = "fk_certification_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certification::Table)
                    .if_not_exists()
                    .col(pk_auto(Certification::Id))
                    .col(integer(Certification::StudentId))
                    .col(string(Certification::Title))
                    .col(string(Certification::Institution))
                    .col(string_len(Certification::Year, 10))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CERTIFICATION_STUDENT_ID)
                    .from_tbl(Certification::Table)
                    .from_col(Certification::StudentId)
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
                    .name(FK_CERTIFICATION_STUDENT_ID)
                    .table(Certification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Certification::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Certification {
    Table,
    Id,
    StudentId,
    Title,
    Institution,
    Year,
}
