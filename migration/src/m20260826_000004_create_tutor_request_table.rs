use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260826_000001_create_user_table::User;

static FK_TUTOR_REQUEST_STUDENT_ID: &str = "fk_tutor_request_student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TutorRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(TutorRequest::Id))
                    .col(integer(TutorRequest::StudentId))
                    .col(string(TutorRequest::Title))
                    .col(string(TutorRequest::DocumentReference))
                    .col(string_len(TutorRequest::Status, 20).default("Pendiente"))
                    .col(timestamp(TutorRequest::SubmittedAt))
                    .col(string_null(TutorRequest::AssignedTutorName))
                    .col(string_null(TutorRequest::AssignedTutorEmail))
                    .col(string_null(TutorRequest::MemoReference))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TUTOR_REQUEST_STUDENT_ID)
                    .from_tbl(TutorRequest::Table)
                    .from_col(TutorRequest::StudentId)
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
                    .name(FK_TUTOR_REQUEST_STUDENT_ID)
                    .table(TutorRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TutorRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TutorRequest {
    Table,
    Id,
    StudentId,
    Title,
    DocumentReference,
    Status,
    SubmittedAt,
    AssignedTutorName,
    AssignedTutorEmail,
    MemoReference,
}
