use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260826_000001_create_user_table::User;
use crate::m20260826_000002_create_opportunity_table::Opportunity;

static FK_APPLICATION_STUDENT_ID: &str = "fk_application_student_id";
static FK_APPLICATION_OPPORTUNITY_ID: &str = "fk_application_opportunity_id";
static UQ_APPLICATION_STUDENT_OPPORTUNITY: &str = "uq_application_student_opportunity";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_auto(Application::Id))
                    .col(integer(Application::StudentId))
                    .col(integer(Application::OpportunityId))
                    .col(string_len(Application::Status, 20).default("Pendiente"))
                    .col(timestamp(Application::SubmittedAt))
                    .col(timestamp_null(Application::ApprovalAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_STUDENT_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::StudentId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_OPPORTUNITY_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::OpportunityId)
                    .to_tbl(Opportunity::Table)
                    .to_col(Opportunity::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // One application per (student, opportunity) pair
        manager
            .create_index(
                Index::create()
                    .name(UQ_APPLICATION_STUDENT_OPPORTUNITY)
                    .table(Application::Table)
                    .col(Application::StudentId)
                    .col(Application::OpportunityId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(UQ_APPLICATION_STUDENT_OPPORTUNITY)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_OPPORTUNITY_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_STUDENT_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    StudentId,
    OpportunityId,
    Status,
    SubmittedAt,
    ApprovalAt,
}
