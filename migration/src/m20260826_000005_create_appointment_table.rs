use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260826_000001_create_user_table::User;
use crate::m20260826_000003_create_application_table::Application;

static FK_APPOINTMENT_STUDENT_ID: &str = "fk_appointment_student_id";
static FK_APPOINTMENT_APPLICATION_ID: &str = "fk_appointment_application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(integer(Appointment::StudentId))
                    .col(integer(Appointment::ApplicationId))
                    .col(date(Appointment::Date))
                    .col(string_len(Appointment::Time, 10))
                    .col(string_len(Appointment::Status, 20).default("Agendada"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPOINTMENT_STUDENT_ID)
                    .from_tbl(Appointment::Table)
                    .from_col(Appointment::StudentId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPOINTMENT_APPLICATION_ID)
                    .from_tbl(Appointment::Table)
                    .from_col(Appointment::ApplicationId)
                    .to_tbl(Application::Table)
                    .to_col(Application::Id)
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
                    .name(FK_APPOINTMENT_APPLICATION_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPOINTMENT_STUDENT_ID)
                    .table(Appointment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    Table,
    Id,
    StudentId,
    ApplicationId,
    Date,
    Time,
    Status,
}
