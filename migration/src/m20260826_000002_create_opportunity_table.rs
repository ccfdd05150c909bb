use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Opportunity::Table)
                    .if_not_exists()
                    .col(pk_auto(Opportunity::Id))
                    .col(string(Opportunity::Title))
                    .col(string(Opportunity::Company))
                    .col(text(Opportunity::Description))
                    .col(string(Opportunity::Location))
                    .col(date_null(Opportunity::Deadline))
                    .col(integer(Opportunity::Vacancies).default(1))
                    .col(string_len(Opportunity::Kind, 50).default("pasantia"))
                    .col(timestamp(Opportunity::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Opportunity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Opportunity {
    Table,
    Id,
    Title,
    Company,
    Description,
    Location,
    Deadline,
    Vacancies,
    Kind,
    CreatedAt,
}
