pub use sea_orm_migration::prelude::*;

mod m20260826_000001_create_user_table;
mod m20260826_000002_create_opportunity_table;
mod m20260826_000003_create_application_table;
mod m20260826_000004_create_tutor_request_table;
mod m20260826_000005_create_appointment_table;
mod m20260826_000006_create_experience_table;
mod m20260826_000007_create_certification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260826_000001_create_user_table::Migration),
            Box::new(m20260826_000002_create_opportunity_table::Migration),
            Box::new(m20260826_000003_create_application_table::Migration),
            Box::new(m20260826_000004_create_tutor_request_table::Migration),
            Box::new(m20260826_000005_create_appointment_table::Migration),
            Box::new(m20260826_000006_create_experience_table::Migration),
            Box::new(m20260826_000007_create_certification_table::Migration),
        ]
    }
}
