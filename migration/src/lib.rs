pub use sea_orm_migration::prelude::*;

pub mod m20250301_000001_create_magazines;
pub mod m20250301_000002_create_subscribers;
pub mod m20250301_000003_create_subscriptions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_magazines::Migration),
            Box::new(m20250301_000002_create_subscribers::Migration),
            Box::new(m20250301_000003_create_subscriptions::Migration),
        ]
    }
}
