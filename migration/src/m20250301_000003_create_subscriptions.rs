use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        // subscriber_id/magazine_id 没有外键约束，引用完整性只是约定
        db.execute_unprepared(
            "
                CREATE TABLE subscriptions(
                    id serial NOT NULL,
                    PRIMARY KEY (id),
                    subscriber_id integer,
                    magazine_id integer,
                    start date,
                    duration integer,
                    created_at timestamptz NOT NULL,
                    updated_at timestamptz NOT NULL
                )
            ",
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TABLE subscriptions")
            .await?;
        Ok(())
    }
}
