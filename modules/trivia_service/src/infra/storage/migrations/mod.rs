//! Database migrations for trivia service

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::sea_query::{Alias, DynIden, IntoIden};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_categories::Migration),
            Box::new(m20240601_000002_create_questions::Migration),
        ]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("trivia_service_migrations").into_iden()
    }
}

mod m20240601_000001_create_categories {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_categories"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Categories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Categories::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Categories::Type).string().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Categories::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Categories {
        Table,
        Id,
        Type,
    }
}

mod m20240601_000002_create_questions {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000002_create_questions"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Questions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Questions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Questions::Question).string().not_null())
                        .col(ColumnDef::new(Questions::Answer).string().not_null())
                        .col(ColumnDef::new(Questions::Category).integer().not_null())
                        .col(ColumnDef::new(Questions::Difficulty).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_questions_category")
                                .from(Questions::Table, Questions::Category)
                                .to(Categories::Table, Categories::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_questions_category")
                        .table(Questions::Table)
                        .col(Questions::Category)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Questions::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Questions {
        Table,
        Id,
        Question,
        Answer,
        Category,
        Difficulty,
    }

    #[derive(DeriveIden)]
    enum Categories {
        Table,
        Id,
    }
}
