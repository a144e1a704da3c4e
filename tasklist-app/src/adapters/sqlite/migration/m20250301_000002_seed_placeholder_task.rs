//! Seeds the placeholder task.
//!
//! Running as a migration means it happens exactly once per database file:
//! deleting the placeholder later never brings it back.

use sea_orm_migration::prelude::*;
use tasklist_core::PLACEHOLDER_TEXT;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Task::Table).columns([Task::Task]);
        insert
            .values([PLACEHOLDER_TEXT.into()])
            .map_err(|e| DbErr::Migration(format!("Invalid placeholder insert: {e}")))?;

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Task::Table)
            .and_where(Expr::col(Task::Task).eq(PLACEHOLDER_TEXT))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum Task {
    #[sea_orm(iden = "tasks")]
    Table,
    Task,
}
