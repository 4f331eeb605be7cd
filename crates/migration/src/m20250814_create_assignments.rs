use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create assignments association table (many-to-many with payload).
        // Unlike employee_meetings this one carries its own id and columns,
        // so two foreign keys alone are not enough.
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::Role).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::StartDate)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::EndDate).date_time())
                    .col(ColumnDef::new(Assignments::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Assignments::ProjectId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-assignments-employee_id")
                            .from(Assignments::Table, Assignments::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-assignments-project_id")
                            .from(Assignments::Table, Assignments::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Assignments {
    Table,
    Id,
    Role,
    StartDate,
    EndDate,
    EmployeeId,
    ProjectId,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
}
