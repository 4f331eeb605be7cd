use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create employee_meetings junction table (many-to-many). The pair of
        // foreign keys is the whole identity of a row, so it doubles as the
        // primary key.
        manager
            .create_table(
                Table::create()
                    .table(EmployeeMeetings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeMeetings::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EmployeeMeetings::MeetingId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(EmployeeMeetings::EmployeeId)
                            .col(EmployeeMeetings::MeetingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employee_meetings-employee_id")
                            .from(EmployeeMeetings::Table, EmployeeMeetings::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employee_meetings-meeting_id")
                            .from(EmployeeMeetings::Table, EmployeeMeetings::MeetingId)
                            .to(Meetings::Table, Meetings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmployeeMeetings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum EmployeeMeetings {
    Table,
    EmployeeId,
    MeetingId,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
}

#[derive(Iden)]
enum Meetings {
    Table,
    Id,
}
