use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type;

use crate::m20240101_000001_create_metric_tables::{created_at_column, enum_column, id_column};

const GENDER_TYPE: &str = "gender_type";
const STUDENT_STATUS: &str = "student_status";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new(GENDER_TYPE))
                    .values([Alias::new("MALE"), Alias::new("FEMALE"), Alias::new("OTHER")])
                    .to_owned(),
            )
            .await?;
        manager
            .create_type(
                Type::create()
                    .as_enum(Alias::new(STUDENT_STATUS))
                    .values([Alias::new("ACTIVE"), Alias::new("INACTIVE")])
                    .to_owned(),
            )
            .await?;

        // Create student_student table
        manager
            .create_table(
                Table::create()
                    .table(StudentStudent::Table)
                    .if_not_exists()
                    .col(id_column(StudentStudent::Id))
                    .col(
                        ColumnDef::new(StudentStudent::FirstName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentStudent::LastName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(enum_column(StudentStudent::Gender, GENDER_TYPE))
                    .col(
                        ColumnDef::new(StudentStudent::DateOfBirth)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentStudent::Address).string_len(100))
                    .col(ColumnDef::new(StudentStudent::CellPhone).string_len(8))
                    .col(ColumnDef::new(StudentStudent::Email).string())
                    .col(enum_column(StudentStudent::Status, STUDENT_STATUS))
                    .col(created_at_column(StudentStudent::CreatedAt))
                    .col(ColumnDef::new(StudentStudent::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create student_admission table
        manager
            .create_table(
                Table::create()
                    .table(StudentAdmission::Table)
                    .if_not_exists()
                    .col(id_column(StudentAdmission::Id))
                    .col(
                        ColumnDef::new(StudentAdmission::Date)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(StudentAdmission::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(created_at_column(StudentAdmission::CreatedAt))
                    .col(ColumnDef::new(StudentAdmission::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admission_student")
                            .from(StudentAdmission::Table, StudentAdmission::StudentId)
                            .to(StudentStudent::Table, StudentStudent::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_guardian table
        manager
            .create_table(
                Table::create()
                    .table(StudentGuardian::Table)
                    .if_not_exists()
                    .col(id_column(StudentGuardian::Id))
                    .col(
                        ColumnDef::new(StudentGuardian::FirstName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentGuardian::LastName)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentGuardian::CellPhone).string_len(8))
                    .col(ColumnDef::new(StudentGuardian::Email).string())
                    .col(ColumnDef::new(StudentGuardian::Address).string_len(100))
                    .col(ColumnDef::new(StudentGuardian::Profession).string_len(50))
                    .col(
                        ColumnDef::new(StudentGuardian::StudentId)
                            .integer()
                            .not_null(),
                    )
                    .col(created_at_column(StudentGuardian::CreatedAt))
                    .col(ColumnDef::new(StudentGuardian::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guardian_student")
                            .from(StudentGuardian::Table, StudentGuardian::StudentId)
                            .to(StudentStudent::Table, StudentStudent::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_fee table
        manager
            .create_table(
                Table::create()
                    .table(StudentFee::Table)
                    .if_not_exists()
                    .col(id_column(StudentFee::Id))
                    .col(
                        ColumnDef::new(StudentFee::TotalAmount)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentFee::ValidUntil)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentFee::DateSubmitted)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(StudentFee::StudentId).integer().not_null())
                    .col(created_at_column(StudentFee::CreatedAt))
                    .col(ColumnDef::new(StudentFee::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fee_student")
                            .from(StudentFee::Table, StudentFee::StudentId)
                            .to(StudentStudent::Table, StudentStudent::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentFee::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentGuardian::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentAdmission::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentStudent::Table).to_owned())
            .await?;

        for name in [STUDENT_STATUS, GENDER_TYPE] {
            manager
                .drop_type(Type::drop().if_exists().name(Alias::new(name)).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StudentStudent {
    Table,
    Id,
    FirstName,
    LastName,
    Gender,
    DateOfBirth,
    Address,
    CellPhone,
    Email,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentAdmission {
    Table,
    Id,
    Date,
    StudentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentGuardian {
    Table,
    Id,
    FirstName,
    LastName,
    CellPhone,
    Email,
    Address,
    Profession,
    StudentId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentFee {
    Table,
    Id,
    TotalAmount,
    ValidUntil,
    DateSubmitted,
    StudentId,
    CreatedAt,
    UpdatedAt,
}
