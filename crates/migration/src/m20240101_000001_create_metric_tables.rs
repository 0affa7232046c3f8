use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type;

/// Postgres enum types and their literals
const ENUM_TYPES: &[(&str, &[&str])] = &[
    (
        "energy_location",
        &[
            "LOCAL",
            "OFICINAS_ADMINISTRATIVAS",
            "PLANTA_DE_ENVASADO",
            "DESCONOCIDO",
        ],
    ),
    (
        "energy_category",
        &[
            "CONSUMO_ADMINISTRATIVO",
            "CONSUMO_LOGISTICO",
            "CONSUMO_DE_DISTRIBUCION",
        ],
    ),
    (
        "emission_type",
        &[
            "EMISIONES_DIRECTAS",
            "EMISIONES_INDIRECTAS",
            "OTRAS_EMISIONES_INDIRECTAS",
        ],
    ),
    (
        "fuel_type",
        &[
            "COMBUSTIBLE_ADMINISTRATIVO",
            "COMBUSTIBLE_INDIRECTO_DE_PROVEEDOR",
            "COMBUSTIBLE_DE_LOGISTICA",
        ],
    ),
    ("oil_type", &["REFRIGERANTE", "ACEITE"]),
    (
        "oil_category",
        &[
            "CONSUMO_ADMINISTRATIVO",
            "CONSUMO_LOGISTICO",
            "CONSUMO_DE_OPERACION",
        ],
    ),
    ("roadtrip_group", &["EQUIPO_DE_VENTAS", "EQUIPO_ADMINISTRATIVO"]),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, values) in ENUM_TYPES {
            manager
                .create_type(
                    Type::create()
                        .as_enum(Alias::new(*name))
                        .values(values.iter().map(|v| Alias::new(*v)))
                        .to_owned(),
                )
                .await?;
        }

        // Create energy table
        manager
            .create_table(
                Table::create()
                    .table(Energy::Table)
                    .if_not_exists()
                    .col(id_column(Energy::Id))
                    .col(
                        ColumnDef::new(Energy::Quantity)
                            .double()
                            .not_null()
                            .check(Expr::col(Energy::Quantity).gte(0)),
                    )
                    .col(ColumnDef::new(Energy::Description).string())
                    .col(datetime_column(Energy::Datetime))
                    .col(enum_column(Energy::Location, "energy_location"))
                    .col(enum_column(Energy::EnergyCategory, "energy_category"))
                    .col(enum_column(Energy::EmissionType, "emission_type"))
                    .col(created_at_column(Energy::CreatedAt))
                    .col(ColumnDef::new(Energy::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create fuel table
        manager
            .create_table(
                Table::create()
                    .table(Fuel::Table)
                    .if_not_exists()
                    .col(id_column(Fuel::Id))
                    .col(
                        ColumnDef::new(Fuel::Quantity)
                            .double()
                            .not_null()
                            .check(Expr::col(Fuel::Quantity).gte(0)),
                    )
                    .col(ColumnDef::new(Fuel::Description).string())
                    .col(datetime_column(Fuel::Datetime))
                    .col(enum_column(Fuel::FuelType, "fuel_type"))
                    .col(enum_column(Fuel::EmissionType, "emission_type"))
                    .col(created_at_column(Fuel::CreatedAt))
                    .col(ColumnDef::new(Fuel::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create oil table
        manager
            .create_table(
                Table::create()
                    .table(Oil::Table)
                    .if_not_exists()
                    .col(id_column(Oil::Id))
                    .col(
                        ColumnDef::new(Oil::Quantity)
                            .double()
                            .not_null()
                            .check(Expr::col(Oil::Quantity).gte(0)),
                    )
                    .col(ColumnDef::new(Oil::Description).string())
                    .col(datetime_column(Oil::Datetime))
                    .col(enum_column(Oil::OilType, "oil_type"))
                    .col(enum_column(Oil::OilCategory, "oil_category"))
                    .col(enum_column(Oil::EmissionType, "emission_type"))
                    .col(created_at_column(Oil::CreatedAt))
                    .col(ColumnDef::new(Oil::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Create roadtrip table
        manager
            .create_table(
                Table::create()
                    .table(Roadtrip::Table)
                    .if_not_exists()
                    .col(id_column(Roadtrip::Id))
                    .col(
                        ColumnDef::new(Roadtrip::Quantity)
                            .integer()
                            .not_null()
                            .check(Expr::col(Roadtrip::Quantity).gte(0)),
                    )
                    .col(ColumnDef::new(Roadtrip::Description).string())
                    .col(datetime_column(Roadtrip::Datetime))
                    .col(enum_column(Roadtrip::Group, "roadtrip_group"))
                    .col(enum_column(Roadtrip::EmissionType, "emission_type"))
                    .col(created_at_column(Roadtrip::CreatedAt))
                    .col(ColumnDef::new(Roadtrip::UpdatedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Reports filter every table by year
        manager
            .create_index(datetime_index("idx_energy_datetime", Energy::Table, Energy::Datetime))
            .await?;
        manager
            .create_index(datetime_index("idx_fuel_datetime", Fuel::Table, Fuel::Datetime))
            .await?;
        manager
            .create_index(datetime_index("idx_oil_datetime", Oil::Table, Oil::Datetime))
            .await?;
        manager
            .create_index(datetime_index(
                "idx_roadtrip_datetime",
                Roadtrip::Table,
                Roadtrip::Datetime,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roadtrip::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Oil::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Fuel::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Energy::Table).to_owned())
            .await?;

        for (name, _) in ENUM_TYPES {
            manager
                .drop_type(Type::drop().if_exists().name(Alias::new(*name)).to_owned())
                .await?;
        }

        Ok(())
    }
}

pub(crate) fn id_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

pub(crate) fn created_at_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn datetime_index<T, C>(name: &str, table: T, column: C) -> IndexCreateStatement
where
    T: Iden + 'static,
    C: Iden + 'static,
{
    Index::create()
        .if_not_exists()
        .name(name)
        .table(table)
        .col(column)
        .to_owned()
}

fn datetime_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

pub(crate) fn enum_column<T: IntoIden>(name: T, type_name: &str) -> ColumnDef {
    ColumnDef::new(name)
        .custom(Alias::new(type_name))
        .not_null()
        .to_owned()
}

#[derive(DeriveIden)]
enum Energy {
    Table,
    Id,
    Quantity,
    Description,
    Datetime,
    Location,
    EnergyCategory,
    EmissionType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Fuel {
    Table,
    Id,
    Quantity,
    Description,
    Datetime,
    FuelType,
    EmissionType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Oil {
    Table,
    Id,
    Quantity,
    Description,
    Datetime,
    OilType,
    OilCategory,
    EmissionType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Roadtrip {
    Table,
    Id,
    Quantity,
    Description,
    Datetime,
    Group,
    EmissionType,
    CreatedAt,
    UpdatedAt,
}
