//! Postgres enum types mirroring the closed domain enumerations.
//!
//! Each type converts exhaustively to and from its domain counterpart, so a
//! variant added on one side without the other fails to compile.

use domain::student::{Gender, StudentStatus};
use domain::{
    EmissionType, EnergyCategory, EnergyLocation, FuelType, OilCategory, OilType, RoadtripGroup,
};
use sea_orm::entity::prelude::*;

macro_rules! db_enum {
    (
        $name:ident => $domain:ident, $db_name:tt {
            $($variant:ident => $lit:tt),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
        #[sea_orm(rs_type = "String", db_type = "Enum", enum_name = $db_name)]
        pub enum $name {
            $(
                #[sea_orm(string_value = $lit)]
                $variant,
            )+
        }

        impl From<$domain> for $name {
            fn from(value: $domain) -> Self {
                match value {
                    $($domain::$variant => Self::$variant,)+
                }
            }
        }

        impl From<$name> for $domain {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => Self::$variant,)+
                }
            }
        }
    };
}

db_enum! {
    DbEnergyLocation => EnergyLocation, "energy_location" {
        Local => "LOCAL",
        OficinasAdministrativas => "OFICINAS_ADMINISTRATIVAS",
        PlantaDeEnvasado => "PLANTA_DE_ENVASADO",
        Desconocido => "DESCONOCIDO",
    }
}

db_enum! {
    DbEnergyCategory => EnergyCategory, "energy_category" {
        ConsumoAdministrativo => "CONSUMO_ADMINISTRATIVO",
        ConsumoLogistico => "CONSUMO_LOGISTICO",
        ConsumoDeDistribucion => "CONSUMO_DE_DISTRIBUCION",
    }
}

db_enum! {
    DbEmissionType => EmissionType, "emission_type" {
        EmisionesDirectas => "EMISIONES_DIRECTAS",
        EmisionesIndirectas => "EMISIONES_INDIRECTAS",
        OtrasEmisionesIndirectas => "OTRAS_EMISIONES_INDIRECTAS",
    }
}

db_enum! {
    DbFuelType => FuelType, "fuel_type" {
        CombustibleAdministrativo => "COMBUSTIBLE_ADMINISTRATIVO",
        CombustibleIndirectoDeProveedor => "COMBUSTIBLE_INDIRECTO_DE_PROVEEDOR",
        CombustibleDeLogistica => "COMBUSTIBLE_DE_LOGISTICA",
    }
}

db_enum! {
    DbOilType => OilType, "oil_type" {
        Refrigerante => "REFRIGERANTE",
        Aceite => "ACEITE",
    }
}

db_enum! {
    DbOilCategory => OilCategory, "oil_category" {
        ConsumoAdministrativo => "CONSUMO_ADMINISTRATIVO",
        ConsumoLogistico => "CONSUMO_LOGISTICO",
        ConsumoDeOperacion => "CONSUMO_DE_OPERACION",
    }
}

db_enum! {
    DbRoadtripGroup => RoadtripGroup, "roadtrip_group" {
        EquipoDeVentas => "EQUIPO_DE_VENTAS",
        EquipoAdministrativo => "EQUIPO_ADMINISTRATIVO",
    }
}

db_enum! {
    DbGender => Gender, "gender_type" {
        Male => "MALE",
        Female => "FEMALE",
        Other => "OTHER",
    }
}

db_enum! {
    DbStudentStatus => StudentStatus, "student_status" {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Literal;

    fn assert_same_literals<D, E>()
    where
        D: Literal + Into<E>,
        E: ActiveEnum<Value = String>,
    {
        for variant in D::ALL {
            let db: E = (*variant).into();
            assert_eq!(db.to_value(), variant.as_str());
        }
    }

    #[test]
    fn test_db_literals_match_domain() {
        assert_same_literals::<EnergyLocation, DbEnergyLocation>();
        assert_same_literals::<EnergyCategory, DbEnergyCategory>();
        assert_same_literals::<EmissionType, DbEmissionType>();
        assert_same_literals::<FuelType, DbFuelType>();
        assert_same_literals::<OilType, DbOilType>();
        assert_same_literals::<OilCategory, DbOilCategory>();
        assert_same_literals::<RoadtripGroup, DbRoadtripGroup>();
        assert_same_literals::<Gender, DbGender>();
        assert_same_literals::<StudentStatus, DbStudentStatus>();
    }
}
