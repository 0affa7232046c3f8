//! Closed, string-backed enumerations.
//!
//! Every categorical column (location, fuel type, emission type, ...) is a
//! closed set of SCREAMING_SNAKE literals. The same literal is used on the
//! wire and in the database, so each enum carries one exhaustive table that
//! drives serde, `FromStr`, `Display` and the zero-fill key set.

/// A closed enumeration with a fixed literal per variant
pub trait Literal: Copy + Ord + Send + Sync + 'static {
    /// Human-readable name of the enumeration, used in error messages
    const KIND: &'static str;

    /// Every variant, in declaration order
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;
}

macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $lit:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        impl $crate::literal::Literal for $name {
            const KIND: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $lit,)+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::InvalidLiteral;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($lit => Ok(Self::$variant),)+
                    other => Err($crate::error::InvalidLiteral {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::literal::Literal::as_str(self))
            }
        }
    };
}

pub(crate) use literal_enum;

literal_enum! {
    /// Emission scope shared by every metric kind
    EmissionType {
        EmisionesDirectas => "EMISIONES_DIRECTAS",
        EmisionesIndirectas => "EMISIONES_INDIRECTAS",
        OtrasEmisionesIndirectas => "OTRAS_EMISIONES_INDIRECTAS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_emission_type_table() {
        assert_eq!(EmissionType::ALL.len(), 3);
        for variant in EmissionType::ALL {
            assert_eq!(EmissionType::from_str(variant.as_str()).unwrap(), *variant);
        }
    }

    #[test]
    fn test_unknown_literal_rejected() {
        let err = EmissionType::from_str("EMISIONES DIRECTAS").unwrap_err();
        assert_eq!(err.kind, "EmissionType");
        assert_eq!(err.value, "EMISIONES DIRECTAS");
    }

    #[test]
    fn test_serde_uses_literal() {
        let json = serde_json::to_string(&EmissionType::OtrasEmisionesIndirectas).unwrap();
        assert_eq!(json, "\"OTRAS_EMISIONES_INDIRECTAS\"");

        let parsed: EmissionType = serde_json::from_str("\"EMISIONES_INDIRECTAS\"").unwrap();
        assert_eq!(parsed, EmissionType::EmisionesIndirectas);

        assert!(serde_json::from_str::<EmissionType>("\"NOPE\"").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(EmissionType::EmisionesDirectas.to_string(), "EMISIONES_DIRECTAS");
    }
}
