//! Macro for the closed, labelled enumerations stored as PostgreSQL enum types.
//!
//! Every generated enum carries its wire value (shared by serde and sqlx)
//! and the Urdu label shown on badges.

/// Define an enum with a stable wire value and an Urdu display label per variant.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $pg_type:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal, $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            sqlx::Type,
        )]
        #[sqlx(type_name = $pg_type)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                #[sqlx(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Name of the PostgreSQL enum type backing this column.
            pub const PG_TYPE: &'static str = $pg_type;

            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The stored wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            /// The Urdu label shown to users.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// The value as a bindable column.
            pub fn column(&self) -> $crate::record::ColumnValue {
                $crate::record::ColumnValue::Enum {
                    value: self.as_str(),
                    pg_type: Self::PG_TYPE,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = madrasa_core::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(madrasa_core::AppError::validation(format!(
                        "Invalid {}: '{s}'",
                        $pg_type
                    ))),
                }
            }
        }
    };
}
