use std::fmt;

/// Error returned when a string doesn't name a variant of one of the public enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    type_name: &'static str,
    input: String,
}

impl ParseEnumError {
    pub fn new(type_name: &'static str, input: &str) -> Self {
        Self {
            type_name,
            input: input.to_string(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value: {:?}", self.type_name, self.input)
    }
}

impl std::error::Error for ParseEnumError {}

/// Implements `as_str`, `ALL`, `Display` and `FromStr` for a fieldless enum,
/// using the given strings as the canonical (data attribute) spelling.
///
/// Exported so enums defined by the view crates parse the same way:
///
/// ```ignore
/// plex_common::string_enum!(Density { Compact => "compact", Comfortable => "comfortable" });
/// ```
#[macro_export]
macro_rules! string_enum {
    ($ty:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok($ty::$variant),)+
                    _ => Err($crate::ParseEnumError::new(stringify!($ty), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Density {
        Compact,
        Comfortable,
    }

    string_enum!(Density {
        Compact => "compact",
        Comfortable => "comfortable",
    });

    #[test]
    fn test_string_enum_round_trips_every_variant() {
        assert_eq!(Density::ALL.len(), 2);
        for density in Density::ALL {
            assert_eq!(density.to_string().parse::<Density>(), Ok(*density));
        }
    }

    #[test]
    fn test_string_enum_error_names_type_and_input() {
        let err = "cozy".parse::<Density>().unwrap_err();
        assert_eq!(err.type_name(), "Density");
        assert_eq!(err.input(), "cozy");
        assert_eq!(err.to_string(), "invalid Density value: \"cozy\"");
    }
}
