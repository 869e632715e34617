//! Macro for implementing Display and FromStr for domain enums
//!
//! Project types, progress tiers, checklist statuses and configuration
//! switches all round-trip through the same lowercase string form, whether
//! they come from a config file, a CLI flag or a SQLite column.
//!
//! # Example
//!
//! ```rust
//! use projboard_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Day,
//!     Night,
//! }
//!
//! impl_domain_status_conversions!(Shift {
//!     Day => "day",
//!     Night => "night",
//! });
//!
//! assert_eq!(Shift::Night.as_str(), "night");
//! assert_eq!("DAY".parse::<Shift>(), Ok(Shift::Day));
//! ```

/// Implements `as_str`, Display and FromStr for fieldless domain enums
///
/// This macro generates:
/// - `as_str()`: the canonical lowercase string
/// - Display trait: writes the canonical string
/// - FromStr trait: parses case-insensitive strings to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical lowercase string for this value.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!(
                        "Invalid {}: {}",
                        ::std::stringify!($enum_name),
                        s
                    )),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStage {
        Welding,
        Painting,
        Assembly,
    }

    impl_domain_status_conversions!(TestStage {
        Welding => "welding",
        Painting => "painting",
        Assembly => "assembly",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestStage::Welding.to_string(), "welding");
        assert_eq!(TestStage::Painting.to_string(), "painting");
        assert_eq!(TestStage::Assembly.as_str(), "assembly");
    }

    #[test]
    fn test_fromstr_is_case_insensitive_and_trims() {
        assert_eq!(TestStage::from_str("WELDING").unwrap(), TestStage::Welding);
        assert_eq!(TestStage::from_str("PaInTiNg").unwrap(), TestStage::Painting);
        assert_eq!(TestStage::from_str("  assembly ").unwrap(), TestStage::Assembly);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStage::from_str("grinding");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestStage: grinding"));
        assert!(TestStage::from_str("").is_err());
    }

    /// Expands next to the crate's one-parameter `Result` alias.
    mod with_result_alias {
        use std::str::FromStr;

        use crate::errors::{ProjBoardError, Result};

        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Shift {
            Day,
            Night,
        }

        impl_domain_status_conversions!(Shift {
            Day => "day",
            Night => "night",
        });

        fn parse_shift(raw: &str) -> Result<Shift> {
            Shift::from_str(raw).map_err(ProjBoardError::InvalidInput)
        }

        #[test]
        fn test_expands_where_crate_result_alias_is_in_scope() {
            assert_eq!(parse_shift("NIGHT").unwrap(), Shift::Night);
            assert_eq!(Shift::Day.to_string(), "day");
            assert!(matches!(parse_shift("swing"), Err(ProjBoardError::InvalidInput(_))));
        }
    }
}
