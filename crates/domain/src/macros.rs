//! Macro for closed enumerations that travel as string keys on the wire
//!
//! Generates the key lookup, an ordered `ALL` table, and `Display`/`FromStr`
//! implementations from one mapping, so the presentation order and the wire
//! keys cannot drift apart.
//!
//! # Example
//!
//! ```rust
//! use wellscope_domain::impl_wire_key_enum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Region {
//!     Score,
//!     Tags,
//! }
//!
//! impl_wire_key_enum!(Region {
//!     Score => "score",
//!     Tags => "tags",
//! });
//!
//! assert_eq!(Region::ALL, [Region::Score, Region::Tags]);
//! assert_eq!(Region::Tags.key(), "tags");
//! ```

/// Implements key lookup, `ALL`, Display and FromStr for a closed enum
///
/// Variants are listed in presentation order; `ALL` preserves it. Parsing is
/// case-insensitive and rejects anything outside the mapping.
#[macro_export]
macro_rules! impl_wire_key_enum {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in presentation order.
            pub const ALL: [Self; [$(stringify!($variant)),+].len()] = [$(Self::$variant),+];

            /// Key used on the wire for this variant.
            pub const fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
