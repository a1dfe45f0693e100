//! Data models for the team matching engine.
//!
//! Catalog values serialize as their Korean display labels so the presentation layer can
//! render them without a lookup table.

/// Declares a closed catalog enum whose variants carry a display label.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(s: &str) -> Option<Self> {
                match s {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl $crate::models::Label for $name {
            fn label(&self) -> &'static str {
                self.as_str()
            }

            fn parse_label(s: &str) -> Option<Self> {
                Self::from_label(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod catalog;
mod chat;
mod listing;
mod profile;
mod snapshot;

pub use catalog::*;
pub use chat::*;
pub use listing::*;
pub use profile::*;
pub use snapshot::*;

/// A catalog value that round-trips through its display label.
pub trait Label: Sized + Copy {
    fn label(&self) -> &'static str;
    fn parse_label(s: &str) -> Option<Self>;
}
