//! Strongly-typed identifiers for opaque backend keys.
//!
//! The Progres backend hands out numeric ids for enrollment cards, levels,
//! training offers and so on. Wrapping them keeps a card id from being passed
//! where a level id is expected; no further validation is applied because the
//! values are opaque and backend-assigned.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Macro to generate lightweight newtypes for backend identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw backend identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CardId, "Identifier of an enrollment card (one per academic year).");
id_newtype!(LevelId, "Identifier of a study level (e.g. L1, M2).");
id_newtype!(OfferId, "Identifier of an opened training offer.");
id_newtype!(YearId, "Identifier of an academic year record.");
id_newtype!(PeriodId, "Identifier of a teaching period within a year.");
id_newtype!(EstablishmentId, "Identifier of a university establishment.");
