//! Strongly-typed ID newtypes and the identifier generator.
//!
//! Every hierarchy entity gets its own newtype around `Uuid`, so a `GradeId`
//! can never be passed where a `LevelId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use classtree_models::ids::{IdGenerator, LevelId, GradeId};
//!
//! let mut ids = IdGenerator::sequential();
//! let level: LevelId = ids.next_id();
//! let grade: GradeId = ids.next_id();
//!
//! // remove_level(grade); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Namespace for derived class ids (UUID v5).
const DERIVED_CLASS_NAMESPACE: Uuid = Uuid::from_u128(0x6c61_7373_7472_6565_8000_0000_0000_0001);

/// Macro to define a strongly-typed ID newtype.
///
/// Generates a `Uuid` wrapper with conversions, formatting and transparent
/// serde support.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create an ID from a u128 value (useful for fixtures).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            /// Get the inner UUID value.
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Get a reference to the inner UUID.
            #[inline]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl AsRef<Uuid> for $name {
            #[inline]
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Uuid::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Strongly-typed ID for Level entities.
    LevelId
);

define_id!(
    /// Strongly-typed ID for Grade entities.
    GradeId
);

define_id!(
    /// Strongly-typed ID for SubGrade entities.
    SubGradeId
);

define_id!(
    /// Strongly-typed ID for Combination entities.
    CombinationId
);

define_id!(
    /// Strongly-typed ID for derived classes.
    ///
    /// Unlike the other ids this one is never random in practice: see
    /// [`DerivedClassId::derive`].
    DerivedClassId
);

impl DerivedClassId {
    /// Deterministic id for the class produced by a grade and its optional
    /// sub-grade and combination.
    ///
    /// The same tuple always yields the same id, so regenerating an
    /// unchanged hierarchy reproduces every class id exactly.
    pub fn derive(
        grade_id: GradeId,
        sub_grade_id: Option<SubGradeId>,
        combination_id: Option<CombinationId>,
    ) -> Self {
        let nil = Uuid::nil();
        let mut name = Vec::with_capacity(48);
        name.extend_from_slice(grade_id.as_uuid().as_bytes());
        name.extend_from_slice(sub_grade_id.as_ref().map_or(&nil, |id| id.as_uuid()).as_bytes());
        name.extend_from_slice(
            combination_id
                .as_ref()
                .map_or(&nil, |id| id.as_uuid())
                .as_bytes(),
        );
        Self(Uuid::new_v5(&DERIVED_CLASS_NAMESPACE, &name))
    }
}

/// Source of ids for newly created hierarchy nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdGenerator {
    /// Random v4 UUIDs.
    #[default]
    Random,
    /// Counter-backed UUIDs: `1`, `2`, `3`, ... Used for fixtures.
    Sequential { next: u128 },
}

impl IdGenerator {
    pub fn random() -> Self {
        Self::Random
    }

    pub fn sequential() -> Self {
        Self::Sequential { next: 1 }
    }

    /// Issue the next raw UUID.
    pub fn next_uuid(&mut self) -> Uuid {
        match self {
            Self::Random => Uuid::new_v4(),
            Self::Sequential { next } => {
                let id = Uuid::from_u128(*next);
                *next += 1;
                id
            }
        }
    }

    /// Issue the next id, typed for the entity being created.
    pub fn next_id<T: From<Uuid>>(&mut self) -> T {
        T::from(self.next_uuid())
    }
}
