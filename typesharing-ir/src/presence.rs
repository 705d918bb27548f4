//! Field presence classes.

use serde::Serialize;

/// The `extant` marker of a field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Extant {
    /// The field always exists on the object (no `extant` key).
    #[default]
    Required,
    /// `extant: missing` - the field may not exist on the object at all.
    Missing,
}

/// Whether and how a field's absence or null-ness is representable.
///
/// Combines the two orthogonal markers of a field definition: the trailing
/// `?` on the raw name (nullable) and `extant: missing` (possibly absent).
/// Absence is a state of its own and is never folded into null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum Presence {
    /// Always present, never null.
    Required,
    /// Always present, value may be null.
    Nullable,
    /// May be missing from the object; `nullable` adds a null state on top.
    PossiblyAbsent { nullable: bool },
}

impl Presence {
    /// Compute the presence class from the raw markers of a field.
    pub fn from_markers(nullable: bool, extant: Extant) -> Self {
        match (extant, nullable) {
            (Extant::Missing, nullable) => Presence::PossiblyAbsent { nullable },
            (Extant::Required, true) => Presence::Nullable,
            (Extant::Required, false) => Presence::Required,
        }
    }

    /// Returns true if a present value may be null.
    pub fn admits_null(&self) -> bool {
        matches!(
            self,
            Presence::Nullable | Presence::PossiblyAbsent { nullable: true }
        )
    }

    /// Returns true if the field may be missing from the object.
    pub fn admits_absence(&self) -> bool {
        matches!(self, Presence::PossiblyAbsent { .. })
    }

    /// Get a short label for diagnostics and summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Required => "required",
            Presence::Nullable => "nullable",
            Presence::PossiblyAbsent { nullable: false } => "possibly-absent",
            Presence::PossiblyAbsent { nullable: true } => "possibly-absent, nullable",
        }
    }
}
