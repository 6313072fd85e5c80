// src/shared/patch.rs
use serde::{Deserialize, Serialize, Serializer};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => reset the stored value to its default
// - Value(v): replace with v
//
// Serde behavior (use with #[serde(default)] on the field):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//
// Serializing writes Unset and Null as null.
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip_deserializing)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T: Serialize> Serialize for PatchField<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PatchField::Unset | PatchField::Null => serializer.serialize_none(),
            PatchField::Value(v) => v.serialize(serializer),
        }
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Resolves the patch against the current value: keep, reset, or replace.
    pub fn resolve(self, current: T, default: impl FnOnce() -> T) -> T {
        match self {
            PatchField::Unset => current,
            PatchField::Null => default(),
            PatchField::Value(v) => v,
        }
    }
}
