// ABOUTME: Three-state optional field separating "not provided" from "explicitly none"
// ABOUTME: Serde maps absent keys to Unknown, JSON null to Cleared, and values to Value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional value that remembers *why* it is missing.
///
/// Target fields on a client profile need three states: never provided,
/// explicitly cleared, and set (possibly to zero). `Option<T>` collapses the
/// first two and makes "set to zero" easy to confuse with "unset" once
/// defaults get involved.
///
/// Use together with `#[serde(default, skip_serializing_if = "Field::is_unknown")]`
/// so an absent key round-trips as absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<T> {
    /// Not present in the input
    Unknown,
    /// Present and explicitly `null`
    Cleared,
    /// Present with a value
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Unknown
    }
}

impl<T> Field<T> {
    /// True when the key was absent
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// True when a value is present
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl<T: Copy> Field<T> {
    /// Copy the value out, if any
    #[must_use]
    pub const fn get(&self) -> Option<T> {
        match self {
            Self::Value(value) => Some(*value),
            Self::Unknown | Self::Cleared => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Cleared, Self::Value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Unknown | Self::Cleared => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
