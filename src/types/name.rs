// ABOUTME: Phantom-typed resource names for pods, containers, and volumes.
// ABOUTME: Validates the runtime naming rule once and prevents mixing name kinds.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use thiserror::Error;

/// Marker types for phantom type parameters.
/// Using empty enums prevents instantiation and requires no trait bounds.
pub enum PodMarker {}
pub enum ContainerMarker {}
pub enum VolumeMarker {}

const MAX_LEN: usize = 253;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name cannot be empty")]
    Empty,

    #[error("name exceeds maximum length of 253 characters")]
    TooLong,

    #[error("name must start with an ASCII letter or digit: '{0}'")]
    InvalidStart(String),

    #[error("invalid character '{ch}' in name '{name}'")]
    InvalidChar { ch: char, name: String },
}

/// A validated name for a runtime resource.
///
/// Names follow the container runtime's rule: an ASCII alphanumeric first
/// character followed by alphanumerics, `_`, `.` or `-`. The phantom
/// parameter keeps a `ContainerName` from being passed where a `PodName`
/// is expected.
#[must_use = "names reference resources and should not be ignored"]
pub struct Name<T> {
    value: String,
    _marker: PhantomData<T>,
}

impl<T> Name<T> {
    pub fn new(value: &str) -> Result<Self, NameError> {
        let mut chars = value.chars();
        let first = chars.next().ok_or(NameError::Empty)?;

        if value.len() > MAX_LEN {
            return Err(NameError::TooLong);
        }

        if !first.is_ascii_alphanumeric() {
            return Err(NameError::InvalidStart(value.to_string()));
        }

        if let Some(ch) = chars.find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '_' | '.' | '-'))
        {
            return Err(NameError::InvalidChar {
                ch,
                name: value.to_string(),
            });
        }

        Ok(Self {
            value: value.to_string(),
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

// Manual trait implementations that don't require T to implement the trait.

impl<T> std::fmt::Debug for Name<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Name").field(&self.value).finish()
    }
}

impl<T> Clone for Name<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for Name<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Name<T> {}

impl<T> Hash for Name<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> std::fmt::Display for Name<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Name<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> Serialize for Name<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Name<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(serde::de::Error::custom)
    }
}

pub type PodName = Name<PodMarker>;
pub type ContainerName = Name<ContainerMarker>;
pub type VolumeName = Name<VolumeMarker>;
