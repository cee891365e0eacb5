//! Typed identifiers for session entities.
//!
//! `Id<T>` wraps a time-ordered (v7) `Uuid` and carries the entity it belongs
//! to as a phantom parameter, so an `ImageId` can never be handed to an
//! operation expecting a `NotificationId`.
//!
//! ```rust
//! use advocacy_core::common::{ImageId, NotificationId};
//!
//! let image = ImageId::new();
//! let notification = NotificationId::new();
//! assert_ne!(image.into_uuid(), notification.into_uuid());
//!
//! // Compile error:
//! // let wrong: NotificationId = image;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// A typed wrapper around a v7 `Uuid`.
///
/// Ids minted within one session are unique and sort in creation order,
/// which is what the gallery relies on for stable listings.
#[repr(transparent)]
pub struct Id<T>(Uuid, PhantomData<fn() -> T>);

impl<T> Id<T> {
    /// Mints a fresh time-ordered id.
    #[inline]
    pub fn new() -> Self {
        Self(Uuid::now_v7(), PhantomData)
    }

    /// Wraps an existing `Uuid`.
    #[inline]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    /// Deterministic id for fixture data (seed gallery records).
    #[inline]
    pub const fn fixture(n: u128) -> Self {
        Self(Uuid::from_u128(n), PhantomData)
    }

    #[inline]
    pub fn into_uuid(self) -> Uuid {
        self.0
    }

    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses an id handed back by the display layer.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?, PhantomData))
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("?");
        f.debug_tuple(&format!("Id<{}>", entity))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<Uuid> for Id<T> {
    #[inline]
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Photo;

    type PhotoId = Id<Photo>;

    #[test]
    fn test_new_creates_unique_ids() {
        let a = PhotoId::new();
        let b = PhotoId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_sort_in_creation_order() {
        let first = PhotoId::new();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let second = PhotoId::new();
        assert!(first < second);
    }

    #[test]
    fn test_parse_accepts_display_output() {
        let id = PhotoId::new();
        assert_eq!(PhotoId::parse(&id.to_string()).unwrap(), id);
        assert!(PhotoId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_fixture_ids_are_stable() {
        assert_eq!(PhotoId::fixture(1), PhotoId::fixture(1));
        assert_ne!(PhotoId::fixture(1), PhotoId::fixture(2));
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = PhotoId::fixture(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }

    #[test]
    fn test_debug_names_entity() {
        let debug = format!("{:?}", PhotoId::fixture(0));
        assert!(debug.starts_with("Id<Photo>"));
    }
}
