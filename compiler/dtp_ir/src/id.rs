//! Compact numeric identifiers.
//!
//! Every id is a `u32` that serializes as a bare number. JSON map keys arrive
//! as numeric strings, so deserialization accepts both forms. The string form
//! also has to work when the map sits inside an internally tagged enum, where
//! serde buffers keys as strings before the id sees them.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generate a `u32` newtype id with `new`/`raw` accessors, `Display` and serde.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create from a raw value.
            #[inline]
            pub const fn new(raw: u32) -> Self {
                $name(raw)
            }

            /// Get raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u32(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any(RawIdVisitor).map($name)
            }
        }
    };
}

/// Accepts an id as an unsigned number or a numeric string.
struct RawIdVisitor;

impl Visitor<'_> for RawIdVisitor {
    type Value = u32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a u32 id as a number or numeric string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
        value
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

define_id! {
    /// Surrogate code for a single word in the serializer's vocabulary.
    WordId
}

define_id! {
    /// Key into the token mapping.
    TokenId
}

define_id! {
    /// Key into the frame mapping.
    FrameId
}

impl WordId {
    /// Reserved search-tree key marking the end of a valid word sequence.
    ///
    /// Never resolvable through a lookup; renders as `LEAF`.
    pub const LEAF: WordId = WordId(0);
}

impl TokenId {
    /// Reserved search-tree key marking the end of a valid token sequence.
    pub const LEAF: TokenId = TokenId(0);

    /// Definition id shared by every literal-type token.
    pub const LITERAL: TokenId = TokenId(1);
}
