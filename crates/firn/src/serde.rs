//! Wire-format serialization for identifiers.
//!
//! The remote API transfers 64-bit identifiers as decimal strings, because
//! they exceed what JavaScript callers can hold in a double. `Serialize`
//! follows that convention. `Deserialize` accepts both the string form and a
//! bare integer, applying the same total parsing rules as text construction.
//!
//! Fields that genuinely hold native integers can opt into [`as_u64`] with
//! `#[serde(with = "firn::serde::as_u64")]`.

use core::{fmt, marker::PhantomData};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{EntityKind, Snowflake};

impl<K: EntityKind> Serialize for Snowflake<K> {
    /// Serializes as the canonical decimal string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, K: EntityKind> Deserialize<'de> for Snowflake<K> {
    /// Deserializes from a decimal string or a native integer.
    ///
    /// Malformed strings and negative integers follow the parsing policy and
    /// yield [`Snowflake::EMPTY`] rather than an error. Only an input that is
    /// neither a string nor an integer fails.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnowflakeVisitor<K>(PhantomData<K>);

        impl<K: EntityKind> serde::de::Visitor<'_> for SnowflakeVisitor<K> {
            type Value = Snowflake<K>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an identifier as a decimal string or integer")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Snowflake::from(v))
            }

            #[inline]
            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Snowflake::new(v))
            }

            #[inline]
            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                // A negative number names nothing; same silent policy as
                // malformed text.
                Ok(u64::try_from(v).map_or(Snowflake::EMPTY, Snowflake::new))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor(PhantomData))
    }
}

pub mod as_u64 {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::{EntityKind, Snowflake};

    /// Serialize an identifier as its native unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<K, S>(id: &Snowflake<K>, s: S) -> Result<S::Ok, S::Error>
    where
        K: EntityKind,
        S: Serializer,
    {
        s.serialize_u64(id.get())
    }

    /// Deserialize an identifier from its native unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the value is
    /// not an unsigned integer.
    pub fn deserialize<'de, K, D>(d: D) -> Result<Snowflake<K>, D::Error>
    where
        K: EntityKind,
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Snowflake::new)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use crate::{ChannelId, GuildId, UserId};
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        guild_id: GuildId,
        channel_id: ChannelId,
        #[serde(with = "super::as_u64")]
        author_id: UserId,
    }

    #[test]
    fn serializes_ids_as_decimal_strings() {
        let id = GuildId::new(175_928_847_299_117_063);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""175928847299117063""#);

        // The wire text matches `Display` exactly.
        let id = UserId::new(123_456_789_012_345_678);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""123456789012345678""#);
        assert_eq!(id.to_string(), "123456789012345678");
    }

    #[test]
    fn deserializes_from_string_or_integer() {
        let from_string: GuildId =
            serde_json::from_value(json!("175928847299117063")).expect("deserialize");
        let from_int: GuildId =
            serde_json::from_value(json!(175_928_847_299_117_063_u64)).expect("deserialize");
        assert_eq!(from_string, from_int);
        assert_eq!(from_string.get(), 175_928_847_299_117_063);
    }

    #[test]
    fn malformed_wire_values_deserialize_as_empty() {
        let junk: UserId = serde_json::from_value(json!("not-an-id")).expect("deserialize");
        assert!(junk.is_empty());

        let blank: UserId = serde_json::from_value(json!("")).expect("deserialize");
        assert!(blank.is_empty());

        let negative: UserId = serde_json::from_value(json!(-5)).expect("deserialize");
        assert!(negative.is_empty());
    }

    #[test]
    fn rejects_non_identifier_shapes() {
        serde_json::from_value::<UserId>(json!(true)).expect_err("should fail");
        serde_json::from_value::<UserId>(json!({ "id": 1 })).expect_err("should fail");
    }

    #[test]
    fn row_round_trip() {
        let row = Row {
            guild_id: GuildId::new(81_384_788_765_712_384),
            channel_id: ChannelId::new(41_771_983_423_143_937),
            author_id: UserId::new(80_351_110_224_678_912),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(
            json,
            r#"{"guild_id":"81384788765712384","channel_id":"41771983423143937","author_id":80351110224678912}"#
        );
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }
}
