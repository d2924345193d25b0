use core::{
    cmp::Ordering,
    convert::Infallible,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use crate::{Any, EPOCH_MILLIS, EntityKind};

/// A 64-bit identifier minted by the remote service
///
/// - 42 bits timestamp (ms since [`EPOCH_MILLIS`])
/// - 5 bits worker ID
/// - 5 bits process ID
/// - 12 bits increment
///
/// ```text
///  Bit Index:  63             22 21          17 16           12 11              0
///              +----------------+--------------+---------------+----------------+
///  Field:      | timestamp (42) |  worker (5)  |  process (5)  | increment (12) |
///              +----------------+--------------+---------------+----------------+
///              |<------ MSB -------------- 64 bits -------------- LSB --------->|
/// ```
///
/// The service mints every identifier; this crate only parses, decodes, and
/// compares them. The numeric value is ordered by creation time, so sorting
/// identifiers sorts the objects they name chronologically.
///
/// The marker `K` records which entity category the identifier belongs to and
/// occupies no space at runtime. It defaults to [`Any`] for identifiers whose
/// category is unknown or irrelevant.
///
/// # Example
///
/// ```
/// use firn::{GuildId, Snowflake};
///
/// let id: Snowflake = "175928847299117063".into();
/// assert_eq!(id.timestamp(), 41_944_705_796);
/// assert_eq!(id.worker_id(), 1);
/// assert_eq!(id.increment(), 7);
///
/// // Malformed text is not an error; it parses as the empty id.
/// let missing: GuildId = "not-a-number".into();
/// assert!(missing.is_empty());
/// ```
#[repr(transparent)]
pub struct Snowflake<K: EntityKind = Any> {
    raw: u64,
    kind: PhantomData<K>,
}

impl<K: EntityKind> Snowflake<K> {
    /// The empty identifier. No object ever carries it; it is the value of a
    /// field the service left unset and the result of parsing malformed text.
    pub const EMPTY: Self = Self::new(0);

    /// Bitmask for extracting the 42-bit timestamp field. Occupies bits 22
    /// through 63.
    pub const TIMESTAMP_MASK: u64 = u64::MAX << 22;

    /// Bitmask for extracting the 5-bit worker ID field. Occupies bits 17
    /// through 21.
    pub const WORKER_ID_MASK: u64 = 0x3E0000;

    /// Bitmask for extracting the 5-bit process ID field. Occupies bits 12
    /// through 16.
    pub const PROCESS_ID_MASK: u64 = 0x1F000;

    /// Bitmask for extracting the 12-bit increment field. Occupies bits 0
    /// through 11.
    pub const INCREMENT_MASK: u64 = 0xFFF;

    /// Number of bits to shift the timestamp down to bit 0.
    pub const TIMESTAMP_SHIFT: u64 = 22;

    /// Number of bits to shift the worker ID down to bit 0.
    pub const WORKER_ID_SHIFT: u64 = 17;

    /// Number of bits to shift the process ID down to bit 0.
    pub const PROCESS_ID_SHIFT: u64 = 12;

    /// Number of bits to shift the increment field (bit 0).
    pub const INCREMENT_SHIFT: u64 = 0;

    /// Wraps a raw 64-bit value without inspecting it.
    pub const fn new(raw: u64) -> Self {
        Self {
            raw,
            kind: PhantomData,
        }
    }

    /// Packs decoded fields back into an identifier. Fields wider than their
    /// slot are truncated to the slot's bit width.
    pub const fn from_parts(timestamp: u64, worker_id: u8, process_id: u8, increment: u16) -> Self {
        let timestamp = (timestamp << Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK;
        let worker_id = ((worker_id as u64) << Self::WORKER_ID_SHIFT) & Self::WORKER_ID_MASK;
        let process_id = ((process_id as u64) << Self::PROCESS_ID_SHIFT) & Self::PROCESS_ID_MASK;
        let increment = ((increment as u64) << Self::INCREMENT_SHIFT) & Self::INCREMENT_MASK;
        Self::new(timestamp | worker_id | process_id | increment)
    }

    /// Returns the raw 64-bit value.
    pub const fn get(&self) -> u64 {
        self.raw
    }

    /// Returns `true` for the empty identifier.
    pub const fn is_empty(&self) -> bool {
        self.raw == 0
    }

    /// Extracts the timestamp from the packed identifier, in milliseconds
    /// since [`EPOCH_MILLIS`].
    pub const fn timestamp(&self) -> u64 {
        (self.raw & Self::TIMESTAMP_MASK) >> Self::TIMESTAMP_SHIFT
    }

    /// Extracts the ID of the worker that minted this identifier.
    pub const fn worker_id(&self) -> u8 {
        ((self.raw & Self::WORKER_ID_MASK) >> Self::WORKER_ID_SHIFT) as u8
    }

    /// Extracts the ID of the process that minted this identifier.
    pub const fn process_id(&self) -> u8 {
        ((self.raw & Self::PROCESS_ID_MASK) >> Self::PROCESS_ID_SHIFT) as u8
    }

    /// Extracts the increment that disambiguates identifiers minted by one
    /// process within the same millisecond.
    pub const fn increment(&self) -> u16 {
        ((self.raw & Self::INCREMENT_MASK) >> Self::INCREMENT_SHIFT) as u16
    }

    /// Returns the creation instant encoded in the identifier, as fractional
    /// seconds since the Unix epoch.
    ///
    /// The empty identifier reports the epoch itself, 1,420,070,400.0.
    pub const fn created_at(&self) -> f64 {
        (self.timestamp() + EPOCH_MILLIS) as f64 / 1000.0
    }
}

// Derives would bound these impls on `K: Clone`, `K: PartialEq`, and so on,
// even though no `K` is ever stored. Written out by hand instead.
impl<K: EntityKind> Clone for Snowflake<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: EntityKind> Copy for Snowflake<K> {}

impl<K: EntityKind> PartialEq for Snowflake<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: EntityKind> Eq for Snowflake<K> {}

impl<K: EntityKind> PartialOrd for Snowflake<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: EntityKind> Ord for Snowflake<K> {
    /// Orders by raw value, which is creation order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<K: EntityKind> Hash for Snowflake<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K: EntityKind> Default for Snowflake<K> {
    /// Defaults to [`Snowflake::EMPTY`].
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<K: EntityKind> PartialEq<u64> for Snowflake<K> {
    fn eq(&self, other: &u64) -> bool {
        self.raw == *other
    }
}

impl<K: EntityKind> PartialEq<Snowflake<K>> for u64 {
    fn eq(&self, other: &Snowflake<K>) -> bool {
        *self == other.raw
    }
}

impl<K: EntityKind> From<u64> for Snowflake<K> {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl<K: EntityKind> From<Snowflake<K>> for u64 {
    fn from(id: Snowflake<K>) -> Self {
        id.raw
    }
}

impl<K: EntityKind> From<&str> for Snowflake<K> {
    /// Parses the canonical decimal form.
    ///
    /// Parsing is total. Malformed input yields [`Snowflake::EMPTY`] instead
    /// of an error: the empty string, any string containing a non-digit
    /// (sign prefixes included), and values wider than 64 bits all map to it.
    /// Leading zeros are accepted.
    fn from(text: &str) -> Self {
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Self::EMPTY;
        }
        text.parse::<u64>().map_or(Self::EMPTY, Self::new)
    }
}

impl<K: EntityKind> From<String> for Snowflake<K> {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl<K: EntityKind> FromStr for Snowflake<K> {
    type Err = Infallible;

    /// Never fails; malformed text parses as [`Snowflake::EMPTY`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl<K: EntityKind> fmt::Display for Snowflake<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl<K: EntityKind> fmt::Debug for Snowflake<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snowflake")
            .field("kind", &K::NAME)
            .field("raw", &self.raw)
            .field("timestamp", &self.timestamp())
            .field("worker_id", &self.worker_id())
            .field("process_id", &self.process_id())
            .field("increment", &self.increment())
            .finish()
    }
}
