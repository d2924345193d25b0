use std::time::Duration;

/// Identifier epoch: Thursday, January 1, 2015 00:00:00 UTC, in milliseconds
/// since the Unix epoch.
///
/// The timestamp field of every [`Snowflake`] counts milliseconds forward
/// from this instant, which is the first second of 2015.
///
/// [`Snowflake`]: crate::Snowflake
pub const EPOCH_MILLIS: u64 = 1_420_070_400_000;

/// [`EPOCH_MILLIS`] as a [`Duration`] since the Unix epoch, for callers doing
/// `std::time` arithmetic.
pub const EPOCH: Duration = Duration::from_millis(EPOCH_MILLIS);

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn epoch_forms_agree() {
        assert_eq!(EPOCH.as_millis(), u128::from(EPOCH_MILLIS));
    }

    #[test]
    fn epoch_is_in_the_past() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch");
        assert!(now > EPOCH);
    }
}
