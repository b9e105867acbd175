use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Converts an RFC 3339 timestamp into Unix epoch seconds.
///
/// Unparsable input yields `0`, the same fallback the gauges use for a
/// connection that has no successful job at all.
pub fn epoch_seconds(input: &str) -> i64 {
    OffsetDateTime::parse(input, &Rfc3339)
        .map(OffsetDateTime::unix_timestamp)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_timestamp() {
        assert_eq!(epoch_seconds("2024-05-01T12:30:00Z"), 1_714_566_600);
    }

    #[test]
    fn offset_timestamp() {
        assert_eq!(epoch_seconds("2024-05-01T14:30:00+02:00"), 1_714_566_600);
    }

    #[test]
    fn malformed_is_zero() {
        assert_eq!(epoch_seconds("yesterday"), 0);
        assert_eq!(epoch_seconds(""), 0);
    }
}
