//! ISO 8601 time-duration parsing (`PT1H27M37S` and friends).

/// Converts a composite duration of the form `PT[<H>H][<M>M][<S>S]` into
/// total whole seconds.
///
/// Any subset of the hour/minute/second groups may be present; missing
/// groups count as zero. Malformed input yields `0` rather than an error,
/// matching the lenient handling of optional job fields everywhere else.
pub fn parse_seconds(input: &str) -> u64 {
    let Some(rest) = input.trim().strip_prefix("PT") else {
        return 0;
    };

    let mut total: u64 = 0;
    let mut value: u64 = 0;
    let mut has_digits = false;
    for ch in rest.chars() {
        match ch {
            '0'..='9' => {
                value = value
                    .saturating_mul(10)
                    .saturating_add(u64::from(ch as u8 - b'0'));
                has_digits = true;
            }
            'H' if has_digits => {
                total = total.saturating_add(value.saturating_mul(3600));
                value = 0;
                has_digits = false;
            }
            'M' if has_digits => {
                total = total.saturating_add(value.saturating_mul(60));
                value = 0;
                has_digits = false;
            }
            'S' if has_digits => {
                total = total.saturating_add(value);
                value = 0;
                has_digits = false;
            }
            _ => return 0,
        }
    }
    total
}
