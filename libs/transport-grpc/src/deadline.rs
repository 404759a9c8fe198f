//! Decoding of the caller's deadline from `grpc-timeout` request metadata.
//!
//! Handlers that simulate long-running work use this to check cooperatively,
//! at fixed checkpoints, whether the caller's deadline has already passed.
//!
//! The header format is `<value><unit>` where unit is one of `n` / `u` /
//! `m` / `S` / `M` / `H` (nanoseconds through hours).

use std::time::{Duration, Instant};

use tonic::metadata::MetadataMap;

/// Compute the caller's absolute deadline from request metadata.
///
/// Returns `None` when the caller supplied no deadline, or the header value
/// is malformed (a malformed value is treated as "no deadline" rather than
/// an error, since the transport has already accepted the request).
pub fn deadline_from_metadata(metadata: &MetadataMap) -> Option<Instant> {
    let raw = metadata.get("grpc-timeout")?.to_str().ok()?;
    decode_timeout(raw).map(|timeout| Instant::now() + timeout)
}

fn decode_timeout(raw: &str) -> Option<Duration> {
    if raw.len() < 2 {
        return None;
    }
    let (value, unit) = raw.split_at(raw.len() - 1);
    let value: u64 = value.parse().ok()?;

    match unit {
        "n" => Some(Duration::from_nanos(value)),
        "u" => Some(Duration::from_micros(value)),
        "m" => Some(Duration::from_millis(value)),
        "S" => Some(Duration::from_secs(value)),
        "M" => value.checked_mul(60).map(Duration::from_secs),
        "H" => value.checked_mul(3600).map(Duration::from_secs),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::metadata::MetadataValue;

    #[test]
    fn decodes_all_units() {
        assert_eq!(decode_timeout("500n"), Some(Duration::from_nanos(500)));
        assert_eq!(decode_timeout("250u"), Some(Duration::from_micros(250)));
        assert_eq!(decode_timeout("100m"), Some(Duration::from_millis(100)));
        assert_eq!(decode_timeout("5S"), Some(Duration::from_secs(5)));
        assert_eq!(decode_timeout("2M"), Some(Duration::from_secs(120)));
        assert_eq!(decode_timeout("1H"), Some(Duration::from_secs(3600)));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(decode_timeout(""), None);
        assert_eq!(decode_timeout("S"), None);
        assert_eq!(decode_timeout("10"), None);
        assert_eq!(decode_timeout("10x"), None);
        assert_eq!(decode_timeout("-5S"), None);
    }

    #[test]
    fn absent_header_means_no_deadline() {
        let metadata = MetadataMap::new();
        assert!(deadline_from_metadata(&metadata).is_none());
    }

    #[test]
    fn present_header_yields_future_deadline() {
        let mut metadata = MetadataMap::new();
        metadata.insert("grpc-timeout", MetadataValue::from_static("5S"));
        let deadline = deadline_from_metadata(&metadata).unwrap();
        assert!(deadline > Instant::now());
    }
}
