//! Object key and public URL construction.

use chrono::{DateTime, Utc};

/// Object key for an image stored at `now`: `YYYYMMDDHHMMSS.png`.
///
/// Keys have second granularity, so two uploads in the same second share a key.
#[must_use]
pub fn object_key(now: DateTime<Utc>) -> String {
    format!("{}.png", now.format("%Y%m%d%H%M%S"))
}

/// Virtual-hosted-style public URL of an object.
#[must_use]
pub fn public_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn key_has_second_precision() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(object_key(now), "20240101120000.png");
    }

    #[test]
    fn key_zero_pads_fields() {
        let now = Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(object_key(now), "20250304050607.png");
    }

    #[test]
    fn key_shape_for_current_time() {
        let key = object_key(Utc::now());
        assert_eq!(key.len(), 18);
        assert!(key.ends_with(".png"));
        assert!(key[..14].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn url_from_bucket_and_region() {
        assert_eq!(
            public_url("mybucket", "us-east-1", "20240101120000.png"),
            "https://mybucket.s3.us-east-1.amazonaws.com/20240101120000.png"
        );
    }
}
