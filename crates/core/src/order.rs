//! Merch order identifier and timestamp derivation.
//!
//! Orders are not persisted in the primary database; the ID generated here
//! is their only correlation key across the spreadsheet row, the uploaded
//! payment slip, and the notification emails. The 4-digit suffix is random
//! with no collision check (no order ledger exists to check against), so
//! uniqueness is probabilistic.

use chrono::{DateTime, FixedOffset, Utc};
use rand::Rng;

/// Fixed organization prefix for order IDs.
pub const ORDER_ID_PREFIX: &str = "YPSL-ORD";

/// The organization's home timezone (Asia/Colombo, UTC+05:30, no DST).
pub fn colombo_offset() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("+05:30 is a valid offset")
}

/// Build an order ID from an explicit submission instant and suffix.
///
/// Format: `YPSL-ORD-YYYYMMDD-NNNN`, date digits in UTC with no inner
/// separators.
pub fn order_id_at(now: DateTime<Utc>, suffix: u16) -> String {
    format!("{}-{}-{:04}", ORDER_ID_PREFIX, now.format("%Y%m%d"), suffix)
}

/// Generate a fresh order ID for the current instant with a random
/// 4-digit suffix in `1000..=9999`.
pub fn new_order_id() -> String {
    let suffix = rand::rng().random_range(1000..=9999);
    order_id_at(Utc::now(), suffix)
}

/// Human-readable submission timestamp localized to Asia/Colombo, e.g.
/// `8/29/2026, 5:42:10 PM`. Recorded verbatim in the spreadsheet row.
pub fn order_timestamp_at(now: DateTime<Utc>) -> String {
    now.with_timezone(&colombo_offset())
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// [`order_timestamp_at`] for the current instant.
pub fn order_timestamp() -> String {
    order_timestamp_at(Utc::now())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_order_id_format() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap();
        assert_eq!(order_id_at(now, 1234), "YPSL-ORD-20260829-1234");
        // Suffix is zero-padded to four digits if ever below 1000.
        assert_eq!(order_id_at(now, 42), "YPSL-ORD-20260829-0042");
    }

    #[test]
    fn test_generated_id_matches_pattern() {
        let id = new_order_id();
        let re = regex::Regex::new(r"^YPSL-ORD-\d{8}-\d{4}$").unwrap();
        assert!(re.is_match(&id), "unexpected order id: {id}");

        let date = &id[9..17];
        assert_eq!(date, Utc::now().format("%Y%m%d").to_string());
    }

    #[test]
    fn test_timestamp_is_colombo_local() {
        // 2026-01-05 20:00 UTC is 2026-01-06 01:30 in Colombo.
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 20, 0, 0).unwrap();
        assert_eq!(order_timestamp_at(now), "1/6/2026, 1:30:00 AM");

        let noon = Utc.with_ymd_and_hms(2026, 6, 15, 6, 30, 0).unwrap();
        assert_eq!(order_timestamp_at(noon), "6/15/2026, 12:00:00 PM");
    }

    #[test]
    fn test_same_tick_ids_differ_in_suffix_with_high_probability() {
        // 64 draws from a 9000-value space collide with probability well
        // under 1; seeing every draw identical would indicate a broken RNG.
        let ids: std::collections::HashSet<String> =
            (0..64).map(|_| new_order_id()).collect();
        assert!(ids.len() > 1);
    }
}
