//! Expiry classification.

use chrono::NaiveDate;

use super::types::ExpiryStatus;

/// Classifies a lot's expiry relative to `today`.
///
/// No date means the lot is not expiry-tracked. A date in the past is
/// expired; a date within `horizon_days` (inclusive) is expiring soon;
/// anything later is valid.
#[must_use]
pub fn classify_expiry(
    expiry_date: Option<NaiveDate>,
    today: NaiveDate,
    horizon_days: i64,
) -> ExpiryStatus {
    let Some(expiry) = expiry_date else {
        return ExpiryStatus::NotTracked;
    };

    if expiry < today {
        return ExpiryStatus::Expired;
    }

    let days_remaining = (expiry - today).num_days();
    if days_remaining <= horizon_days {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(Some((2025, 5, 1)), ExpiryStatus::Expired)]
    #[case(Some((2025, 6, 15)), ExpiryStatus::ExpiringSoon)]
    #[case(Some((2025, 12, 1)), ExpiryStatus::Valid)]
    #[case(None, ExpiryStatus::NotTracked)]
    fn test_classification(
        #[case] expiry: Option<(i32, u32, u32)>,
        #[case] expected: ExpiryStatus,
    ) {
        let today = date(2025, 6, 1);
        let expiry = expiry.map(|(y, m, d)| date(y, m, d));
        assert_eq!(classify_expiry(expiry, today, 30), expected);
    }

    #[test]
    fn test_expiring_today_is_expiring_soon() {
        let today = date(2025, 6, 1);
        assert_eq!(
            classify_expiry(Some(today), today, 30),
            ExpiryStatus::ExpiringSoon
        );
    }

    #[test]
    fn test_horizon_boundary() {
        let today = date(2025, 6, 1);
        // Exactly 30 days out is still expiring soon.
        assert_eq!(
            classify_expiry(Some(date(2025, 7, 1)), today, 30),
            ExpiryStatus::ExpiringSoon
        );
        // 31 days out is valid.
        assert_eq!(
            classify_expiry(Some(date(2025, 7, 2)), today, 30),
            ExpiryStatus::Valid
        );
    }

    #[test]
    fn test_yesterday_is_expired() {
        let today = date(2025, 6, 1);
        assert_eq!(
            classify_expiry(Some(date(2025, 5, 31)), today, 30),
            ExpiryStatus::Expired
        );
    }
}
