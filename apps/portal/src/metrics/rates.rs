use crate::metrics::percentage::{percentage, Percentage};

/// Applications each user is expected to submit in a healthy period.
pub const EXPECTED_APPLICATIONS_PER_USER: u32 = 3;

/// Applications relative to the expected volume for `users`.
/// Zero users gives `Undefined`.
pub fn engagement_rate(applications: u32, users: u32) -> Percentage {
    let expected = u64::from(users) * u64::from(EXPECTED_APPLICATIONS_PER_USER);
    percentage(f64::from(applications), expected as f64)
}

/// Share of event capacity taken by registrations.
pub fn registration_rate(registrations: u32, max_attendees: u32) -> Percentage {
    percentage(f64::from(registrations), f64::from(max_attendees))
}

/// Whole-percent fill label ("78%"), rounded once from the raw ratio.
/// `None` when the event has no capacity.
pub fn registration_percent(registrations: u32, max_attendees: u32) -> Option<i64> {
    if max_attendees == 0 {
        return None;
    }
    Some((f64::from(registrations) / f64::from(max_attendees) * 100.0).round() as i64)
}

/// Bar length for `value` against the largest value in its series, capped at 100.
pub fn share_of(value: u32, series_max: u32) -> Percentage {
    match percentage(f64::from(value), f64::from(series_max)) {
        Percentage::Defined(v) => Percentage::Defined(v.min(100.0)),
        Percentage::Undefined => Percentage::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engagement_rate_matches_dashboard_formula() {
        // 89 / (45 * 3) * 100 = 65.925...
        assert_eq!(engagement_rate(89, 45), Percentage::Defined(65.9));
        assert_eq!(engagement_rate(145, 64), Percentage::Defined(75.5));
    }

    #[test]
    fn test_engagement_rate_with_no_users_or_applications() {
        let rate = engagement_rate(0, 0);
        assert_eq!(rate, Percentage::Undefined);
        assert_eq!(rate.value_or_zero(), 0.0);
        assert_eq!(engagement_rate(10, 0), Percentage::Undefined);
        assert_eq!(engagement_rate(0, 5), Percentage::Defined(0.0));
    }

    #[test]
    fn test_registration_rate() {
        assert_eq!(registration_rate(45, 50), Percentage::Defined(90.0));
        assert_eq!(registration_rate(12, 0), Percentage::Undefined);
    }

    #[test]
    fn test_registration_percent_rounds_raw_ratio() {
        assert_eq!(registration_percent(156, 200), Some(78));
        // 44.49% stays 44 rather than passing through 44.5.
        assert_eq!(registration_percent(4449, 10000), Some(44));
        assert_eq!(registration_percent(4450, 10000), Some(45));
        assert_eq!(registration_percent(3, 0), None);
    }

    #[test]
    fn test_share_of_is_capped() {
        assert_eq!(share_of(35, 70), Percentage::Defined(50.0));
        assert_eq!(share_of(80, 70), Percentage::Defined(100.0));
        assert_eq!(share_of(0, 0), Percentage::Undefined);
    }
}
