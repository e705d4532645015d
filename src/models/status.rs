//! Expiry status bands
//!
//! The date-based check uses two fixed thresholds on the number of days left
//! until the printed expiry date:
//!
//! | days remaining | status      |
//! |----------------|-------------|
//! | `<= 0`         | Expired     |
//! | `1..=3`        | Expire Soon |
//! | `> 3`          | Safe        |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// At or below this many days remaining an ingredient is expired
pub const EXPIRED_AT_OR_BELOW_DAYS: i64 = 0;

/// At or below this many days remaining an ingredient expires soon
pub const EXPIRE_SOON_WITHIN_DAYS: i64 = 3;

/// Freshness of an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpiryStatus {
    Safe,
    #[serde(rename = "Expire Soon")]
    ExpireSoon,
    Expired,
}

impl ExpiryStatus {
    pub const ALL: [ExpiryStatus; 3] = [Self::Safe, Self::ExpireSoon, Self::Expired];

    /// Status for a number of days remaining until expiry
    pub fn from_days_remaining(days_remaining: i64) -> Self {
        if days_remaining <= EXPIRED_AT_OR_BELOW_DAYS {
            Self::Expired
        } else if days_remaining <= EXPIRE_SOON_WITHIN_DAYS {
            Self::ExpireSoon
        } else {
            Self::Safe
        }
    }

    /// Parse a status label as written in the training table
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "safe" => Some(Self::Safe),
            "expire soon" | "expire_soon" | "expiresoon" => Some(Self::ExpireSoon),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "Safe"),
            Self::ExpireSoon => write!(f, "Expire Soon"),
            Self::Expired => write!(f, "Expired"),
        }
    }
}

/// Date-based expiry status of an item expiring on `expiry_date`, seen on `today`
pub fn status_for(today: NaiveDate, expiry_date: NaiveDate) -> ExpiryStatus {
    ExpiryStatus::from_days_remaining((expiry_date - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(ExpiryStatus::from_days_remaining(-1), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_days_remaining(0), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::from_days_remaining(1), ExpiryStatus::ExpireSoon);
        assert_eq!(ExpiryStatus::from_days_remaining(3), ExpiryStatus::ExpireSoon);
        assert_eq!(ExpiryStatus::from_days_remaining(4), ExpiryStatus::Safe);
        assert_eq!(ExpiryStatus::from_days_remaining(10), ExpiryStatus::Safe);
    }

    #[test]
    fn test_status_for_dates() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        assert_eq!(status_for(today, today + Duration::days(7)), ExpiryStatus::Safe);
        assert_eq!(status_for(today, today), ExpiryStatus::Expired);
        assert_eq!(
            status_for(today, today + Duration::days(2)),
            ExpiryStatus::ExpireSoon
        );
    }

    #[test]
    fn test_label_round_trip() {
        for status in ExpiryStatus::ALL {
            assert_eq!(ExpiryStatus::parse(&status.to_string()), Some(status));
        }
        assert_eq!(ExpiryStatus::parse("rotten"), None);
    }
}
