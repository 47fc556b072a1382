//! Time-limited special offers.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::OfferId;

/// A promotion with an end date, shown with a countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialOffer {
    pub id: OfferId,
    pub title: String,
    pub description: String,
    pub discount_percent: u8,
    pub code: Option<String>,
    pub ends_at: DateTime<Utc>,
}

impl SpecialOffer {
    pub fn new(id: &str, title: &str, description: &str, discount_percent: u8, ends_at: DateTime<Utc>) -> Self {
        Self {
            id: OfferId::new(id),
            title: title.to_string(),
            description: description.to_string(),
            discount_percent: discount_percent.min(100),
            code: None,
            ends_at,
        }
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        now < self.ends_at
    }

    /// Time left until the offer ends; all zeros once it has ended.
    pub fn remaining(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::from_duration(self.ends_at - now)
    }
}

/// A countdown split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn from_duration(d: Duration) -> Self {
        let total = d.num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Countdown::default()
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Offers shown on the home page, ending relative to `now`.
pub fn default_offers(now: DateTime<Utc>) -> Vec<SpecialOffer> {
    vec![
        SpecialOffer::new(
            "weekend-deal",
            "Weekend Deal",
            "Extra savings on all audio gear",
            30,
            now + Duration::days(2) + Duration::hours(5),
        )
        .with_code("WEEKEND30"),
        SpecialOffer::new(
            "flash-sale",
            "Flash Sale",
            "Wearables at their lowest price this year",
            20,
            now + Duration::hours(6),
        ),
    ]
}
