//! Rating domain model.
//!
//! Ratings belong to a recipe and are only ever created by this client, never
//! edited or deleted.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Lowest accepted star score.
pub const MIN_SCORE: u8 = 1;

/// Highest accepted star score.
pub const MAX_SCORE: u8 = 5;

/// A stored rating as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub user_name: String,
    pub score: u8,
    #[serde(default)]
    pub comment: Option<String>,
    /// Server timestamp, kept verbatim.
    pub created_at: String,
}

impl Rating {
    /// Returns the creation time rendered in local time.
    ///
    /// Accepts RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS[.f]`
    /// timestamps (treated as UTC). Anything else is returned unchanged.
    #[must_use]
    pub fn created_at_display(&self) -> String {
        let parsed = DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
                    .or_else(|_| NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%d %H:%M:%S%.f"))
                    .map(|naive| Utc.from_utc_datetime(&naive))
            });

        parsed.map_or_else(
            |_| self.created_at.clone(),
            |utc| {
                utc.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
            },
        )
    }

    /// Five-character star strip, filled up to the score.
    #[must_use]
    pub fn stars(&self) -> String {
        stars(self.score)
    }
}

/// Renders a score as filled and empty stars, e.g. `★★★☆☆`.
#[must_use]
pub fn stars(score: u8) -> String {
    (MIN_SCORE..=MAX_SCORE)
        .map(|i| if i <= score { '★' } else { '☆' })
        .collect()
}

/// Body of `POST /recipes/{id}/ratings`.
///
/// `comment` serializes as `null` when absent; an empty string is never sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRating {
    pub user_name: String,
    pub score: u8,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(created_at: &str) -> Rating {
        Rating {
            id: 1,
            user_name: "ana".to_string(),
            score: 4,
            comment: None,
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn unparseable_timestamp_is_shown_verbatim() {
        assert_eq!(rating("yesterday").created_at_display(), "yesterday");
    }

    #[test]
    fn parseable_timestamps_are_reformatted() {
        let rfc = rating("2024-05-01T10:30:00Z").created_at_display();
        assert_ne!(rfc, "2024-05-01T10:30:00Z");
        assert_eq!(rfc.len(), "2024-05-01 10:30".len());

        let naive = rating("2024-05-01T10:30:00.123456").created_at_display();
        assert_eq!(naive.len(), "2024-05-01 10:30".len());
    }

    #[test]
    fn stars_fill_up_to_score() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(rating("x").stars(), "★★★★☆");
    }

    #[test]
    fn absent_comment_serializes_as_null() {
        let body = serde_json::to_value(NewRating {
            user_name: "ana".to_string(),
            score: 5,
            comment: None,
        })
        .unwrap();
        assert_eq!(body["comment"], serde_json::Value::Null);
    }
}
