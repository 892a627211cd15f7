//! Display status derived from the two order flags.
//!
//! The status is recomputed on every read and never stored; presentation
//! collaborators consume the color/icon tags as-is.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Pending,
    Confirmed,
    Completed,
}

/// Derived presentation status of an order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedStatus {
    pub kind: StatusKind,
    pub color_tag: &'static str,
    pub icon_tag: &'static str,
}

impl DerivedStatus {
    /// Resolves the display status from the `confirmed`/`completed` flags.
    ///
    /// Precedence: `completed` wins over `confirmed`, everything else is
    /// pending. Total over all flag combinations.
    pub fn resolve(confirmed: bool, completed: bool) -> Self {
        if completed {
            Self {
                kind: StatusKind::Completed,
                color_tag: "green",
                icon_tag: "check-circle",
            }
        } else if confirmed {
            Self {
                kind: StatusKind::Confirmed,
                color_tag: "blue",
                icon_tag: "clock",
            }
        } else {
            Self {
                kind: StatusKind::Pending,
                color_tag: "yellow",
                icon_tag: "alert-circle",
            }
        }
    }
}

impl Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusKind::Pending => write!(f, "pending"),
            StatusKind::Confirmed => write!(f, "confirmed"),
            StatusKind::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_takes_precedence_over_confirmed() {
        for confirmed in [false, true] {
            let status = DerivedStatus::resolve(confirmed, true);
            assert_eq!(status.kind, StatusKind::Completed);
            assert_eq!(status.color_tag, "green");
            assert_eq!(status.icon_tag, "check-circle");
        }
    }

    #[test]
    fn confirmed_without_completed_is_confirmed() {
        let status = DerivedStatus::resolve(true, false);
        assert_eq!(status.kind, StatusKind::Confirmed);
        assert_eq!(status.color_tag, "blue");
        assert_eq!(status.icon_tag, "clock");
    }

    #[test]
    fn neither_flag_is_pending() {
        let status = DerivedStatus::resolve(false, false);
        assert_eq!(status.kind, StatusKind::Pending);
        assert_eq!(status.color_tag, "yellow");
        assert_eq!(status.icon_tag, "alert-circle");
    }

    #[test]
    fn status_serializes_with_lowercase_kind() {
        let value = serde_json::to_value(DerivedStatus::resolve(false, true)).unwrap();
        assert_eq!(value["kind"], "completed");
        assert_eq!(value["color_tag"], "green");
    }
}
