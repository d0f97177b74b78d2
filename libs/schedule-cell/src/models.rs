// libs/schedule-cell/src/models.rs
use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::AppointmentRecord;

// ==============================================================================
// STATUS BUCKETS AND PALETTE
// ==============================================================================

/// The four canonical status categories events are colored by. Raw statuses
/// from upstream are classified into exactly these; the legend enumerates
/// exactly these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 4] = [
        StatusBucket::Scheduled,
        StatusBucket::Completed,
        StatusBucket::Cancelled,
        StatusBucket::NoShow,
    ];

    /// Total mapping from the raw status string to a bucket. Unknown or
    /// missing statuses land in `Scheduled`.
    pub fn classify(raw: Option<&str>) -> StatusBucket {
        match raw {
            Some("completed") => StatusBucket::Completed,
            Some("cancelled") => StatusBucket::Cancelled,
            Some("no_show") => StatusBucket::NoShow,
            _ => StatusBucket::Scheduled,
        }
    }

    /// Event and legend color for this bucket. Kept separate from
    /// classification so palette changes never touch projection logic.
    pub fn color(&self) -> &'static str {
        match self {
            StatusBucket::Scheduled => "#3b82f6",
            StatusBucket::Completed => "#22c55e",
            StatusBucket::Cancelled => "#ef4444",
            StatusBucket::NoShow => "#f97316",
        }
    }

    /// Completed events render dimmed relative to the rest.
    pub fn opacity(&self) -> f32 {
        match self {
            StatusBucket::Completed => 0.7,
            _ => 0.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusBucket::Scheduled => "Scheduled",
            StatusBucket::Completed => "Completed",
            StatusBucket::Cancelled => "Cancelled",
            StatusBucket::NoShow => "No Show",
        }
    }
}

impl fmt::Display for StatusBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusBucket::Scheduled => write!(f, "scheduled"),
            StatusBucket::Completed => write!(f, "completed"),
            StatusBucket::Cancelled => write!(f, "cancelled"),
            StatusBucket::NoShow => write!(f, "no_show"),
        }
    }
}

// ==============================================================================
// PROVIDER KEYS AND SUMMARIES
// ==============================================================================

/// Identifier for a care provider, with an explicit variant for appointments
/// that have none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKey {
    Unassigned,
    Assigned(String),
}

impl ProviderKey {
    pub fn from_record(record: &AppointmentRecord) -> ProviderKey {
        match record.provider_id.as_deref() {
            Some(id) if !id.is_empty() => ProviderKey::Assigned(id.to_string()),
            _ => ProviderKey::Unassigned,
        }
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKey::Unassigned => write!(f, "unassigned"),
            ProviderKey::Assigned(id) => write!(f, "{}", id),
        }
    }
}

/// One distinct provider observed in the current appointment list. Derived,
/// never stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProviderSummary {
    pub key: ProviderKey,
    pub display_name: String,
    pub count: usize,
}

// ==============================================================================
// SELECTION STATE
// ==============================================================================

/// Which providers the calendar is filtered to. The tagged variant makes
/// "all providers" and concrete keys mutually exclusive by construction.
/// `Specific` with an empty set is a legal "show nothing" state, reachable
/// only through the deselect-all shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSelection {
    AllProviders,
    Specific(HashSet<ProviderKey>),
}

// ==============================================================================
// CALENDAR EVENTS AND VIEW STATE
// ==============================================================================

/// A calendar-ready event projected from one appointment row. `id` equals
/// the source appointment id, which is what makes reverse lookup work.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub bucket: StatusBucket,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// Display granularity of the calendar surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    Day,
    Week,
    MonthGrid,
    MonthAgenda,
}

impl fmt::Display for CalendarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarView::Day => write!(f, "day"),
            CalendarView::Week => write!(f, "week"),
            CalendarView::MonthGrid => write!(f, "month_grid"),
            CalendarView::MonthAgenda => write!(f, "month_agenda"),
        }
    }
}

/// Toolbar navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Previous,
    Next,
    Today,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("No appointment found for event {0}")]
    StaleEvent(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet as StdHashSet;

    #[test]
    fn classify_is_total() {
        for raw in [
            Some("scheduled"),
            Some("completed"),
            Some("cancelled"),
            Some("no_show"),
            Some("weird_value"),
            None,
        ] {
            let bucket = StatusBucket::classify(raw);
            assert!(StatusBucket::ALL.contains(&bucket));
        }
    }

    #[test]
    fn unknown_and_missing_statuses_default_to_scheduled() {
        assert_eq!(StatusBucket::classify(None), StatusBucket::Scheduled);
        assert_eq!(
            StatusBucket::classify(Some("rescheduled")),
            StatusBucket::Scheduled
        );
    }

    #[test]
    fn palette_has_distinct_hues() {
        let colors: StdHashSet<&str> = StatusBucket::ALL.iter().map(|b| b.color()).collect();
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn completed_renders_dimmed() {
        assert!(StatusBucket::Completed.opacity() < StatusBucket::Scheduled.opacity());
    }
}
