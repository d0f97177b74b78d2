// libs/schedule-cell/src/services/stats.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use shared_models::AppointmentRecord;

use crate::models::StatusBucket;

/// Headline counts shown above the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleStats {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub today: usize,
}

impl ScheduleStats {
    /// Single pass over the list. Status counts go through the same bucket
    /// classification that colors events, so the cards and the calendar
    /// always agree.
    pub fn compute(records: &[AppointmentRecord], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let mut stats = ScheduleStats {
            total: records.len(),
            scheduled: 0,
            completed: 0,
            today: 0,
        };

        for record in records {
            match StatusBucket::classify(record.status.as_deref()) {
                StatusBucket::Scheduled => stats.scheduled += 1,
                StatusBucket::Completed => stats.completed += 1,
                _ => {}
            }
            if record.start_time.date_naive() == today {
                stats.today += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn record(status: Option<&str>, start: DateTime<Utc>) -> AppointmentRecord {
        AppointmentRecord {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            appointment_type: None,
            start_time: start,
            end_time: None,
            status: status.map(str::to_string),
            provider_id: None,
            provider_name: None,
            internal_notes: None,
            instructions: None,
            meeting_link: None,
            is_all_day: false,
            patient: None,
        }
    }

    #[test]
    fn counts_by_bucket_and_day() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let records = vec![
            record(Some("scheduled"), now),
            record(Some("completed"), now - chrono::Duration::days(1)),
            record(Some("cancelled"), now),
            record(None, now - chrono::Duration::days(2)),
        ];

        let stats = ScheduleStats::compute(&records, now);
        assert_eq!(stats.total, 4);
        // The missing status classifies as scheduled.
        assert_eq!(stats.scheduled, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.today, 2);
    }

    #[test]
    fn empty_list_is_all_zero() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let stats = ScheduleStats::compute(&[], now);
        assert_eq!(
            stats,
            ScheduleStats {
                total: 0,
                scheduled: 0,
                completed: 0,
                today: 0
            }
        );
    }
}
