// libs/schedule-cell/src/services/projection.rs
use tracing::debug;

use shared_models::AppointmentRecord;

use crate::models::{CalendarEvent, StatusBucket};

/// Pure projection from appointment rows to calendar-ready events.
pub struct EventProjector;

impl EventProjector {
    pub fn new() -> Self {
        Self
    }

    /// Order-preserving map over the input. Never fails: missing optional
    /// fields degrade to defaults instead of erroring. Does not reorder and
    /// does not touch the source records.
    ///
    /// `multi_provider` appends the provider name to titles so events stay
    /// distinguishable when the view spans several providers.
    pub fn project<'a, I>(&self, records: I, multi_provider: bool) -> Vec<CalendarEvent>
    where
        I: IntoIterator<Item = &'a AppointmentRecord>,
    {
        let events: Vec<CalendarEvent> = records
            .into_iter()
            .map(|record| self.project_one(record, multi_provider))
            .collect();
        debug!("Projected {} appointments into calendar events", events.len());
        events
    }

    pub fn project_one(&self, record: &AppointmentRecord, multi_provider: bool) -> CalendarEvent {
        let appointment_type = record.appointment_type.as_deref().unwrap_or("Appointment");
        let mut title = format!("{} - {}", record.patient_display_name(), appointment_type);

        if multi_provider {
            if let Some(provider) = record.provider_name.as_deref() {
                title.push_str(&format!(" ({})", provider));
            }
        }

        CalendarEvent {
            id: record.id,
            title,
            start: record.start_time,
            end: record.scheduled_end_time(),
            bucket: StatusBucket::classify(record.status.as_deref()),
            description: record.internal_notes.clone(),
            // The meeting link doubles as the event location; fall back to
            // the free-form instructions like the detail view does.
            location: record
                .meeting_link
                .clone()
                .or_else(|| record.instructions.clone()),
        }
    }
}

impl Default for EventProjector {
    fn default() -> Self {
        Self::new()
    }
}
