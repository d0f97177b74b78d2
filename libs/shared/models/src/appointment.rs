// libs/shared/models/src/appointment.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==============================================================================
// APPOINTMENT WIRE MODELS
// ==============================================================================

/// Patient contact details embedded in an appointment row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// One appointment row as the fetch layer delivers it. Read-only to the
/// schedule core; every optional field degrades to a default downstream
/// rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub appointment_type: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub provider_id: Option<String>,
    pub provider_name: Option<String>,
    pub internal_notes: Option<String>,
    pub instructions: Option<String>,
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    pub patient: Option<Patient>,
}

impl AppointmentRecord {
    /// Scheduled end time, defaulting to the start for rows with no end
    /// (zero-duration event).
    pub fn scheduled_end_time(&self) -> DateTime<Utc> {
        self.end_time.unwrap_or(self.start_time)
    }

    /// "First Last" from the embedded patient. Falls back to
    /// "Unknown Patient" when the row carries no patient or both name
    /// fields are blank.
    pub fn patient_display_name(&self) -> String {
        let full_name = self
            .patient
            .as_ref()
            .map(|p| {
                format!(
                    "{} {}",
                    p.first_name.as_deref().unwrap_or(""),
                    p.last_name.as_deref().unwrap_or("")
                )
                .trim()
                .to_string()
            })
            .unwrap_or_default();

        if full_name.is_empty() {
            "Unknown Patient".to_string()
        } else {
            full_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_row() -> serde_json::Value {
        json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "patient_id": "550e8400-e29b-41d4-a716-446655440001",
            "appointment_type": "Follow-up",
            "start_time": "2025-03-10T15:00:00Z",
            "end_time": "2025-03-10T15:30:00Z",
            "status": "scheduled",
            "provider_name": "Dr. Chen",
            "patient": {
                "id": "550e8400-e29b-41d4-a716-446655440001",
                "first_name": "Jane",
                "last_name": "Doe",
                "email": null,
                "phone": null
            }
        })
    }

    #[test]
    fn deserializes_row_with_missing_optionals() {
        let mut row = base_row();
        let obj = row.as_object_mut().unwrap();
        obj.remove("end_time");
        obj.remove("status");
        obj.remove("patient");

        let record: AppointmentRecord = serde_json::from_value(row).unwrap();
        assert!(record.end_time.is_none());
        assert!(record.status.is_none());
        assert!(!record.is_all_day);
    }

    #[test]
    fn end_time_defaults_to_start() {
        let mut row = base_row();
        row.as_object_mut().unwrap().remove("end_time");

        let record: AppointmentRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.scheduled_end_time(), record.start_time);
    }

    #[test]
    fn patient_display_name_joins_and_trims() {
        let record: AppointmentRecord = serde_json::from_value(base_row()).unwrap();
        assert_eq!(record.patient_display_name(), "Jane Doe");
    }

    #[test]
    fn patient_display_name_falls_back_when_blank() {
        let mut row = base_row();
        row["patient"]["first_name"] = json!(null);
        row["patient"]["last_name"] = json!(null);

        let record: AppointmentRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.patient_display_name(), "Unknown Patient");

        let mut row = base_row();
        row.as_object_mut().unwrap().remove("patient");
        let record: AppointmentRecord = serde_json::from_value(row).unwrap();
        assert_eq!(record.patient_display_name(), "Unknown Patient");
    }
}
