// libs/schedule-cell/src/services/controller.rs
use std::collections::HashMap;

use chrono::{DateTime, Duration, Months, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::AppointmentRecord;

use crate::models::{
    CalendarEvent, CalendarView, NavigationAction, ProviderKey, ProviderSelection,
    ProviderSummary, ScheduleError, StatusBucket,
};
use crate::services::filter::{summarize_providers, ProviderFilter};
use crate::services::projection::EventProjector;
use crate::services::stats::ScheduleStats;

/// Rendering surface the controller drives. Either underlying calendar
/// widget can sit behind this; the controller only owns state wiring.
pub trait CalendarSurface {
    fn render(&mut self, events: &[CalendarEvent]);
    fn set_view(&mut self, view: CalendarView);
    fn navigate(&mut self, anchor: DateTime<Utc>);
}

/// Composes projection and provider filtering, and owns the local view
/// state: active granularity and anchor date. One instance per dashboard
/// session; nothing here is shared or persisted.
pub struct CalendarController {
    appointments: Vec<AppointmentRecord>,
    index: HashMap<Uuid, usize>,
    providers: Vec<ProviderSummary>,
    filter: ProviderFilter,
    projector: EventProjector,
    view: CalendarView,
    anchor: DateTime<Utc>,
}

impl CalendarController {
    pub fn new() -> Self {
        Self {
            appointments: Vec::new(),
            index: HashMap::new(),
            providers: Vec::new(),
            filter: ProviderFilter::new(),
            projector: EventProjector::new(),
            view: CalendarView::MonthGrid,
            anchor: Utc::now(),
        }
    }

    /// Replace the appointment list and rebuild everything derived from it:
    /// the id index for reverse lookup and the provider summaries. The
    /// filter selection survives a reload.
    pub fn set_appointments(&mut self, appointments: Vec<AppointmentRecord>) {
        self.index = appointments
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id, i))
            .collect();
        self.providers = summarize_providers(&appointments);
        self.appointments = appointments;
        debug!(
            "Loaded {} appointments across {} providers",
            self.appointments.len(),
            self.providers.len()
        );
    }

    pub fn appointments(&self) -> &[AppointmentRecord] {
        &self.appointments
    }

    pub fn providers(&self) -> &[ProviderSummary] {
        &self.providers
    }

    pub fn selection(&self) -> &ProviderSelection {
        self.filter.selection()
    }

    // ----- provider filtering --------------------------------------------

    pub fn toggle_all(&mut self) {
        self.filter.toggle_all();
    }

    pub fn toggle_provider(&mut self, key: ProviderKey) {
        self.filter.toggle_provider(key);
    }

    pub fn toggle_all_providers(&mut self) {
        self.filter.toggle_all_providers(&self.providers);
    }

    pub fn is_visible(&self, key: &ProviderKey) -> bool {
        self.filter.is_visible(key)
    }

    // ----- derived views -------------------------------------------------

    /// Filter-then-project over the current selection. Provider names are
    /// appended to titles exactly when the list spans more than one
    /// provider.
    pub fn visible_events(&self) -> Vec<CalendarEvent> {
        let multi_provider = self.providers.len() > 1;
        let visible = self.filter.filter(&self.appointments);
        self.projector.project(visible, multi_provider)
    }

    pub fn stats(&self) -> ScheduleStats {
        ScheduleStats::compute(&self.appointments, Utc::now())
    }

    /// Legend entries come from the same bucket palette that colors events,
    /// so the two cannot diverge.
    pub fn legend(&self) -> Vec<(&'static str, &'static str)> {
        StatusBucket::ALL
            .iter()
            .map(|bucket| (bucket.label(), bucket.color()))
            .collect()
    }

    // ----- event selection -----------------------------------------------

    /// Reverse lookup for an event click. A stale id means the appointment
    /// list was refreshed between render and click; that race is expected
    /// and resolves to a no-op.
    pub fn on_event_selected(&self, event_id: Uuid) -> Option<&AppointmentRecord> {
        match self.index.get(&event_id) {
            Some(&i) => self.appointments.get(i),
            None => {
                debug!("Ignoring click on stale event {}", event_id);
                None
            }
        }
    }

    /// Same lookup for callers that want the miss surfaced.
    pub fn detail_for(&self, event_id: Uuid) -> Result<&AppointmentRecord, ScheduleError> {
        self.on_event_selected(event_id)
            .ok_or(ScheduleError::StaleEvent(event_id))
    }

    // ----- view state ----------------------------------------------------

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    pub fn set_view(&mut self, view: CalendarView) {
        info!("Calendar view switched to {}", view);
        self.view = view;
    }

    /// Direct re-anchor, used when the widget reports a date pick.
    pub fn set_anchor(&mut self, anchor: DateTime<Utc>) {
        self.anchor = anchor;
    }

    /// Step the anchor date by the active granularity. Never touches the
    /// appointment list or the provider selection.
    pub fn navigate(&mut self, action: NavigationAction) {
        self.anchor = match action {
            NavigationAction::Today => Utc::now(),
            NavigationAction::Previous => self.stepped_anchor(-1),
            NavigationAction::Next => self.stepped_anchor(1),
        };
        debug!("Calendar anchored to {}", self.anchor);
    }

    fn stepped_anchor(&self, direction: i64) -> DateTime<Utc> {
        match self.view {
            CalendarView::Day => self.anchor + Duration::days(direction),
            CalendarView::Week => self.anchor + Duration::days(7 * direction),
            CalendarView::MonthGrid | CalendarView::MonthAgenda => {
                if direction > 0 {
                    self.anchor + Months::new(1)
                } else {
                    self.anchor - Months::new(1)
                }
            }
        }
    }

    // ----- rendering -----------------------------------------------------

    /// Push the current state to a rendering surface.
    pub fn drive<S: CalendarSurface>(&self, surface: &mut S) {
        surface.set_view(self.view);
        surface.navigate(self.anchor);
        surface.render(&self.visible_events());
    }
}

impl Default for CalendarController {
    fn default() -> Self {
        Self::new()
    }
}
