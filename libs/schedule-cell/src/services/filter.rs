// libs/schedule-cell/src/services/filter.rs
use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use shared_models::AppointmentRecord;

use crate::models::{ProviderKey, ProviderSelection, ProviderSummary};

/// Distinct providers observed in the list, with appointment counts, sorted
/// by display name ascending. Appointments without a provider collect under
/// the unassigned key.
pub fn summarize_providers(records: &[AppointmentRecord]) -> Vec<ProviderSummary> {
    let mut by_key: HashMap<ProviderKey, ProviderSummary> = HashMap::new();

    for record in records {
        let key = ProviderKey::from_record(record);
        let display_name = match &key {
            ProviderKey::Unassigned => "Unassigned".to_string(),
            ProviderKey::Assigned(id) => record
                .provider_name
                .clone()
                .unwrap_or_else(|| id.clone()),
        };
        let entry = by_key.entry(key.clone()).or_insert_with(|| ProviderSummary {
            key,
            display_name,
            count: 0,
        });
        entry.count += 1;
    }

    let mut summaries: Vec<ProviderSummary> = by_key.into_values().collect();
    // Key tie-break keeps the order stable when two ids share a display name.
    summaries.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.key.cmp(&b.key))
    });
    summaries
}

/// Multi-select filter over the providers present in the current appointment
/// list. Filtering is a pure predicate over the selection; the record list is
/// never mutated.
pub struct ProviderFilter {
    selection: ProviderSelection,
}

impl ProviderFilter {
    pub fn new() -> Self {
        Self {
            selection: ProviderSelection::AllProviders,
        }
    }

    pub fn selection(&self) -> &ProviderSelection {
        &self.selection
    }

    /// Show everyone, unconditionally.
    pub fn toggle_all(&mut self) {
        info!("Provider filter reset to all providers");
        self.selection = ProviderSelection::AllProviders;
    }

    /// Flip one provider in or out of the selection. Leaving the
    /// all-providers state drops it; emptying the selection snaps back to it.
    pub fn toggle_provider(&mut self, key: ProviderKey) {
        let mut selected = match &self.selection {
            ProviderSelection::AllProviders => HashSet::new(),
            ProviderSelection::Specific(keys) => keys.clone(),
        };

        if !selected.remove(&key) {
            selected.insert(key);
        }

        self.selection = if selected.is_empty() {
            ProviderSelection::AllProviders
        } else {
            ProviderSelection::Specific(selected)
        };
        debug!("Provider selection now {:?}", self.selection);
    }

    /// Select-all / deselect-all shortcut. When the selection already covers
    /// every known provider, this deselects everything. The resulting empty
    /// set is a deliberate "show nothing" state, kept distinct from
    /// `AllProviders`.
    pub fn toggle_all_providers(&mut self, known: &[ProviderSummary]) {
        let full: HashSet<ProviderKey> = known.iter().map(|p| p.key.clone()).collect();

        let covers_all = match &self.selection {
            ProviderSelection::AllProviders => true,
            ProviderSelection::Specific(keys) => full.iter().all(|k| keys.contains(k)),
        };

        self.selection = if covers_all {
            info!("Deselecting all {} providers", full.len());
            ProviderSelection::Specific(HashSet::new())
        } else {
            info!("Selecting all {} providers", full.len());
            ProviderSelection::Specific(full)
        };
    }

    pub fn is_visible(&self, key: &ProviderKey) -> bool {
        match &self.selection {
            ProviderSelection::AllProviders => true,
            ProviderSelection::Specific(keys) => keys.contains(key),
        }
    }

    /// The subset of records the current selection lets through, in input
    /// order.
    pub fn filter<'a>(&self, records: &'a [AppointmentRecord]) -> Vec<&'a AppointmentRecord> {
        records
            .iter()
            .filter(|record| self.is_visible(&ProviderKey::from_record(record)))
            .collect()
    }
}

impl Default for ProviderFilter {
    fn default() -> Self {
        Self::new()
    }
}
