pub mod models;
pub mod services;

pub use models::*;
pub use services::controller::{CalendarController, CalendarSurface};
pub use services::filter::{summarize_providers, ProviderFilter};
pub use services::projection::EventProjector;
pub use services::stats::ScheduleStats;
