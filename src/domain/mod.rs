pub mod calendar;
pub mod regions;

pub use calendar::{Countdown, ObservanceCalendar, ObservancePhase, ObservanceProgress};
pub use regions::{DirectoryError, Region, RegionDirectory};
