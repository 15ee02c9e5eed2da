pub mod calculator;
pub mod import;
pub mod report;
pub mod store;

mod assignment_mode;
mod demand_error;
mod demand_segment;
mod num_processors;
mod time_period;
mod zone_range;

pub use assignment_mode::AssignmentMode;
pub use demand_error::DemandError;
pub use demand_segment::DemandSegment;
pub use num_processors::NumProcessors;
pub use time_period::TimePeriod;
pub use zone_range::ZoneRange;
