mod aggregate_demand;
mod traffic_trips;

pub use aggregate_demand::add_aggregate_demand;
pub use traffic_trips::import_traffic_trips;
