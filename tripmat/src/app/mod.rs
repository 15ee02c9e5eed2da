mod demand_app;

pub use demand_app::{DemandApp, DemandOperation};
