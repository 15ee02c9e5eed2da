use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::TimePeriod;

/// the five CT-RAMP auto demand sources, each delivered as one
/// matrix-exchange file per time period (25 files per run).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandSegment {
    /// resident person trips
    Person,
    /// internal-external trips
    InternalExternal,
    /// visitor trips
    Visitor,
    /// cross-border trips
    CrossBorder,
    /// airport access trips
    Airport,
}

impl DemandSegment {
    pub const ALL: [DemandSegment; 5] = [
        DemandSegment::Person,
        DemandSegment::InternalExternal,
        DemandSegment::Visitor,
        DemandSegment::CrossBorder,
        DemandSegment::Airport,
    ];

    /// file-name stem for this segment's per-period matrix files.
    pub fn file_stem(&self) -> &'static str {
        match self {
            DemandSegment::Person => "autoTrips",
            DemandSegment::InternalExternal => "autoInternalExternalTrips",
            DemandSegment::Visitor => "autoVisitorTrips",
            DemandSegment::CrossBorder => "autoCrossBorderTrips",
            DemandSegment::Airport => "autoAirportTrips",
        }
    }

    /// file name of this segment's matrices for one period, e.g.
    /// `autoTrips_AM.omx`.
    pub fn file_name(&self, period: &TimePeriod) -> String {
        format!("{}_{}.omx", self.file_stem(), period.code())
    }

    /// row label used in the demand summary report.
    pub fn report_label(&self) -> &'static str {
        match self {
            DemandSegment::Person => "person_demand",
            DemandSegment::InternalExternal => "internal_external_demand",
            DemandSegment::Visitor => "visitor_demand",
            DemandSegment::CrossBorder => "cross_border_demand",
            DemandSegment::Airport => "airport_demand",
        }
    }
}

impl Display for DemandSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.report_label())
    }
}

#[cfg(test)]
mod tests {
    use super::DemandSegment;
    use crate::model::TimePeriod;

    #[test]
    fn test_file_names() {
        assert_eq!(
            DemandSegment::Person.file_name(&TimePeriod::Am),
            "autoTrips_AM.omx"
        );
        assert_eq!(
            DemandSegment::CrossBorder.file_name(&TimePeriod::Ev),
            "autoCrossBorderTrips_EV.omx"
        );
    }
}
