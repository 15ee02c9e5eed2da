use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::TimePeriod;

/// a travel mode of the traffic assignment. each (period, mode) pair
/// addresses one destination matrix named `<period>_<mode>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssignmentMode {
    /// drive alone, general purpose lanes
    SovGp,
    /// drive alone, toll
    SovToll,
    /// shared ride 2, general purpose lanes
    Hov2Gp,
    /// shared ride 2, HOV lanes
    Hov2Hov,
    /// shared ride 2, toll
    Hov2Toll,
    /// shared ride 3+, general purpose lanes
    Hov3Gp,
    /// shared ride 3+, HOV lanes
    Hov3Hov,
    /// shared ride 3+, toll
    Hov3Toll,
}

impl AssignmentMode {
    /// the eight modes that receive CT-RAMP demand directly, in the order
    /// they are imported.
    pub const CT_RAMP: [AssignmentMode; 8] = [
        AssignmentMode::SovGp,
        AssignmentMode::SovToll,
        AssignmentMode::Hov2Gp,
        AssignmentMode::Hov2Hov,
        AssignmentMode::Hov2Toll,
        AssignmentMode::Hov3Gp,
        AssignmentMode::Hov3Hov,
        AssignmentMode::Hov3Toll,
    ];

    /// mode code as it appears in destination matrix names.
    pub fn code(&self) -> &'static str {
        match self {
            AssignmentMode::SovGp => "SOVGP",
            AssignmentMode::SovToll => "SOVTOLL",
            AssignmentMode::Hov2Gp => "HOV2GP",
            AssignmentMode::Hov2Hov => "HOV2HOV",
            AssignmentMode::Hov2Toll => "HOV2TOLL",
            AssignmentMode::Hov3Gp => "HOV3GP",
            AssignmentMode::Hov3Hov => "HOV3HOV",
            AssignmentMode::Hov3Toll => "HOV3TOLL",
        }
    }

    /// the CT-RAMP table stem for this mode. the two vocabularies come
    /// from different upstream systems: this translation is fixed data,
    /// never derived from the mode names, and must match the upstream
    /// model verbatim.
    pub fn segment_stem(&self) -> &'static str {
        match self {
            AssignmentMode::SovGp => "SOV_GP",
            AssignmentMode::SovToll => "SOV_PAY",
            AssignmentMode::Hov2Gp => "SR2_GP",
            AssignmentMode::Hov2Hov => "SR2_HOV",
            AssignmentMode::Hov2Toll => "SR2_PAY",
            AssignmentMode::Hov3Gp => "SR3_GP",
            AssignmentMode::Hov3Hov => "SR3_HOV",
            AssignmentMode::Hov3Toll => "SR3_PAY",
        }
    }

    /// name of the destination matrix for this mode in a period, e.g.
    /// `AM_SOVGP`.
    pub fn destination_key(&self, period: &TimePeriod) -> String {
        format!("{}_{}", period.code(), self.code())
    }

    /// key of this mode's table inside a period's segment files, e.g.
    /// `SOV_GP_AM`.
    pub fn segment_table_key(&self, period: &TimePeriod) -> String {
        format!("{}_{}", self.segment_stem(), period.code())
    }
}

impl Display for AssignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::AssignmentMode;
    use crate::model::TimePeriod;

    /// the two naming vocabularies come from different upstream systems;
    /// this pins the translation verbatim.
    #[test]
    fn test_segment_table_mapping() {
        let expected = [
            ("SOVGP", "SOV_GP"),
            ("SOVTOLL", "SOV_PAY"),
            ("HOV2GP", "SR2_GP"),
            ("HOV2HOV", "SR2_HOV"),
            ("HOV2TOLL", "SR2_PAY"),
            ("HOV3GP", "SR3_GP"),
            ("HOV3HOV", "SR3_HOV"),
            ("HOV3TOLL", "SR3_PAY"),
        ];
        for (mode, (code, stem)) in AssignmentMode::CT_RAMP.iter().zip(expected.iter()) {
            assert_eq!(mode.code(), *code);
            assert_eq!(mode.segment_stem(), *stem);
        }
    }

    #[test]
    fn test_key_formats() {
        let mode = AssignmentMode::SovGp;
        assert_eq!(mode.destination_key(&TimePeriod::Am), "AM_SOVGP");
        assert_eq!(mode.segment_table_key(&TimePeriod::Am), "SOV_GP_AM");
    }
}
