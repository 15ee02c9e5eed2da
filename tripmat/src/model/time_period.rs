use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the five fixed time-of-day assignment periods, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimePeriod {
    /// early AM
    Ea,
    /// AM peak
    Am,
    /// midday
    Md,
    /// PM peak
    Pm,
    /// evening
    Ev,
}

impl TimePeriod {
    pub const ALL: [TimePeriod; 5] = [
        TimePeriod::Ea,
        TimePeriod::Am,
        TimePeriod::Md,
        TimePeriod::Pm,
        TimePeriod::Ev,
    ];

    /// period code as it appears in matrix and file names.
    pub fn code(&self) -> &'static str {
        match self {
            TimePeriod::Ea => "EA",
            TimePeriod::Am => "AM",
            TimePeriod::Md => "MD",
            TimePeriod::Pm => "PM",
            TimePeriod::Ev => "EV",
        }
    }
}

impl Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::TimePeriod;

    #[test]
    fn test_period_order() {
        let codes: Vec<&str> = TimePeriod::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["EA", "AM", "MD", "PM", "EV"]);
    }
}
