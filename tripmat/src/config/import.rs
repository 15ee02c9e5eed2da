use serde::{Deserialize, Serialize};

use crate::model::{DemandError, NumProcessors, ZoneRange};

/// defines behaviors for a demand import run.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct ImportConfiguration {
    /// zone-label range treated as external to the modeled region
    pub external_zones: String,
    /// processor-count hint passed to matrix calculations
    pub num_processors: String,
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self {
            external_zones: String::from("1-12"),
            num_processors: String::from("MAX-1"),
        }
    }
}

impl ImportConfiguration {
    pub fn external_zones(&self) -> Result<ZoneRange, DemandError> {
        self.external_zones.parse()
    }

    pub fn num_processors(&self) -> Result<NumProcessors, DemandError> {
        self.num_processors.parse()
    }
}

impl TryFrom<&String> for ImportConfiguration {
    type Error = DemandError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                DemandError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                DemandError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                DemandError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                DemandError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(DemandError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ImportConfiguration;
    use crate::model::NumProcessors;

    #[test]
    fn test_defaults() {
        let conf = ImportConfiguration::default();
        let range = conf.external_zones().unwrap();
        assert!(range.contains(1));
        assert!(range.contains(12));
        assert!(!range.contains(13));
        assert_eq!(conf.num_processors().unwrap(), NumProcessors::MaxMinus(1));
    }

    #[test]
    fn test_decode_toml() {
        let conf: ImportConfiguration =
            toml::from_str("external_zones = \"1-10\"\nnum_processors = \"4\"").unwrap();
        assert_eq!(conf.external_zones, "1-10");
        assert_eq!(conf.num_processors().unwrap(), NumProcessors::Fixed(4));
    }
}
