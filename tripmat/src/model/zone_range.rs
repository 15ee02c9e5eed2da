use std::fmt::Display;
use std::str::FromStr;

use itertools::Itertools;

use super::DemandError;

/// a zone-label range expression, e.g. `"1-12"` or `"1-12,15"`. labels
/// refer to zone numbers as published by the scenario, not positional
/// indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRange {
    pieces: Vec<(u32, u32)>,
}

impl ZoneRange {
    pub fn contains(&self, zone_number: u32) -> bool {
        self.pieces
            .iter()
            .any(|(lo, hi)| *lo <= zone_number && zone_number <= *hi)
    }

    /// positional indices of the zones in `zone_numbers` whose labels fall
    /// inside this range. zones named by the range but absent from the
    /// scenario are ignored.
    pub fn indices(&self, zone_numbers: &[u32]) -> Vec<usize> {
        zone_numbers
            .iter()
            .enumerate()
            .filter(|(_, z)| self.contains(**z))
            .map(|(i, _)| i)
            .collect()
    }
}

impl FromStr for ZoneRange {
    type Err = DemandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |msg: String| DemandError::InvalidZoneRange(s.to_string(), msg);
        let mut pieces = vec![];
        for piece in s.split(',') {
            let piece = piece.trim();
            if piece.is_empty() {
                return Err(invalid(String::from("empty range piece")));
            }
            let (lo, hi) = match piece.split_once('-') {
                None => {
                    let z = piece
                        .parse::<u32>()
                        .map_err(|e| invalid(format!("'{piece}': {e}")))?;
                    (z, z)
                }
                Some((lo, hi)) => {
                    let lo = lo
                        .trim()
                        .parse::<u32>()
                        .map_err(|e| invalid(format!("'{piece}': {e}")))?;
                    let hi = hi
                        .trim()
                        .parse::<u32>()
                        .map_err(|e| invalid(format!("'{piece}': {e}")))?;
                    (lo, hi)
                }
            };
            if hi < lo {
                return Err(invalid(format!("'{piece}' is descending")));
            }
            pieces.push((lo, hi));
        }
        Ok(ZoneRange { pieces })
    }
}

impl Display for ZoneRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let out = self
            .pieces
            .iter()
            .map(|(lo, hi)| {
                if lo == hi {
                    format!("{lo}")
                } else {
                    format!("{lo}-{hi}")
                }
            })
            .join(",");
        write!(f, "{out}")
    }
}

#[cfg(test)]
mod tests {
    use super::ZoneRange;

    #[test]
    fn test_parse_simple_range() {
        let range: ZoneRange = "1-12".parse().unwrap();
        assert!(range.contains(1));
        assert!(range.contains(12));
        assert!(!range.contains(13));
    }

    #[test]
    fn test_parse_compound_range() {
        let range: ZoneRange = "1-4, 7, 9-10".parse().unwrap();
        assert!(range.contains(3));
        assert!(range.contains(7));
        assert!(range.contains(9));
        assert!(!range.contains(5));
        assert_eq!(range.to_string(), "1-4,7,9-10");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<ZoneRange>().is_err());
        assert!("a-b".parse::<ZoneRange>().is_err());
        assert!("12-1".parse::<ZoneRange>().is_err());
    }

    #[test]
    fn test_indices_use_zone_labels() {
        let range: ZoneRange = "100-101".parse().unwrap();
        let zone_numbers = [99, 100, 101, 102];
        assert_eq!(range.indices(&zone_numbers), vec![1, 2]);
    }
}
