use std::fmt::Display;
use std::str::FromStr;

use super::DemandError;

/// processor-count hint for matrix calculations, written as `"MAX"`,
/// `"MAX-<k>"`, or a literal count. a resolved count of zero or one means
/// sequential evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumProcessors {
    Max,
    MaxMinus(usize),
    Fixed(usize),
}

impl NumProcessors {
    /// resolves the hint against the machine's available parallelism.
    pub fn resolve(&self) -> usize {
        let max = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        match self {
            NumProcessors::Max => max,
            NumProcessors::MaxMinus(k) => max.saturating_sub(*k).max(1),
            NumProcessors::Fixed(n) => *n,
        }
    }
}

impl Default for NumProcessors {
    fn default() -> Self {
        NumProcessors::MaxMinus(1)
    }
}

impl FromStr for NumProcessors {
    type Err = DemandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |msg: String| DemandError::InvalidNumProcessors(s.to_string(), msg);
        let upper = s.trim().to_uppercase();
        if upper == "MAX" {
            return Ok(NumProcessors::Max);
        }
        if let Some(offset) = upper.strip_prefix("MAX-") {
            let k = offset
                .trim()
                .parse::<usize>()
                .map_err(|e| invalid(format!("'{offset}': {e}")))?;
            return Ok(NumProcessors::MaxMinus(k));
        }
        let n = upper
            .parse::<usize>()
            .map_err(|e| invalid(format!("expected MAX, MAX-<k> or a count: {e}")))?;
        Ok(NumProcessors::Fixed(n))
    }
}

impl Display for NumProcessors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumProcessors::Max => write!(f, "MAX"),
            NumProcessors::MaxMinus(k) => write!(f, "MAX-{k}"),
            NumProcessors::Fixed(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumProcessors;

    #[test]
    fn test_parse() {
        assert_eq!("MAX".parse::<NumProcessors>().unwrap(), NumProcessors::Max);
        assert_eq!(
            "max-1".parse::<NumProcessors>().unwrap(),
            NumProcessors::MaxMinus(1)
        );
        assert_eq!(
            "4".parse::<NumProcessors>().unwrap(),
            NumProcessors::Fixed(4)
        );
        assert!("MAX+1".parse::<NumProcessors>().is_err());
        assert!("".parse::<NumProcessors>().is_err());
    }

    #[test]
    fn test_resolve_never_exceeds_bounds() {
        assert!(NumProcessors::Max.resolve() >= 1);
        assert!(NumProcessors::MaxMinus(10_000).resolve() >= 1);
        assert_eq!(NumProcessors::Fixed(0).resolve(), 0);
    }
}
