use itertools::Itertools;
use tripmat_omx::MatrixStats;

/// sink for audit diagnostics emitted during demand import. the host
/// platform's logbook is one implementation; tests capture records
/// directly. reporting is never correctness-relevant.
pub trait DemandReporter {
    fn record(&mut self, title: &str, body: &str);
}

/// forwards report blocks to the log facade.
pub struct LogReporter;

impl DemandReporter for LogReporter {
    fn record(&mut self, title: &str, body: &str) {
        log::info!("{title}\n{body}");
    }
}

/// captures report blocks in memory, for tests and embedding.
#[derive(Default)]
pub struct CollectingReporter {
    pub records: Vec<(String, String)>,
}

impl CollectingReporter {
    pub fn new() -> CollectingReporter {
        CollectingReporter::default()
    }
}

impl DemandReporter for CollectingReporter {
    fn record(&mut self, title: &str, body: &str) {
        self.records.push((title.to_string(), body.to_string()));
    }
}

/// formats the demand summary block: the O-D pair count followed by one
/// min/max/mean/sum row per matrix.
pub fn demand_summary(od_pairs: usize, rows: &[(&str, MatrixStats)]) -> String {
    let header = format!(
        "{:<25} {:>9} {:>9} {:>9} {:>13}",
        "name", "min", "max", "mean", "sum"
    );
    let body = rows.iter().map(|(name, stats)| {
        format!(
            "{:<25} {:>9.4} {:>9.4} {:>9.4} {:>13.7}",
            name, stats.min, stats.max, stats.mean, stats.sum
        )
    });
    std::iter::once(format!("Number of O-D pairs: {od_pairs}"))
        .chain(std::iter::once(header))
        .chain(body)
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::demand_summary;
    use tripmat_omx::Matrix;

    #[test]
    fn test_demand_summary_format() {
        let mut m = Matrix::zeros(3);
        m.set(0, 1, 16.0);
        let summary = demand_summary(9, &[("total_ct_ramp_trips", m.stats())]);
        assert!(summary.starts_with("Number of O-D pairs: 9"));
        assert!(summary.contains("total_ct_ramp_trips"));
        assert!(summary.contains("16.0000000"));
    }
}
