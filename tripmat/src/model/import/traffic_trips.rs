use std::collections::HashMap;
use std::path::Path;

use tripmat_omx::{Matrix, MatrixArchive};

use crate::model::report::{demand_summary, DemandReporter};
use crate::model::store::MatrixStore;
use crate::model::{AssignmentMode, DemandError, DemandSegment, TimePeriod};

/// imports the CT-RAMP trip tables and replaces the time-of-day total
/// demand matrices in the scenario store.
///
/// expects 25 matrix-exchange files under `output_dir`: one per demand
/// segment and time period, named `<segment-stem>_<period>.omx`. every
/// file is opened before anything is written, so a missing or malformed
/// input fails the whole operation with no destination touched. for each
/// (period, mode) pair the five segment tables are summed elementwise and
/// the result replaces the `<period>_<mode>` matrix; a summary statistics
/// block per destination goes to the reporter.
///
/// re-running with identical inputs rewrites identical totals: this
/// operation replaces, it never accumulates.
pub fn import_traffic_trips<S: MatrixStore, R: DemandReporter>(
    output_dir: &Path,
    store: &mut S,
    reporter: &mut R,
) -> Result<(), DemandError> {
    let zones = store.zone_numbers().len();
    // open every segment file up front; handles are owned here and are
    // released on every exit path when the map drops.
    let mut segment_files: HashMap<(DemandSegment, TimePeriod), MatrixArchive> = HashMap::new();
    for segment in DemandSegment::ALL {
        for period in TimePeriod::ALL {
            let path = output_dir.join(segment.file_name(&period));
            let archive = MatrixArchive::open(&path)?;
            if archive.zone_count() != zones {
                return Err(DemandError::ShapeMismatch(format!(
                    "segment file {:?} has {} zones, scenario has {}",
                    path,
                    archive.zone_count(),
                    zones
                )));
            }
            segment_files.insert((segment, period), archive);
        }
    }

    for period in TimePeriod::ALL {
        log::info!("importing CT-RAMP traffic trips for period {period}");
        for mode in AssignmentMode::CT_RAMP {
            let table_key = mode.segment_table_key(&period);
            let mut total = Matrix::zeros(zones);
            let mut stats_rows = Vec::with_capacity(DemandSegment::ALL.len() + 1);
            for segment in DemandSegment::ALL {
                let archive = segment_files
                    .get_mut(&(segment, period))
                    .ok_or_else(|| {
                        DemandError::InternalError(format!(
                            "segment file for ({segment}, {period}) not opened"
                        ))
                    })?;
                let demand = archive.read(&table_key)?;
                total.add_assign(&demand)?;
                stats_rows.push((segment.report_label(), demand.stats()));
            }
            stats_rows.push(("total_ct_ramp_trips", total.stats()));

            let destination = mode.destination_key(&period);
            reporter.record(
                &format!("Traffic demand summary {destination}"),
                &demand_summary(zones * zones, &stats_rows),
            );
            store.set(&destination, total)?;
        }
    }
    Ok(())
}
