use crate::model::calculator::{MatrixCalculator, ZoneConstraint};
use crate::model::store::MatrixStore;
use crate::model::{AssignmentMode, DemandError, NumProcessors, TimePeriod, ZoneRange};

/// destination modes receiving external-internal demand.
const EI_MODES: [AssignmentMode; 6] = [
    AssignmentMode::SovGp,
    AssignmentMode::SovToll,
    AssignmentMode::Hov2Hov,
    AssignmentMode::Hov2Toll,
    AssignmentMode::Hov3Hov,
    AssignmentMode::Hov3Toll,
];

/// destination modes receiving external-external demand.
const EE_MODES: [AssignmentMode; 3] = [
    AssignmentMode::SovGp,
    AssignmentMode::Hov2Hov,
    AssignmentMode::Hov3Hov,
];

/// adds the aggregate-model demand to the time-of-day totals already in
/// the store, in three passes: commercial vehicle, external-internal, and
/// external-external trips.
///
/// the passes are cumulative additions: running this operation twice
/// double-counts every adjustment term. any missing matrix or shape error
/// aborts the remaining passes.
pub fn add_aggregate_demand<S: MatrixStore>(
    store: &mut S,
    external_zones: &ZoneRange,
    num_processors: NumProcessors,
) -> Result<(), DemandError> {
    let mut calc = MatrixCalculator::new(store, num_processors);

    log::info!("adding commercial vehicle trips to auto demand");
    for period in TimePeriod::ALL {
        let p = period.code();
        let comveh = format!("{p}_COMVEHGP");
        // the commercial vehicle model produces a single general-purpose
        // total; the full amount goes to both the GP and toll SOV
        // matrices, it is not split between them
        calc.add_in_place(&format!("{p}_SOVGP"), &[&comveh], None)?;
        calc.add_in_place(&format!("{p}_SOVTOLL"), &[&comveh], None)?;
    }

    log::info!("adding external-internal trips to auto demand");
    for period in TimePeriod::ALL {
        for mode in EI_MODES {
            let dest = mode.destination_key(&period);
            calc.add_in_place(
                &dest,
                &[&format!("{dest}_EIWORK"), &format!("{dest}_EINONWORK")],
                None,
            )?;
        }
    }

    // external-external runs sequentially: the submatrix is only as large
    // as the external zone set and parallel evaluation costs more than it
    // saves
    calc.set_num_processors(NumProcessors::Fixed(0));
    let constraint = ZoneConstraint {
        origins: external_zones.clone(),
        destinations: external_zones.clone(),
    };
    log::info!("adding external-external trips to auto demand");
    for period in TimePeriod::ALL {
        for mode in EE_MODES {
            let dest = mode.destination_key(&period);
            calc.add_in_place(&dest, &[&format!("{dest}_EETRIPS")], Some(&constraint))?;
        }
    }
    Ok(())
}
