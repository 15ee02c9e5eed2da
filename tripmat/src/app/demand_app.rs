use std::path::Path;

use clap::{Parser, Subcommand};

use crate::config::ImportConfiguration;
use crate::model::import::{add_aggregate_demand, import_traffic_trips};
use crate::model::report::LogReporter;
use crate::model::store::ArchiveStore;
use crate::model::DemandError;

/// Command line tool for importing CT-RAMP auto demand and summing
/// time-of-day trip matrices for traffic assignment
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct DemandApp {
    #[command(subcommand)]
    pub op: DemandOperation,
}

#[derive(Subcommand)]
pub enum DemandOperation {
    /// import the CT-RAMP trip tables and add the aggregate demand to the
    /// scenario's time-of-day total matrices
    Import {
        #[arg(long, help = "directory containing the CT-RAMP segment matrix files")]
        output_dir: String,
        #[arg(long, help = "path to the scenario matrix archive to update")]
        scenario: String,
        #[arg(long, help = "zone range treated as external to the region")]
        external_zones: Option<String>,
        #[arg(long, help = "processor count hint for matrix calculations")]
        num_processors: Option<String>,
        #[arg(long, help = "path to file with tripmat import parameters")]
        configuration_file: Option<String>,
    },
}

impl DemandOperation {
    pub fn run(&self) -> Result<(), DemandError> {
        match self {
            DemandOperation::Import {
                output_dir,
                scenario,
                external_zones,
                num_processors,
                configuration_file,
            } => {
                let conf = match configuration_file {
                    None => Ok(ImportConfiguration::default()),
                    Some(f) => {
                        log::info!("reading tripmat configuration from {f}");
                        ImportConfiguration::try_from(f)
                    }
                }?;
                // command line arguments win over the configuration file
                let external = external_zones
                    .as_ref()
                    .unwrap_or(&conf.external_zones)
                    .parse()?;
                let processors = num_processors
                    .as_ref()
                    .unwrap_or(&conf.num_processors)
                    .parse()?;

                let mut store = ArchiveStore::open(scenario)?;
                let mut reporter = LogReporter;
                import_traffic_trips(Path::new(output_dir), &mut store, &mut reporter)?;
                add_aggregate_demand(&mut store, &external, processors)?;
                store.save()
            }
        }
    }
}
