use clap::Parser;
use tripmat::app::DemandApp;

fn main() {
    env_logger::init();
    log::info!("starting tripmat at {}", chrono::Local::now().to_rfc3339());
    let args = DemandApp::parse();
    match args.op.run() {
        Ok(_) => {
            eprintln!("finished.");
        }
        Err(e) => {
            log::error!("tripmat failed: {e}");
            std::process::exit(1)
        }
    }
}
