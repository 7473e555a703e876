use clap::Parser;
use road_emissions::app::EmissionsCliArguments;

fn main() {
    env_logger::init();
    log::info!("starting road-emissions at {}", chrono::Local::now().to_rfc3339());
    let args = EmissionsCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running road-emissions: {e}");
            std::process::exit(1);
        }
    }
}
