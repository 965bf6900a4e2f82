//! `routekit` 바이너리 진입점.

use routekit::application::routing::error::EXIT_CONFIGURATION;
use routekit::infrastructure::logging;
use routekit::interface::cli::{self, Cli};
use routekit::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    let (config_path, action) = Cli::parse_args();

    let composition = match AppComposition::load(config_path) {
        Ok(composition) => composition,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(EXIT_CONFIGURATION);
        }
    };

    if let Err(err) = logging::init(composition.config().log_file().as_deref()) {
        eprintln!("error: {err:#}");
        std::process::exit(EXIT_CONFIGURATION);
    }

    let code = cli::run(&composition, action).await;
    std::process::exit(code);
}
