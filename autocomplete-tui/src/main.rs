mod app;
mod buffer;
mod error;
mod filter;
mod paint;
mod paths;
mod settings;
mod terminal;

use std::fs::{self, File};
use std::process::ExitCode;

use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

use app::App;
use error::AppError;
use settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = settings::config_arg(std::env::args().skip(1))?;
    let settings = Settings::load(config.as_deref())?;
    init_logging(settings.log_level);

    info!(
        "Starting with {:?} styles, {} words, page size {}",
        settings.platform(),
        settings.words.len(),
        settings.page_size
    );
    App::new(settings).run().await
}

/// Log to `latest.log` in the cache directory, archiving the previous one.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, Config::default(), file);
        }
        Err(e) => eprintln!("Could not create log file {}: {e}", path.display()),
    }
}
