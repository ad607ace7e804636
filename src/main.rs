use clap::Parser;
use coursedash::core::config::{self, CliOverrides};
use coursedash::core::data::DashboardData;
use coursedash::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursedash", about = "Terminal dashboard for course administrators")]
struct Args {
    /// JSON data file (defaults to the bundled demo data)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// View to open first, as a route path (e.g. /admin/usage)
    #[arg(short, long)]
    view: Option<String>,

    /// Log level written to coursedash.log
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to coursedash.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("coursedash.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Using default config: {}", e);
        config::CoursedashConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            data_file: args.data.as_deref(),
            start_view: args.view.as_deref(),
        },
    );
    log::info!("coursedash starting up with {:?}", resolved);

    let data = DashboardData::load(resolved.data_file.as_deref()).map_err(|e| {
        log::error!("Failed to load dashboard data: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    tui::run(resolved, data)
}
