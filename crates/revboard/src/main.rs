use clap::Parser;
use revboard::{App, DashboardData, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "revboard")]
#[command(about = "A terminal dashboard for revenue reporting")]
struct Args {
    /// Path to the dashboard dataset (JSON produced by the reporting backend)
    data: PathBuf,

    /// Path to the data directory for logs (default: ~/.revboard/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".revboard")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let _log_guard = init_logging(&data_dir, &args.log_level)?;

    let data = DashboardData::load(&args.data)?;
    let mut app = App::new(data)?;

    if let Err(err) = ratatui::run(|terminal| app.run(terminal)) {
        tracing::error!("chart rendering backend failed: {err}");
        return Err(err);
    }

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
