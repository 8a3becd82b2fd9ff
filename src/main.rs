use clap::Parser;
use jellyfin_tui::core::config;
use jellyfin_tui::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jellyfin-tui", about = "Terminal browser for a Jellyfin media server")]
struct Args {
    /// Session file holding the server URL and API key
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// External player launched with the stream URL
    #[arg(short, long)]
    player: Option<String>,

    /// Where to write the log
    #[arg(long, default_value = "jellyfin-tui.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let resolved = config::resolve(args.config, args.player);
    log::info!(
        "jellyfin-tui starting up (config: {:?}, player: {})",
        resolved.config_path,
        resolved.player
    );

    tui::run(resolved)
}
