use biblia::api::BibleClient;
use biblia::commands::{self, Command};
use biblia::core::config;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "biblia", about = "Read the Bible from the terminal")]
struct Args {
    /// API base URL (overrides NUXT_PUBLIC_API_BASE, API_BASE and the config file)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Wrap verse text at this many columns
    #[arg(short, long, global = true)]
    width: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to biblia.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("biblia.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("warning: {e}; using defaults");
        config::BibliaConfig::default()
    });
    let settings = config::resolve(&file_config, args.api_base.as_deref(), args.width);

    log::info!("Biblia starting up against {}", settings.api_base);

    let client = match BibleClient::new(&settings.api_base) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match commands::run(&client, &args.command, &settings, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Command failed: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
