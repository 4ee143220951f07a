use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use manageme::api::{HttpClient, RemoteClient};
use manageme::core::config::{self, CliOverrides};
use manageme::core::controller::AppController;
use manageme::tui;

#[derive(Parser)]
#[command(
    name = "manageme",
    about = "Terminal client for the Manageme todo and reminder service"
)]
struct Args {
    /// Base URL of the service API, e.g. http://localhost:5000/api/
    #[arg(long)]
    base_url: Option<String>,

    /// Account to log in as. The password comes from the config file or MANAGEME_PASSWORD.
    #[arg(short, long)]
    user: Option<String>,

    /// Text file shown on the help screen
    #[arg(long)]
    help_file: Option<String>,
}

fn fail(message: String) -> ExitCode {
    error!("{message}");
    eprintln!("manageme: {message}");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to manageme.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("manageme.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    info!("Manageme starting up");

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => return fail(e.to_string()),
    };
    let config = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url.as_deref(),
            username: args.user.as_deref(),
            help_file: args.help_file.as_deref(),
        },
    );

    let Some(credentials) = config.credentials() else {
        return fail(
            "no credentials: set [account] username and password in ~/.manageme/config.toml \
             or MANAGEME_USERNAME and MANAGEME_PASSWORD"
                .to_string(),
        );
    };

    let client = Arc::new(HttpClient::new(config.base_url.clone()));
    if let Err(e) = client.login(&credentials).await {
        return fail(e.to_string());
    }
    info!("Logged in as {} at {}", credentials.name, config.base_url);

    let help_text = config::load_help_text(&config.help_file);
    let controller = AppController::new(client, help_text);

    match tui::run(controller, &config).await {
        Ok(()) => {
            info!("Manageme exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => fail(format!("terminal error: {e}")),
    }
}
