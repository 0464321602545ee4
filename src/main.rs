use anyhow::Result;
use std::env;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mailsift::app::App;
use mailsift::classify::GroqClient;
use mailsift::config::Config;

fn setup_logging() {
    use std::fs::OpenOptions;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mailsift=debug"));

    // Try to create a log file in the config directory
    let log_file = Config::ensure_dirs()
        .and_then(|_| Config::config_dir())
        .ok()
        .map(|dir| dir.join("mailsift.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
                .ok()
        });

    if let Some(file) = log_file {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        // Fallback to stderr if file logging fails
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_usage() {
    eprintln!(
        r#"mailsift - Classify emails as spam or not with a hosted LLM

Usage: mailsift [command]

Commands:
    (none)        Open the classification form
    init-config   Write a config file with the default settings
    help          Show this help message

Configuration file (optional): ~/.config/mailsift/config.toml
The API key is typed into the form and never stored.
"#
    );
}

fn run_init_config() -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    Config::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("init-config") => run_init_config(),
        Some(cmd) => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            std::process::exit(1);
        }
        None => {
            setup_logging();

            let config = Config::load()?;
            tracing::info!(
                "Starting mailsift (model {}, template {})",
                config.completion.model,
                config.completion.template.label()
            );

            // Initialize theme from config
            mailsift::ui::theme::init_theme(config.ui.theme);

            let client = Arc::new(GroqClient::new(&config.completion));
            let mut app = App::new(config, client);
            app.run().await
        }
    }
}
