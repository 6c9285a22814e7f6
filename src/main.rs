use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use cardhub::{
    card_tui::App,
    cli::{Cli, Commands, ReportCommand},
    config::Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "cardhub=info");
    }

    let config = Config::from_env()?;
    config.validate()?;

    let report_mode = matches!(cli.command, Some(Commands::Report(_)));
    init_logging(&config, report_mode);

    match cli.command {
        Some(Commands::Report(report)) => run_report(&report),
        Some(Commands::Tui) | None => run_tui(config).await,
    }
}

/// File logging always; stderr only when not drawing to the terminal
fn init_logging(config: &Config, report_mode: bool) {
    let (dir, file_name) = config.log_location();
    let file_appender = tracing_appender::rolling::never(dir, file_name);

    let stderr_layer = report_mode.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(EnvFilter::from_default_env())
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();
}

fn run_report(report: &ReportCommand) -> Result<()> {
    println!("{}", report.render()?);
    Ok(())
}

async fn run_tui(config: Config) -> Result<()> {
    info!("Starting cardhub TUI...");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = match App::new(config) {
        Ok(mut app) => app.run(&mut terminal).await,
        Err(e) => Err(e),
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match result {
        Ok(()) => {
            info!("cardhub TUI exited successfully");
            Ok(())
        }
        Err(e) => {
            error!("cardhub TUI encountered an error: {}", e);
            Err(e)
        }
    }
}
