use clap::Parser;
use color_eyre::Result;

use mapa_seccions_tui::app::App;
use mapa_seccions_tui::cli::CliArgs;
use mapa_seccions_tui::domain::Dataset;
use mapa_seccions_tui::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let inspect = args.parse_inspect()?;

    // Initialize application state
    let mut app = App::new();
    if let Some(name) = &args.dataset {
        match Dataset::parse(name) {
            Some(dataset) => app.dataset = dataset,
            None => {
                return Err(color_eyre::eyre::eyre!(
                    "unknown dataset {name:?}, expected 'eleccions' or 'renda'"
                ));
            }
        }
    }

    // Headless paths: explicit flags, or no terminal attached
    if args.headless || inspect.is_some() || !is_terminal() {
        return event::run_headless(&mut app, args.json, inspect).await;
    }

    app.initialize_data()?;

    // Setup terminal
    let mut terminal = terminal::setup()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
