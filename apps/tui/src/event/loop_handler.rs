use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::domain::Dataset;
use crate::map::feature::LngLat;
use crate::map::service::MapService;
use crate::pipeline::{markup, pipeline_for};
use crate::ui;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    sync_viewport(terminal, app)?;

    loop {
        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Projection depends on the canvas size; resync before
                    // the redraw.
                    sync_viewport(terminal, app)?;
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_)) => {}
                Err(e) => {
                    app.status_message = format!("Input error: {e}");
                }
            }
        }
    }
    Ok(())
}

fn sync_viewport(
    terminal: &Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    let size = terminal.size()?;
    let canvas = ui::map_area(size.width, size.height);
    app.map
        .set_viewport(f64::from(canvas.width), f64::from(canvas.height));
    Ok(())
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(
    app: &mut App,
    json: bool,
    inspect: Option<LngLat>,
) -> Result<()> {
    app.initialize_data()?;

    if let Some(coords) = inspect {
        return render_headless_inspect(app, coords, json);
    }

    if json {
        render_headless_json(app)
    } else {
        render_headless_stats(app)
    }
}

/// One-shot popup pipeline at a coordinate; the non-interactive
/// equivalent of a map click.
fn render_headless_inspect(app: &App, coords: LngLat, json: bool) -> Result<()> {
    let pipeline = pipeline_for(app.dataset);
    let point = app.map.project(coords);
    let hits = app.map.query_features_at(point, &[pipeline.layer]);
    let Some(feature) = hits.first() else {
        println!("No features found at the clicked point.");
        return Ok(());
    };

    let content = (pipeline.build)(&feature.properties);
    if json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        println!("{}", markup(&content));
    }
    Ok(())
}

fn render_headless_stats(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);

    println!("\n{}", stats.dataset);
    println!("=================");
    println!("Total sections: {}", stats.total_sections);

    if !stats.by_winner.is_empty() {
        println!("\nSections by winning party:");
        for (party, count) in &stats.by_winner {
            println!("- {party}: {count}");
        }
    }

    println!("\nGenerated: {}", stats.generated);
    Ok(())
}

fn render_headless_json(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let features = app
        .map
        .base_features(app.dataset.layer())
        .unwrap_or_default();

    let mut by_winner: Vec<(String, usize)> = Vec::new();
    if app.dataset == Dataset::Eleccions {
        for feature in features {
            let Some(winner) = feature.prop("APartidoMasVotado") else {
                continue;
            };
            match by_winner.iter_mut().find(|(party, _)| *party == winner) {
                Some((_, count)) => *count += 1,
                None => by_winner.push((winner, 1)),
            }
        }
        by_winner.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    }

    HeadlessStats {
        dataset: app.dataset.label().to_string(),
        total_sections: features.len(),
        by_winner,
        generated: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    dataset: String,
    total_sections: usize,
    by_winner: Vec<(String, usize)>,
    generated: String,
}
