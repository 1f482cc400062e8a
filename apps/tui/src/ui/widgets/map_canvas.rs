//! Section canvas: polygon outlines colored by winning party (or income
//! band), the highlight overlay on top, then the inspection crosshair.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::App;
use crate::domain::Dataset;
use crate::format::parse_decimal;
use crate::map::feature::{Feature, ScreenPoint};
use crate::map::service::SourceData;
use crate::map::HIGHLIGHT_ID;
use crate::parties::party_color;
use crate::ui::widgets::hex_color;

/// Income band fills, light to dark with rising income.
const INCOME_RAMP: [(f64, &str); 5] = [
    (0.0, "#fee5d9"),
    (20_000.0, "#fcae91"),
    (25_000.0, "#fb6a4a"),
    (30_000.0, "#de2d26"),
    (35_000.0, "#a50f15"),
];

pub fn income_color(income: f64) -> Color {
    let mut hex = INCOME_RAMP[0].1;
    for (threshold, color) in INCOME_RAMP {
        if income >= threshold {
            hex = color;
        }
    }
    hex_color(hex)
}

fn feature_color(dataset: Dataset, feature: &Feature) -> Color {
    match dataset {
        Dataset::Eleccions => feature
            .prop("APartidoMasVotado")
            .map_or(Color::Gray, |winner| hex_color(party_color(&winner))),
        Dataset::Renda => feature
            .prop("RendaMitjana")
            .and_then(|raw| parse_decimal(&raw))
            .map_or(Color::Gray, income_color),
    }
}

fn draw_outline(ctx: &mut Context<'_>, feature: &Feature, color: Color) {
    for ring in feature.geometry.rings() {
        for pair in ring.windows(2) {
            ctx.draw(&CanvasLine {
                x1: pair[0][0],
                y1: pair[0][1],
                x2: pair[1][0],
                y2: pair[1][1],
                color,
            });
        }
    }
}

pub fn render_map(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.dataset.label()))
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let (w, h) = app.map.viewport();
    let top_left = app.map.unproject(ScreenPoint::new(0.0, 0.0));
    let bottom_right = app.map.unproject(ScreenPoint::new(w, h));
    let cursor = app.map.unproject(app.cursor);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([top_left.lng, bottom_right.lng])
        .y_bounds([bottom_right.lat, top_left.lat])
        .paint(|ctx| {
            for feature in app.map.visible_features(app.dataset.layer()) {
                draw_outline(ctx, feature, feature_color(app.dataset, feature));
            }

            if let Some(SourceData::Feature(highlighted)) = app.map.source(HIGHLIGHT_ID) {
                let color = app
                    .map
                    .overlays()
                    .iter()
                    .find(|layer| layer.id == HIGHLIGHT_ID)
                    .map_or(Color::White, |layer| hex_color(&layer.paint.line_color));
                draw_outline(ctx, highlighted, color);
            }

            ctx.print(
                cursor.lng,
                cursor.lat,
                TextLine::styled(
                    "+",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        });

    f.render_widget(canvas, area);
}
