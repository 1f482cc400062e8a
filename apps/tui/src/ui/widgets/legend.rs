//! Sidebar: active filter, party swatches for the elections view and
//! income bands for the income view.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::domain::Dataset;
use crate::parties::{party_color, FILTER_TOKENS};
use crate::ui::widgets::hex_color;
use crate::ui::widgets::map_canvas::income_color;

pub fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Leyenda ")
        .title_style(Style::default().fg(Color::Cyan))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = Vec::new();
    match app.dataset {
        Dataset::Eleccions => {
            lines.push(TextLine::from(Span::styled(
                "Filtro de partido",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (index, token) in FILTER_TOKENS.iter().enumerate() {
                let selected = index == app.filter_index % FILTER_TOKENS.len();
                let marker = if selected { ">" } else { " " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let mut spans = vec![Span::styled(format!("{marker} "), style)];
                if *token == "all" {
                    spans.push(Span::styled("Todos", style));
                } else {
                    spans.push(Span::styled(
                        "■ ",
                        Style::default().fg(hex_color(party_color(token))),
                    ));
                    spans.push(Span::styled(*token, style));
                }
                lines.push(TextLine::from(spans));
            }
        }
        Dataset::Renda => {
            lines.push(TextLine::from(Span::styled(
                "Renta media (€)",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (label, sample) in [
                ("< 20.000", 10_000.0),
                ("20.000 - 25.000", 22_000.0),
                ("25.000 - 30.000", 27_000.0),
                ("30.000 - 35.000", 32_000.0),
                ("> 35.000", 40_000.0),
            ] {
                lines.push(TextLine::from(vec![
                    Span::styled("■ ", Style::default().fg(income_color(sample))),
                    Span::raw(label),
                ]));
            }
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
