//! Popup panel drawn over the canvas when a section is inspected.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget};
use ratatui::Frame;

use crate::pipeline::{ElectionSummary, IncomeSummary, PopupContent};
use crate::ui::widgets::{dif_color, hex_color};

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

pub fn render_popup(content: &PopupContent, f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(75, 70, area);
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title(format!(" {} ", content.title()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    match content {
        PopupContent::Election(summary) => render_election(summary, f, inner),
        PopupContent::Income(summary) => render_income(summary, f, inner),
    }
}

fn render_election(summary: &ElectionSummary, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let header_lines = vec![
        TextLine::from(vec![
            Span::raw(format!(
                "Distrito: {} | Sección: {} | Censo: ",
                summary.district, summary.section
            )),
            Span::styled(
                format!("{} electores", summary.census),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::raw(format!("Participación: {} (", summary.participation)),
            Span::styled(
                summary.participation_dif.clone(),
                Style::default().fg(dif_color(summary.participation_dif_class)),
            ),
            Span::raw(" respecto al 2019)"),
        ]),
        TextLine::from(""),
    ];
    f.render_widget(Paragraph::new(header_lines), chunks[0]);

    let rows = summary.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(Span::styled(
                row.code.clone(),
                Style::default()
                    .fg(hex_color(row.color))
                    .add_modifier(Modifier::BOLD),
            )),
            Cell::from(row.votes.clone()),
            Cell::from(row.percentage.clone()),
            Cell::from(Span::styled(
                row.dif_2019.clone(),
                Style::default().fg(dif_color(row.dif_class)),
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Partido", "Votos", "%", "Dif. 2019"])
            .style(Style::default().add_modifier(Modifier::UNDERLINED)),
    )
    .column_spacing(1);

    f.render_widget(table, chunks[1]);
}

fn render_income(summary: &IncomeSummary, f: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        TextLine::from(format!(
            "Distrito: {} | Sección: {}",
            summary.district, summary.section
        )),
        TextLine::from(""),
        TextLine::from(vec![
            Span::raw("Renta media: "),
            Span::styled(
                format!("{} €", summary.income),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(vec![
            Span::raw("Dif. año anterior: "),
            Span::styled(
                format!("{} €", summary.dif_previous_year),
                Style::default().fg(dif_color(summary.dif_previous_year_class)),
            ),
        ]),
        TextLine::from(vec![
            Span::raw("Variación 5 años: "),
            Span::styled(
                summary.five_year_change.clone(),
                Style::default().fg(dif_color(summary.five_year_change_class)),
            ),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
