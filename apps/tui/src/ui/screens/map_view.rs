use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

use crate::app::App;
use crate::domain::Dataset;
use crate::ui;
use crate::ui::widgets::legend::render_sidebar;
use crate::ui::widgets::map_canvas::render_map;
use crate::ui::widgets::popup::render_popup;

pub fn render_map_view(app: &App, f: &mut Frame<'_>) {
    let chunks = ui::main_chunks(f.area());
    let (canvas_area, sidebar_area) = ui::content_chunks(chunks[1]);

    render_header(app, f, chunks[0]);
    render_map(app, f, canvas_area);
    render_sidebar(app, f, sidebar_area);
    render_status(app, f, chunks[2]);
    render_shortcuts(f, chunks[3]);

    if let Some(content) = app.map.popup().and_then(|popup| popup.get_content()) {
        render_popup(content, f, canvas_area);
    }
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = [Dataset::Eleccions, Dataset::Renda].map(|dataset| {
        let style = if app.dataset_loaded(dataset) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        TextLine::from(Span::styled(dataset.label(), style))
    });

    let selected = usize::from(app.dataset == Dataset::Renda);
    let tabs = Tabs::new(titles.to_vec())
        .block(
            Block::default()
                .title(" Mapa de secciones censales ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: Rect) {
    let line = if app.searching {
        TextLine::from(vec![
            Span::styled("Buscar: ", Style::default().fg(Color::Yellow)),
            Span::raw(app.search_input.clone()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])
    } else {
        TextLine::from(app.status_message.clone())
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let hints = TextLine::from(vec![
        Span::styled("↑↓←→", key_style),
        Span::raw(" mover  "),
        Span::styled("Enter", key_style),
        Span::raw(" inspeccionar  "),
        Span::styled("/", key_style),
        Span::raw(" buscar  "),
        Span::styled("f", key_style),
        Span::raw(" filtro  "),
        Span::styled("Tab", key_style),
        Span::raw(" datos  "),
        Span::styled("r", key_style),
        Span::raw(" reset  "),
        Span::styled("F1", key_style),
        Span::raw(" ayuda  "),
        Span::styled("q", key_style),
        Span::raw(" salir"),
    ]);

    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
