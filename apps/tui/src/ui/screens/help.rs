use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::widgets::popup::{centered_rect, ClearWidget};

const BINDINGS: [(&str, &str); 11] = [
    ("↑ ↓ ← →", "Mover el cursor (desplaza el mapa en el borde)"),
    ("Enter", "Inspeccionar la sección bajo el cursor"),
    ("/", "Buscar municipio"),
    ("f / F", "Siguiente / anterior filtro de partido"),
    ("Tab", "Cambiar entre resultados y renta"),
    ("+ / -", "Acercar / alejar"),
    ("r", "Restablecer vista, filtro y selección"),
    ("Esc", "Cerrar popup o ayuda"),
    ("F1 / ?", "Mostrar u ocultar esta ayuda"),
    ("q", "Salir"),
    ("Ctrl+C", "Salir"),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(ClearWidget, area);

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<TextLine<'_>> = BINDINGS
        .iter()
        .map(|(key, action)| {
            TextLine::from(vec![
                Span::styled(format!("{key:>9}  "), key_style),
                Span::raw(*action),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Ayuda ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(paragraph, area);
}
