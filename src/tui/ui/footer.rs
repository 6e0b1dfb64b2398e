use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let line1 = Line::styled(format!("Status: {}", app.status), t.status_message());

    let mut hints = vec![
        Span::styled("F2", t.key_hint()),
        Span::styled(
            if app.field_focused { ":blur field  " } else { ":focus field  " },
            t.text_muted(),
        ),
        Span::styled("F5", t.key_hint()),
        Span::styled(":tap  ", t.text_muted()),
        Span::styled("F6", t.key_hint()),
        Span::styled(":stylus  ", t.text_muted()),
        Span::styled("PgUp/PgDn", t.key_hint()),
        Span::styled(":scroll log  ", t.text_muted()),
    ];
    if !app.field_focused {
        hints.push(Span::styled("q", t.key_hint()));
        hints.push(Span::styled(":quit", t.text_muted()));
    } else {
        hints.push(Span::styled("Esc", t.key_hint()));
        hints.push(Span::styled(":leave field", t.text_muted()));
    }

    let footer = Paragraph::new(vec![line1, Line::from(hints)]);
    frame.render_widget(footer, area);
}
