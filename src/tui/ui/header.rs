use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let pointer_type = app.interaction().pointer_type;

    let line = Line::from(vec![
        // App name
        Span::styled("inputsense ", t.text_primary().add_modifier(Modifier::BOLD)),
        // Active modality badge
        Span::styled(
            format!(" {} ", pointer_type.to_string().to_uppercase()),
            t.modality_badge(pointer_type),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} events, {} dropped", app.events_seen, app.events_dropped),
            t.text_muted(),
        ),
        Span::raw(" "),
        Span::styled("ctrl-c:quit", t.key_hint()),
    ]);

    let header = Paragraph::new(line).alignment(Alignment::Left);

    frame.render_widget(header, area);
}
