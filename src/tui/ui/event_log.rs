use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let block = Block::default()
        .title(t.panel_title("EVENT LOG", false))
        .borders(Borders::ALL)
        .border_style(t.panel_border(false))
        .border_type(BorderType::Plain);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.log.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No events yet. Move the mouse, scroll, or press a navigation key.",
            t.text_muted(),
        ));
        frame.render_widget(empty, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let total_lines = app.log.len();

    // The scroll position names the bottom visible entry
    let end = app.log_scroll.min(total_lines - 1) + 1;
    let start = end.saturating_sub(visible_height);

    let lines: Vec<Line> = app.log[start..end]
        .iter()
        .map(|entry| {
            let mut spans = vec![Span::styled(entry.text.clone(), t.log_entry(entry.kind))];
            if entry.repeat > 1 {
                spans.push(Span::styled(format!(" x{}", entry.repeat), t.text_muted()));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
