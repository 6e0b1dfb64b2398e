use ratatui::prelude::*;
use ratatui::widgets::*;

use inputsense_core::TriState;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let interaction = app.interaction();
    let flags = app.flags();

    let block = Block::default()
        .title(t.panel_title("INTERACTION", !app.field_focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(false))
        .border_type(BorderType::Plain);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut history = vec![Span::styled("history   ", t.text_muted())];
    if interaction.history.is_empty() {
        history.push(Span::styled("(empty)", t.text_muted()));
    }
    for (i, previous) in interaction.history.iter().enumerate() {
        if i > 0 {
            history.push(Span::styled(", ", t.text_muted()));
        }
        history.push(Span::styled(previous.to_string(), t.modality_text(*previous)));
    }

    let accuracy = match interaction.accuracy {
        Some(value) => format!("{:.1}", value),
        None => "none".to_string(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("pointer   ", t.text_muted()),
            Span::styled(
                interaction.pointer_type.to_string(),
                t.modality_text(interaction.pointer_type).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(history),
        Line::from(vec![
            Span::styled("canHover  ", t.text_muted()),
            Span::styled(interaction.can_hover.to_string(), t.flag(interaction.can_hover)),
        ]),
        Line::from(vec![
            Span::styled("accuracy  ", t.text_muted()),
            Span::styled(accuracy, t.text_primary()),
        ]),
        Line::from(vec![
            Span::styled("flags     ", t.text_muted()),
            flag_span("touch", flags.touch_started),
            flag_span("move", flags.mouse_moved),
            flag_span("wheel", flags.wheel_used),
            flag_span("key", flags.key_downed),
        ]),
        Line::from(vec![
            Span::styled("listeners ", t.text_muted()),
            Span::styled(app.listeners().to_string(), t.text_secondary()),
            Span::styled(format!("  ({} changes)", app.listener_changes()), t.text_muted()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn flag_span(name: &'static str, state: TriState) -> Span<'static> {
    let t = theme();
    let marker = match state {
        TriState::Unknown => "?",
        TriState::True => "+",
        TriState::False => "-",
    };
    Span::styled(format!("{}{} ", marker, name), t.flag(state.is_true()))
}
