mod event_log;
mod footer;
mod header;
mod interaction_panel;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Compact header
            Constraint::Length(9),  // Interaction + playground
            Constraint::Min(6),     // Event log
            Constraint::Length(2),  // Footer
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(root[1]);

    header::render(frame, app, root[0]);
    interaction_panel::render(frame, app, middle[0]);
    render_playground(frame, app, middle[1]);
    event_log::render(frame, app, root[2]);
    footer::render(frame, app, root[3]);
}

fn render_playground(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let block = Block::default()
        .title(t.panel_title("PLAYGROUND", app.field_focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(app.field_focused))
        .border_type(if app.field_focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    // Text field: keys typed here target an input element
    let cursor = if app.field_focused { "_" } else { "" };
    let field = Line::from(vec![
        Span::styled("input ", t.text_muted()),
        Span::styled(format!(" {}{} ", app.field_text, cursor), t.field(app.field_focused)),
    ]);
    frame.render_widget(Paragraph::new(field), chunks[0]);

    render_hover_card(frame, app, chunks[1]);
}

// Details appear on hover for mouse users and stay visible otherwise
fn render_hover_card(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let interaction = app.interaction();
    let hovered = interaction.can_hover && app.pointer_in_hover_zone();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(t.panel_border(hovered));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.hover_zone.set(area);

    let lines = if !interaction.can_hover {
        vec![
            Line::styled("Hover card", t.text_primary().add_modifier(Modifier::BOLD)),
            Line::styled(
                "No hover on this device, details always shown",
                t.text_secondary(),
            ),
        ]
    } else if hovered {
        vec![
            Line::styled("Hover card", t.text_primary().add_modifier(Modifier::BOLD)),
            Line::styled("Revealed by hovering", t.modality_text(interaction.pointer_type)),
        ]
    } else {
        vec![Line::styled("Hover here for details", t.text_muted())]
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
