mod palette;

use ratatui::prelude::*;

use inputsense_core::PointerType;

pub use palette::Palette;

use crate::tui::app::LogKind;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    // Panel border style
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    // Badge for the active pointer type
    pub fn modality_badge(&self, pointer_type: PointerType) -> Style {
        Style::default()
            .fg(self.palette.selection_fg)
            .bg(self.palette.modality(pointer_type))
            .add_modifier(Modifier::BOLD)
    }

    // Plain text in the modality color
    pub fn modality_text(&self, pointer_type: PointerType) -> Style {
        Style::default().fg(self.palette.modality(pointer_type))
    }

    pub fn flag(&self, on: bool) -> Style {
        if on {
            Style::default().fg(self.palette.accent_success)
        } else {
            Style::default().fg(self.palette.text_muted)
        }
    }

    // Primary text
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    // Secondary/dimmed text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // Muted text (hints, labels)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    pub fn title_focused(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_unfocused(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Event log line, colored by outcome
    pub fn log_entry(&self, kind: LogKind) -> Style {
        match kind {
            LogKind::Transition => Style::default()
                .fg(self.palette.accent_primary)
                .add_modifier(Modifier::BOLD),
            LogKind::Accuracy => Style::default().fg(self.palette.accent_success),
            LogKind::Unchanged => Style::default().fg(self.palette.text_secondary),
            LogKind::Ignored => Style::default().fg(self.palette.text_muted),
            LogKind::Dropped => Style::default().fg(self.palette.accent_danger),
            LogKind::Listeners => Style::default().fg(self.palette.accent_warning),
        }
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Status message style
    pub fn status_message(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }

    // Text field, highlighted while focused
    pub fn field(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.selection_fg)
                .bg(self.palette.selection_bg)
        } else {
            Style::default().fg(self.palette.text_secondary)
        }
    }

    // Panel title with optional focus indicator
    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        if focused {
            Line::styled(format!(" {} ", title), self.title_focused())
        } else {
            Line::styled(format!(" {} ", title), self.title_unfocused())
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
