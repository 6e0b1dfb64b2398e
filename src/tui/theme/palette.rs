use ratatui::prelude::*;

use inputsense_core::PointerType;

/// Catppuccin Mocha inspired color palette for the TUI
pub struct Palette {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_success: Color,
    pub accent_warning: Color,
    pub accent_danger: Color,

    // UI colors
    pub border_default: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // One color per modality
    pub modality_none: Color,
    pub modality_touch: Color,
    pub modality_mouse: Color,
    pub modality_keyboard: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text_primary: Color::Rgb(205, 214, 244),      // Text
            text_secondary: Color::Rgb(186, 194, 222),    // Subtext1
            text_muted: Color::Rgb(108, 112, 134),        // Overlay0

            accent_primary: Color::Rgb(137, 180, 250),    // Blue
            accent_success: Color::Rgb(166, 227, 161),    // Green
            accent_warning: Color::Rgb(249, 226, 175),    // Yellow
            accent_danger: Color::Rgb(243, 139, 168),     // Red

            border_default: Color::Rgb(69, 71, 90),       // Surface1
            border_focused: Color::Rgb(137, 180, 250),    // Blue
            selection_bg: Color::Rgb(137, 180, 250),      // Blue
            selection_fg: Color::Rgb(30, 30, 46),         // Crust

            modality_none: Color::Rgb(147, 153, 178),     // Overlay2
            modality_touch: Color::Rgb(250, 179, 135),    // Peach
            modality_mouse: Color::Rgb(148, 226, 213),    // Teal
            modality_keyboard: Color::Rgb(203, 166, 247), // Mauve
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modality(&self, pointer_type: PointerType) -> Color {
        match pointer_type {
            PointerType::None => self.modality_none,
            PointerType::Touch => self.modality_touch,
            PointerType::Mouse => self.modality_mouse,
            PointerType::Keyboard => self.modality_keyboard,
        }
    }
}
