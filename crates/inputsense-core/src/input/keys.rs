// Inputsense Input Layer - Key Classification Table
// Key codes that count as purposeful keyboard navigation

use std::fmt;

use strum_macros::EnumIter;

/// A key whose press is treated as keyboard navigation rather than typing.
///
/// The numeric values are the legacy DOM `keyCode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u32)]
pub enum NavigationKey {
    Tab = 9,
    Enter = 13,
    Shift = 16,
    Esc = 27,
    Space = 32,
    PageUp = 33,
    PageDown = 34,
    End = 35,
    Home = 36,
    LeftArrow = 37,
    UpArrow = 38,
    RightArrow = 39,
    DownArrow = 40,
}

impl NavigationKey {
    /// Look up a key code in the navigation table.
    ///
    /// Returns `None` for keys that are not navigation keys; such key
    /// events are ignored by the classifier.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            9 => Some(NavigationKey::Tab),
            13 => Some(NavigationKey::Enter),
            16 => Some(NavigationKey::Shift),
            27 => Some(NavigationKey::Esc),
            32 => Some(NavigationKey::Space),
            33 => Some(NavigationKey::PageUp),
            34 => Some(NavigationKey::PageDown),
            35 => Some(NavigationKey::End),
            36 => Some(NavigationKey::Home),
            37 => Some(NavigationKey::LeftArrow),
            38 => Some(NavigationKey::UpArrow),
            39 => Some(NavigationKey::RightArrow),
            40 => Some(NavigationKey::DownArrow),
            _ => None,
        }
    }

    /// Convert to the raw key code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Tab moves focus even out of form fields, so it is never exempted
    pub fn is_tab(self) -> bool {
        matches!(self, NavigationKey::Tab)
    }

    /// Human-readable key name
    pub fn name(self) -> &'static str {
        match self {
            NavigationKey::Tab => "tab",
            NavigationKey::Enter => "enter",
            NavigationKey::Shift => "shift",
            NavigationKey::Esc => "esc",
            NavigationKey::Space => "space",
            NavigationKey::PageUp => "page up",
            NavigationKey::PageDown => "page down",
            NavigationKey::End => "end",
            NavigationKey::Home => "home",
            NavigationKey::LeftArrow => "left arrow",
            NavigationKey::UpArrow => "up arrow",
            NavigationKey::RightArrow => "right arrow",
            NavigationKey::DownArrow => "down arrow",
        }
    }
}

impl fmt::Display for NavigationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
