use std::cell::Cell;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;

use inputsense_core::{
    Classification, Dispatch, EngineConfig, InputSurface, Interaction, InteractionEngine,
    KeyDownEvent, ListenerKind, ListenerSet, PointerDownEvent, RawEvent, SuppressionFlags,
};

const MAX_LOG_LINES: usize = 500;

/// Tag reported as the key target while the text field has focus
pub const FIELD_TAG: &str = "input";
/// Tag reported as the key target otherwise
pub const BODY_TAG: &str = "body";

/// Contact heights cycled through by the simulated stylus
const STYLUS_HEIGHTS: [f64; 4] = [12.0, 23.666, 8.25, 31.04];

/// The terminal as an input surface.
///
/// Crossterm delivers every mouse report once capture is on, so the surface
/// only tracks which listeners the engine wants; reports for detached
/// listeners are dropped by the engine.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    listeners: ListenerSet,
    changes: usize,
}

impl TerminalSurface {
    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    pub fn changes(&self) -> usize {
        self.changes
    }
}

impl InputSurface for TerminalSurface {
    fn add_listener(&mut self, kind: ListenerKind) {
        self.listeners.insert(kind);
        self.changes += 1;
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        self.listeners.remove(kind);
        self.changes += 1;
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogKind {
    Transition,
    Accuracy,
    Unchanged,
    Ignored,
    Dropped,
    Listeners,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub kind: LogKind,
    pub text: String,
    pub repeat: usize,
}

pub struct App {
    engine: InteractionEngine<TerminalSurface>,
    pub log: Vec<LogEntry>,
    pub log_scroll: usize,
    pub field_focused: bool,
    pub field_text: String,
    pub pointer: Option<(u16, u16)>,
    pub hover_zone: Cell<Rect>,
    pub status: String,
    pub events_seen: usize,
    pub events_dropped: usize,
    stylus_index: usize,
}

impl App {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: InteractionEngine::attach(TerminalSurface::default(), config),
            log: vec![],
            log_scroll: 0,
            field_focused: false,
            field_text: String::new(),
            pointer: None,
            hover_zone: Cell::new(Rect::default()),
            status: "Move the mouse, scroll, or press Tab".to_string(),
            events_seen: 0,
            events_dropped: 0,
            stylus_index: 0,
        }
    }

    pub fn interaction(&self) -> Interaction {
        self.engine.interaction()
    }

    /// Listeners currently attached to the terminal surface
    pub fn listeners(&self) -> ListenerSet {
        self.engine.surface().listeners()
    }

    pub fn flags(&self) -> SuppressionFlags {
        *self.engine.classifier().flags()
    }

    pub fn listener_changes(&self) -> usize {
        self.engine.surface().changes()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    /// True when the pointer sits over the hover card
    pub fn pointer_in_hover_zone(&self) -> bool {
        let zone = self.hover_zone.get();
        match self.pointer {
            Some((column, row)) => {
                column >= zone.x
                    && column < zone.x.saturating_add(zone.width)
                    && row >= zone.y
                    && row < zone.y.saturating_add(zone.height)
            }
            None => false,
        }
    }

    /// Feed one raw event to the engine and log the outcome
    pub fn dispatch(&mut self, event: RawEvent, label: &str) {
        self.events_seen += 1;
        let before = self.engine.listeners();

        match self.engine.dispatch(event) {
            Dispatch::Detached(kind) => {
                self.events_dropped += 1;
                self.push_log(LogKind::Dropped, format!("{} dropped, no {} listener", label, kind));
            }
            Dispatch::Classified { classification, .. } => match classification {
                Classification::Transition { from, to } => {
                    self.push_log(LogKind::Transition, format!("{}: {} -> {}", label, from, to));
                    self.set_status(format!("Now using {}", to));
                }
                Classification::AccuracyUpdated(accuracy) => {
                    self.push_log(LogKind::Accuracy, format!("{}: accuracy {:.1}", label, accuracy));
                }
                Classification::Unchanged => {
                    self.push_log(LogKind::Unchanged, format!("{}: no change", label));
                }
                Classification::Ignored => {
                    self.push_log(LogKind::Ignored, format!("{}: ignored", label));
                }
            },
        }

        let after = self.engine.listeners();
        if after != before {
            self.push_log(LogKind::Listeners, format!("listeners now {}", after));
        }
    }

    /// Translate a terminal key into a keydown aimed at the focused element
    pub fn press_key(&mut self, code: KeyCode) {
        let Some(key_code) = key_code_for(code) else {
            return;
        };
        let target = if self.field_focused { FIELD_TAG } else { BODY_TAG };
        let event = KeyDownEvent::new(key_code).with_target(target);
        let label = format!("keydown {} on {}", describe_key(code), target);
        self.dispatch(RawEvent::KeyDown(event), &label);
    }

    /// A terminal click carries no contact geometry
    pub fn click(&mut self) {
        let event = PointerDownEvent {
            height: None,
            pointer_type: Some("mouse".to_string()),
        };
        self.dispatch(RawEvent::PointerDown(event), "pointerdown");
    }

    /// A finger tap: touchstart followed by the synthetic mousemove browsers emit
    pub fn simulate_tap(&mut self) {
        self.dispatch(RawEvent::TouchStart, "touchstart");
        self.dispatch(RawEvent::MouseMove, "mousemove (synthetic)");
    }

    pub fn simulate_stylus(&mut self) {
        let height = STYLUS_HEIGHTS[self.stylus_index % STYLUS_HEIGHTS.len()];
        self.stylus_index += 1;
        let event = PointerDownEvent::new(height).with_pointer_type("pen");
        self.dispatch(RawEvent::PointerDown(event), &format!("pointerdown h={}", height));
    }

    pub fn toggle_field(&mut self) {
        self.field_focused = !self.field_focused;
        if self.field_focused {
            self.set_status("Text field focused, keys target an input element");
        } else {
            self.set_status("Text field blurred");
        }
    }

    /// Apply a key to the focused text field
    pub fn edit_field(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.field_text.push(c),
            KeyCode::Backspace => {
                self.field_text.pop();
            }
            KeyCode::Esc => self.toggle_field(),
            _ => {}
        }
    }

    pub fn scroll_log_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    pub fn scroll_log_down(&mut self) {
        if self.log_scroll + 1 < self.log.len() {
            self.log_scroll += 1;
        }
    }

    fn push_log(&mut self, kind: LogKind, text: String) {
        if let Some(last) = self.log.last_mut() {
            if last.kind == kind && last.text == text {
                last.repeat += 1;
                return;
            }
        }

        self.log.push(LogEntry {
            kind,
            text,
            repeat: 1,
        });
        if self.log.len() > MAX_LOG_LINES {
            let overflow = self.log.len() - MAX_LOG_LINES;
            self.log.drain(0..overflow);
        }
        // Follow the newest entry
        self.log_scroll = self.log.len().saturating_sub(1);
    }

    /// Remove every listener the engine still holds
    pub fn shutdown(self) {
        self.engine.detach();
    }
}

/// Legacy key code a browser would report for a terminal key
pub fn key_code_for(code: KeyCode) -> Option<u32> {
    match code {
        KeyCode::Backspace => Some(8),
        KeyCode::Tab | KeyCode::BackTab => Some(9),
        KeyCode::Enter => Some(13),
        KeyCode::Esc => Some(27),
        KeyCode::Char(' ') => Some(32),
        KeyCode::PageUp => Some(33),
        KeyCode::PageDown => Some(34),
        KeyCode::End => Some(35),
        KeyCode::Home => Some(36),
        KeyCode::Left => Some(37),
        KeyCode::Up => Some(38),
        KeyCode::Right => Some(39),
        KeyCode::Down => Some(40),
        KeyCode::Insert => Some(45),
        KeyCode::Delete => Some(46),
        KeyCode::F(n) if (1..=12).contains(&n) => Some(111 + n as u32),
        KeyCode::Char(c) if c.is_ascii() => Some(c.to_ascii_uppercase() as u32),
        _ => None,
    }
}

fn describe_key(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::BackTab => "shift-tab".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inputsense_core::PointerType;

    #[test]
    fn test_key_code_mapping() {
        assert_eq!(key_code_for(KeyCode::Tab), Some(9));
        assert_eq!(key_code_for(KeyCode::Down), Some(40));
        assert_eq!(key_code_for(KeyCode::Char(' ')), Some(32));
        assert_eq!(key_code_for(KeyCode::Char('a')), Some(65));
        assert_eq!(key_code_for(KeyCode::F(5)), Some(116));
        assert_eq!(key_code_for(KeyCode::Char('é')), None);
    }

    #[test]
    fn test_tab_switches_to_keyboard() {
        let mut app = App::new(EngineConfig::default());
        app.dispatch(RawEvent::MouseMove, "mousemove");
        app.press_key(KeyCode::Tab);

        assert_eq!(app.interaction().pointer_type, PointerType::Keyboard);
        assert!(app
            .log
            .iter()
            .any(|entry| entry.kind == LogKind::Transition && entry.text.contains("mouse -> keyboard")));
    }

    #[test]
    fn test_typing_in_field_keeps_mouse() {
        let mut app = App::new(EngineConfig::default());
        app.dispatch(RawEvent::MouseMove, "mousemove");
        app.toggle_field();
        app.press_key(KeyCode::Enter);

        assert_eq!(app.interaction().pointer_type, PointerType::Mouse);
    }

    #[test]
    fn test_repeated_entries_are_coalesced() {
        let mut app = App::new(EngineConfig::default());
        app.press_key(KeyCode::Char('a'));
        app.press_key(KeyCode::Char('a'));
        app.press_key(KeyCode::Char('a'));

        let last = app.log.last().unwrap();
        assert_eq!(last.kind, LogKind::Ignored);
        assert_eq!(last.repeat, 3);
    }

    #[test]
    fn test_latched_mouse_moves_are_dropped() {
        let mut app = App::new(EngineConfig::default());
        app.dispatch(RawEvent::MouseMove, "mousemove");
        app.dispatch(RawEvent::MouseMove, "mousemove");

        assert_eq!(app.events_dropped, 1);
        assert!(!app.listeners().contains(ListenerKind::MouseMove));
        assert!(app.log.iter().any(|entry| entry.kind == LogKind::Listeners));
    }

    #[test]
    fn test_click_without_geometry_keeps_accuracy() {
        let mut app = App::new(EngineConfig::default());
        app.click();
        assert_eq!(app.interaction().accuracy, None);

        app.simulate_stylus();
        assert_eq!(app.interaction().accuracy, Some(12.0));
    }

    #[test]
    fn test_hover_zone() {
        let mut app = App::new(EngineConfig::default());
        app.hover_zone.set(Rect::new(10, 5, 20, 4));

        app.pointer = Some((12, 6));
        assert!(app.pointer_in_hover_zone());
        app.pointer = Some((30, 6));
        assert!(!app.pointer_in_hover_zone());
    }

    #[test]
    fn test_tap_keeps_listeners_until_shutdown() {
        let mut app = App::new(EngineConfig::default());
        app.simulate_tap();
        assert_eq!(app.listeners(), ListenerSet::all());
        assert_eq!(app.listener_changes(), 5);
        app.shutdown();
    }
}
