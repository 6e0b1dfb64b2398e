// Inputsense Replay Scripts
// Parses line-oriented recordings of raw events
//
// One event per line; `#` starts a comment and blank lines are skipped:
//
//   touchstart
//   mousemove
//   wheel
//   keydown key=9 target=input
//   keydown which=37 src=textarea
//   pointerdown height=23.6 type=touch

use std::path::Path;

use crate::input::{KeyDownEvent, PointerDownEvent, RawEvent};

/// Errors that can occur while parsing a replay script
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: unknown event '{name}'")]
    UnknownEvent { line: usize, name: String },

    #[error("line {line}: unknown field '{field}' for {event}")]
    UnknownField {
        line: usize,
        event: &'static str,
        field: String,
    },

    #[error("line {line}: expected key=value, found '{token}'")]
    MalformedField { line: usize, token: String },

    #[error("line {line}: invalid key code '{value}'")]
    InvalidKeyCode { line: usize, value: String },
}

/// Read and parse a replay script from a file
pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<RawEvent>, ScriptError> {
    let content = std::fs::read_to_string(path)?;
    parse_script(&content)
}

/// Parse a replay script into raw events
///
/// # Examples
/// ```
/// use inputsense_core::replay::parse_script;
/// use inputsense_core::RawEvent;
/// let events = parse_script("touchstart\nmousemove # synthetic\n").unwrap();
/// assert_eq!(events, vec![RawEvent::TouchStart, RawEvent::MouseMove]);
/// ```
pub fn parse_script(content: &str) -> Result<Vec<RawEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = index + 1;
        let text = match raw_line.split_once('#') {
            Some((before, _)) => before,
            None => raw_line,
        };

        let mut tokens = text.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };

        let event = match name.to_ascii_lowercase().as_str() {
            "touchstart" => {
                reject_fields("touchstart", line, tokens)?;
                RawEvent::TouchStart
            }
            "mousemove" => {
                reject_fields("mousemove", line, tokens)?;
                RawEvent::MouseMove
            }
            "wheel" => {
                reject_fields("wheel", line, tokens)?;
                RawEvent::Wheel
            }
            "keydown" => RawEvent::KeyDown(parse_keydown(line, tokens)?),
            "pointerdown" => RawEvent::PointerDown(parse_pointerdown(line, tokens)?),
            _ => {
                return Err(ScriptError::UnknownEvent {
                    line,
                    name: name.to_string(),
                })
            }
        };

        events.push(event);
    }

    Ok(events)
}

fn reject_fields<'a>(
    event: &'static str,
    line: usize,
    mut tokens: impl Iterator<Item = &'a str>,
) -> Result<(), ScriptError> {
    match tokens.next() {
        Some(token) => Err(ScriptError::UnknownField {
            line,
            event,
            field: token.to_string(),
        }),
        None => Ok(()),
    }
}

fn split_field(line: usize, token: &str) -> Result<(&str, &str), ScriptError> {
    token
        .split_once('=')
        .ok_or_else(|| ScriptError::MalformedField {
            line,
            token: token.to_string(),
        })
}

fn parse_code(line: usize, value: &str) -> Result<u32, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidKeyCode {
        line,
        value: value.to_string(),
    })
}

fn parse_keydown<'a>(
    line: usize,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<KeyDownEvent, ScriptError> {
    let mut event = KeyDownEvent::default();

    for token in tokens {
        let (field, value) = split_field(line, token)?;
        match field {
            "key" => event.key_code = Some(parse_code(line, value)?),
            "which" => event.which = Some(parse_code(line, value)?),
            "target" => event.target = Some(value.to_string()),
            "src" => event.src_element = Some(value.to_string()),
            _ => {
                return Err(ScriptError::UnknownField {
                    line,
                    event: "keydown",
                    field: field.to_string(),
                })
            }
        }
    }

    Ok(event)
}

fn parse_pointerdown<'a>(
    line: usize,
    tokens: impl Iterator<Item = &'a str>,
) -> Result<PointerDownEvent, ScriptError> {
    let mut event = PointerDownEvent::default();

    for token in tokens {
        let (field, value) = split_field(line, token)?;
        match field {
            // A height that does not parse is recorded as missing; the
            // classifier ignores such events
            "height" => event.height = value.parse::<f64>().ok(),
            "type" => event.pointer_type = Some(value.to_string()),
            _ => {
                return Err(ScriptError::UnknownField {
                    line,
                    event: "pointerdown",
                    field: field.to_string(),
                })
            }
        }
    }

    Ok(event)
}
