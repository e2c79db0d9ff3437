//! Line-oriented event scripts replayed through an [`Editor`].
//!
//! ```text
//! # draw a triangle outline and recolor it
//! click 10 10
//! move 20 20
//! click 20 20
//! click 30 10
//! key Return
//! select 20 20
//! color red
//! key Ctrl+Z
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::config::KeyBinding;
use crate::draw::{Color, Point, Surface};
use crate::editor::Editor;
use crate::input::{Key, Modifiers};
use log::debug;
use std::fmt;
use thiserror::Error;

/// Errors raised while parsing a script. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    WrongArity {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid coordinate '{value}'")]
    InvalidCoordinate { line: usize, value: String },

    #[error("line {line}: invalid key '{value}'")]
    InvalidKey { line: usize, value: String },

    #[error("line {line}: unknown color '{value}'")]
    UnknownColor { line: usize, value: String },
}

impl ScriptError {
    /// Line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::WrongArity { line, .. }
            | ScriptError::InvalidCoordinate { line, .. }
            | ScriptError::InvalidKey { line, .. }
            | ScriptError::UnknownColor { line, .. } => *line,
        }
    }
}

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Move(Point),
    Click(Point),
    Select(Point),
    Key(Key, Modifiers),
    Undo,
    Redo,
    Color(Color),
}

impl ScriptStep {
    /// Feeds this step to `editor`.
    pub fn apply<S: Surface>(&self, editor: &mut Editor<S>) {
        match *self {
            ScriptStep::Move(point) => {
                editor.pointer_moved(point);
            }
            ScriptStep::Click(point) => {
                editor.pointer_clicked(point);
            }
            ScriptStep::Select(point) => {
                editor.select_at(point);
            }
            ScriptStep::Key(key, modifiers) => {
                editor.key_pressed(key, modifiers);
            }
            ScriptStep::Undo => {
                if let Some(description) = editor.undo() {
                    debug!("Undo: {}", description);
                }
            }
            ScriptStep::Redo => {
                if let Some(description) = editor.redo() {
                    debug!("Redo: {}", description);
                }
            }
            ScriptStep::Color(color) => {
                editor.change_selected_color(color);
            }
        }
    }
}

impl fmt::Display for ScriptStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptStep::Move(p) => write!(f, "move {} {}", p.x, p.y),
            ScriptStep::Click(p) => write!(f, "click {} {}", p.x, p.y),
            ScriptStep::Select(p) => write!(f, "select {} {}", p.x, p.y),
            ScriptStep::Key(key, _) => write!(f, "key {:?}", key),
            ScriptStep::Undo => f.write_str("undo"),
            ScriptStep::Redo => f.write_str("redo"),
            ScriptStep::Color(color) => write!(f, "color {}", color.name()),
        }
    }
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        if let Some(step) = parse_line(raw, index + 1)? {
            steps.push(step);
        }
    }
    Ok(steps)
}

/// Parses one line. Blank and comment lines yield `None`.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<ScriptStep>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut words = trimmed.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();
    let command_lower = command.to_lowercase();

    let arity = |expected: &'static str| ScriptError::WrongArity {
        line,
        command: command_lower.clone(),
        expected,
    };

    let step = match command_lower.as_str() {
        "move" | "click" | "select" => {
            let [x, y] = args.as_slice() else {
                return Err(arity("two coordinates"));
            };
            let point = Point::new(coordinate(x, line)?, coordinate(y, line)?);
            match command_lower.as_str() {
                "move" => ScriptStep::Move(point),
                "click" => ScriptStep::Click(point),
                _ => ScriptStep::Select(point),
            }
        }
        "key" => {
            let [chord] = args.as_slice() else {
                return Err(arity("a key name"));
            };
            let (key, modifiers) = key_chord(chord).ok_or_else(|| ScriptError::InvalidKey {
                line,
                value: chord.to_string(),
            })?;
            ScriptStep::Key(key, modifiers)
        }
        "undo" | "redo" => {
            if !args.is_empty() {
                return Err(arity("no arguments"));
            }
            if command_lower == "undo" {
                ScriptStep::Undo
            } else {
                ScriptStep::Redo
            }
        }
        "color" => {
            let [name] = args.as_slice() else {
                return Err(arity("a color name"));
            };
            let color = Color::from_name(name).ok_or_else(|| ScriptError::UnknownColor {
                line,
                value: name.to_string(),
            })?;
            ScriptStep::Color(color)
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: command.to_string(),
            });
        }
    };

    Ok(Some(step))
}

fn coordinate(value: &str, line: usize) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::InvalidCoordinate {
            line,
            value: value.to_string(),
        })
}

/// Splits "Ctrl+Shift+Z" style chords using the keybinding grammar.
fn key_chord(chord: &str) -> Option<(Key, Modifiers)> {
    let binding = KeyBinding::parse(chord).ok()?;
    let key = Key::from_name(&binding.key)?;
    Some((
        key,
        Modifiers {
            shift: binding.shift,
            ctrl: binding.ctrl,
            alt: binding.alt,
        },
    ))
}
