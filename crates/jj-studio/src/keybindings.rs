//! Keybinding system
//!
//! Maps keyboard input to commands. Patterns are textual ("ctrl+c", "g g")
//! so they read the same in code and in the help line.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// How long the first key of a two-key sequence stays pending
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+c", "g g", "down"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+C", "gg", "↓"
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    /// Single key with optional modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g")
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char, case-sensitive: "q", "G"
/// - With modifiers: "ctrl+c", "shift+tab"
/// - Named keys: "enter", "esc", "backspace", "up", "down", "home", "end"
/// - Two-char sequence: "g g"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let mut parts = pattern.split_whitespace();
        let (first, second) = (parts.next()?, parts.next()?);
        if parts.next().is_some() || first.chars().count() != 1 || second.chars().count() != 1 {
            return None;
        }
        return Some(ParsedKeyPattern::Sequence {
            first: first.chars().next()?,
            second: second.chars().next()?,
        });
    }

    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Terminals report uppercase letters with SHIFT held
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),
        _ => None,
    }
}

/// First key of a two-key sequence waiting for its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.timestamp.elapsed() >= SEQUENCE_TIMEOUT
    }
}

/// Outcome of matching a key against the keymap
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch {
    /// One or more commands are bound to the key
    Commands(Vec<CommandId>),
    /// The key starts a sequence; keep it pending
    Pending(char),
    /// Nothing is bound to the key
    Unbound,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a keymap, dropping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparseable key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings }
    }

    /// Match a key event, completing `pending` when it forms a sequence
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) =
            (pending.filter(|p| !p.is_expired()), current_char)
        {
            let completed = self.bindings.iter().find_map(|(binding, pattern)| {
                matches!(pattern, ParsedKeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current)
                .then_some(binding.command)
            });
            if let Some(command) = completed {
                return KeyMatch::Commands(vec![command]);
            }
        }

        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| {
                matches!(pattern, ParsedKeyPattern::Single { code, modifiers }
                    if key.code == *code && key.modifiers == *modifiers)
            })
            .map(|(binding, _)| binding.command)
            .collect();
        if !commands.is_empty() {
            return KeyMatch::Commands(commands);
        }

        let starts_sequence = current_char.filter(|c| {
            self.bindings.iter().any(|(_, pattern)| {
                matches!(pattern, ParsedKeyPattern::Sequence { first, .. } if first == c)
            })
        });
        match starts_sequence {
            Some(c) => KeyMatch::Pending(c),
            None => KeyMatch::Unbound,
        }
    }

    /// Get a compact hint for a command (e.g., "j/↓"), deduplicated
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for (binding, _) in self.bindings.iter().filter(|(b, _)| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }

        (!hints.is_empty()).then(|| hints.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("j", "j", NavigateNext),
            KeyBinding::new("down", "↓", NavigateNext),
            KeyBinding::new("g g", "gg", NavigateToTop),
            KeyBinding::new("G", "G", NavigateToBottom),
            KeyBinding::new("q", "q", GlobalClose),
            KeyBinding::new("esc", "q", GlobalClose),
            KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
        ])
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_patterns() {
        assert_eq!(
            parse_key_pattern("G"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('G'),
                modifiers: KeyModifiers::SHIFT,
            })
        );
        assert_eq!(
            parse_key_pattern("ctrl+c"),
            Some(ParsedKeyPattern::Single {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
        assert_eq!(
            parse_key_pattern("g g"),
            Some(ParsedKeyPattern::Sequence {
                first: 'g',
                second: 'g'
            })
        );
        assert_eq!(parse_key_pattern("g g g"), None);
        assert_eq!(parse_key_pattern("nonsense"), None);
    }

    #[test]
    fn test_single_key_matches() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Down, KeyModifiers::NONE), None),
            KeyMatch::Commands(vec![CommandId::NavigateNext])
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('G'), KeyModifiers::SHIFT), None),
            KeyMatch::Commands(vec![CommandId::NavigateToBottom])
        );
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL), None),
            KeyMatch::Commands(vec![CommandId::GlobalQuit])
        );
    }

    #[test]
    fn test_sequence_needs_pending_key() {
        let keymap = test_keymap();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(keymap.match_key(&g, None), KeyMatch::Pending('g'));

        let pending = PendingKey::new('g');
        assert_eq!(
            keymap.match_key(&g, Some(&pending)),
            KeyMatch::Commands(vec![CommandId::NavigateToTop])
        );
    }

    #[test]
    fn test_expired_pending_key_is_ignored() {
        let keymap = test_keymap();
        let pending = PendingKey {
            key: 'g',
            timestamp: Instant::now() - SEQUENCE_TIMEOUT,
        };
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('g'), KeyModifiers::NONE), Some(&pending)),
            KeyMatch::Pending('g')
        );
    }

    #[test]
    fn test_unbound_key() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.match_key(&key(KeyCode::Char('x'), KeyModifiers::NONE), None),
            KeyMatch::Unbound
        );
    }

    #[test]
    fn test_compact_hint_deduplicates() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateNext),
            Some("j/↓".to_string())
        );
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::GlobalClose),
            Some("q".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::Reload), None);
    }
}
