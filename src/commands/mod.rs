//! Portfolio command dispatcher
//!
//! Maps a line typed into the terminal front-end to a tagged response. All
//! payloads are static; the only response the game cares about is
//! [`ResponseKind::Game`], which tells the host to reveal the game component.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Static payloads keyed by command name
const CONTENT_JSON: &str = include_str!("content.json");

/// Commands listed by `help` (the game command stays hidden)
pub const AVAILABLE_COMMANDS: [(&str, &str); 8] = [
    ("help", "Show available commands"),
    ("about", "Display information about me"),
    ("skills", "List technical skills"),
    ("projects", "Show portfolio projects"),
    ("contact", "Display contact information"),
    ("certifications", "Show professional certifications"),
    ("clear", "Clear terminal history"),
    ("download", "Download resume PDF"),
];

/// Response tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Help,
    About,
    Skills,
    Certifications,
    Projects,
    Download,
    Contact,
    Clear,
    Error,
    Game,
}

/// Tagged response, serialized as `{ "type": ..., "content": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub content: Value,
}

impl CommandResponse {
    fn new(kind: ResponseKind, content: Value) -> Self {
        Self { kind, content }
    }

    fn error(message: String) -> Self {
        Self::new(ResponseKind::Error, Value::String(message))
    }
}

/// One line of `help` output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpEntry {
    pub command: String,
    pub description: String,
}

fn content() -> Option<&'static Map<String, Value>> {
    static CONTENT: OnceLock<Option<Map<String, Value>>> = OnceLock::new();
    CONTENT
        .get_or_init(|| match serde_json::from_str(CONTENT_JSON) {
            Ok(map) => Some(map),
            Err(e) => {
                log::error!("Embedded command content is malformed: {}", e);
                None
            }
        })
        .as_ref()
}

fn static_response(kind: ResponseKind, key: &str) -> CommandResponse {
    match content().and_then(|map| map.get(key)) {
        Some(payload) => CommandResponse::new(kind, payload.clone()),
        None => CommandResponse::error(format!("Content for '{}' is unavailable.", key)),
    }
}

fn help() -> CommandResponse {
    let entries: Vec<HelpEntry> = AVAILABLE_COMMANDS
        .iter()
        .map(|(command, description)| HelpEntry {
            command: command.to_string(),
            description: description.to_string(),
        })
        .collect();
    CommandResponse::new(ResponseKind::Help, json!(entries))
}

/// Resolve free-text input (case-insensitive, surrounding whitespace ignored)
pub fn dispatch(input: &str) -> CommandResponse {
    let command = input.trim().to_lowercase();
    match command.as_str() {
        "help" => help(),
        "about" => static_response(ResponseKind::About, "about"),
        "skills" => static_response(ResponseKind::Skills, "skills"),
        "projects" => static_response(ResponseKind::Projects, "projects"),
        "contact" => static_response(ResponseKind::Contact, "contact"),
        "certifications" => static_response(ResponseKind::Certifications, "certifications"),
        "download" => static_response(ResponseKind::Download, "download"),
        "clear" => CommandResponse::new(ResponseKind::Clear, Value::Null),
        "game" => CommandResponse::new(ResponseKind::Game, Value::Null),
        _ => CommandResponse::error(format!(
            "Command not found: {}. Type 'help' for available commands.",
            input
        )),
    }
}
