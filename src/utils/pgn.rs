//! Move log export.
//!
//! Writes a game's history as PGN-style text: quoted tag pairs, numbered
//! moves in `e2-e4` coordinate form and a result token. Tags supplied by the
//! caller override the defaults.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::MoveRecord;
use crate::move_generation::game_status::GameStatus;

/// Result token for the current position; `*` while the game is open.
pub fn result_token(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Checkmate { winner: Color::White } => "1-0",
        GameStatus::Checkmate { winner: Color::Black } => "0-1",
        GameStatus::Stalemate | GameStatus::InsufficientMaterial => "1/2-1/2",
        GameStatus::InProgress | GameStatus::Check => "*",
    }
}

pub fn write_move_log(game_state: &GameState, headers: &BTreeMap<String, String>) -> String {
    let result = result_token(game_state.status());

    let mut tags = BTreeMap::<String, String>::new();
    tags.insert("Event".to_owned(), "Casual Game".to_owned());
    tags.insert("Site".to_owned(), "Local".to_owned());
    tags.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    tags.insert("White".to_owned(), "White".to_owned());
    tags.insert("Black".to_owned(), "Black".to_owned());
    tags.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
    tags.insert("Result".to_owned(), result.to_owned());

    let mut out = String::new();
    for (key, value) in &tags {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_tag_value(value)));
    }
    out.push('\n');

    let history = game_state.move_history();
    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 1);
    for (ply, record) in history.iter().enumerate() {
        let text = record_text(record);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, text));
        } else {
            movetext_parts.push(text);
        }
    }
    movetext_parts.push(result.to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');
    out
}

fn record_text(record: &MoveRecord) -> String {
    let mut text = record.to_algebraic();
    if let Some(kind) = record.promotion {
        text.push('=');
        text.push(kind.to_char().to_ascii_uppercase());
    }
    text
}

fn escape_tag_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
