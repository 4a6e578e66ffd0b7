use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::OnceLock;

/// Widest op+target column before truncation.
const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| {
        Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI escape pattern is valid")
    });
    re.replace_all(s, "").into_owned()
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "visit_add" => Colour::Green,
        "del" | "visit_del" => Colour::Red,
        "edit" | "visit_edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "restore" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Shorten `s` to `max` characters, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// "op (target)" with only the operation word coloured.
fn op_column(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);
    if entry.target.is_empty() {
        return color.paint(truncate(&entry.operation, MAX_OP_WIDTH)).to_string();
    }

    let room = MAX_OP_WIDTH.saturating_sub(entry.operation.chars().count() + 3);
    format!(
        "{} ({})",
        color.paint(entry.operation.as_str()),
        truncate(&entry.target, room)
    )
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let lines: Vec<(String, String, String)> = entries
            .iter()
            .map(|e| (e.id.to_string(), display_date(&e.date), op_column(e)))
            .collect();

        let id_w = lines.iter().map(|(id, _, _)| id.len()).max().unwrap_or(1);
        let date_w = lines.iter().map(|(_, d, _)| d.len()).max().unwrap_or(10);
        let op_w = lines
            .iter()
            .map(|(_, _, op)| visible_width(op))
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for ((id, date, op), entry) in lines.iter().zip(&entries) {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(op)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id, date, op, padding, entry.message
            );
        }

        Ok(())
    }
}
