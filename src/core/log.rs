use crate::core::journal::{self, JournalEntry};
use crate::errors::AppResult;
use ansi_term::Colour;
use std::path::Path;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Colour for each journal operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "scan" => Colour::Green,
        "clear" => Colour::Red,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "load_fallback" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = journal::read_entries(path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        for line in Self::render(&entries) {
            println!("{}", line);
        }
        Ok(())
    }

    /// One line per entry: `id: date | op (target) => message`.
    pub fn render(entries: &[JournalEntry]) -> Vec<String> {
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut out = vec!["📜 Internal log:\n".to_string()];

        for (i, e) in entries.iter().enumerate() {
            let color = color_for_operation(&e.operation);

            let visible = op_target(e);
            let truncated = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is coloured
            let recolored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&recolored).chars().count()));

            out.push(format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                e.date,
                recolored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        out
    }
}

fn op_target(e: &JournalEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
