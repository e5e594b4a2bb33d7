use crate::errors::{AppError, AppResult};

/// People who can check in. Compiled in; not read from the config file.
pub const ROSTER: [&str; 6] = ["Amr", "Rana", "Farida", "Hadel", "Fatma", "Asmaa"];

/// Resolve user input to the canonical roster spelling.
///
/// Accepts a case-insensitive name or a 1-based roster index.
pub fn resolve(input: &str) -> AppResult<&'static str> {
    let key = input.trim();

    if let Ok(idx) = key.parse::<usize>() {
        return idx
            .checked_sub(1)
            .and_then(|i| ROSTER.get(i).copied())
            .ok_or_else(|| AppError::UnknownUser(key.to_string()));
    }

    ROSTER
        .iter()
        .find(|name| name.eq_ignore_ascii_case(key))
        .copied()
        .ok_or_else(|| AppError::UnknownUser(key.to_string()))
}
