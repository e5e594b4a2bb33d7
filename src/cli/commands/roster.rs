use crate::core::roster::ROSTER;
use crate::errors::AppResult;

pub fn handle() -> AppResult<()> {
    print_roster();
    Ok(())
}

pub(crate) fn print_roster() {
    println!("👥 Roster:");
    for (i, name) in ROSTER.iter().enumerate() {
        println!("  {}. {}", i + 1, name);
    }
}
