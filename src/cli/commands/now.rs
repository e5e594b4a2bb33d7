use crate::core::clock::{CivilClock, CivilTimestamp, SystemClock};
use crate::errors::AppResult;

pub fn handle() -> AppResult<()> {
    print_now(&CivilClock::new(SystemClock).now());
    Ok(())
}

pub(crate) fn print_now(now: &CivilTimestamp) {
    println!("🕐 Current time (Alexandria):");
    println!("📅 {}", now.display_date());
    println!("🕐 {}", now.time_12h());
    println!("🌍 Time zone: {}", now.zone_name());
}
