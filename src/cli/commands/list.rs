use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{CivilClock, SystemClock};
use crate::core::store::AttendanceStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all, details } = cmd {
        let store = open_store(cfg);
        let limit = if *all { store.len() } else { cfg.recent_limit };
        let today = CivilClock::new(SystemClock).now().iso_date();

        print_log(&store, limit, &today, *details);
    }
    Ok(())
}

/// Recent entries, quick statistics and optionally the detailed table.
pub(crate) fn print_log(store: &AttendanceStore, limit: usize, today: &str, details: bool) {
    if store.is_empty() {
        info("No attendance records yet.");
        return;
    }

    header("📋 Attendance log");
    let name_w = store
        .recent(limit)
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    for r in store.recent(limit) {
        println!(
            "  {:<name_w$}  {} - {}",
            r.name,
            r.shown_date(),
            r.shown_time(),
            name_w = name_w
        );
    }

    let hidden = store.len().saturating_sub(limit);
    if hidden > 0 {
        println!("  … {} older record(s), use --all to show them", hidden);
    }

    println!();
    header("📊 Statistics");
    println!("  Total records : {}", store.len());
    println!("  Today         : {}", store.count_on(today));
    println!("  People        : {}", store.distinct_people());

    if details {
        println!();
        print!("{}", details_table(store).render());
    }
}

fn details_table(store: &AttendanceStore) -> Table {
    let mut table = Table::new(vec![
        Column::new("Name", 12),
        Column::new("Date", 10),
        Column::new("Time", 11),
    ]);
    for r in store.records() {
        table.add_row(vec![
            r.name.clone(),
            r.shown_date().to_string(),
            r.shown_time().to_string(),
        ]);
    }
    table
}
