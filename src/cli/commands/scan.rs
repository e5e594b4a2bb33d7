use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::journal;
use crate::core::session::{ScanOutcome, Session};
use crate::errors::AppResult;
use crate::ui::messages::{scanning, success, warning};

/// Handle the `scan` command: one-shot select + scan.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { name, delay_ms } = cmd {
        let mut session = open_session(cfg, *delay_ms);

        if let Some(n) = name {
            session.select(n)?;
        }

        run_scan(&mut session, cfg)?;
    }
    Ok(())
}

/// Scan for whoever is selected and report the result.
pub(crate) fn run_scan<C: Clock>(session: &mut Session<C>, cfg: &Config) -> AppResult<()> {
    let outcome =
        session.scan_with(|name| scanning(format!("Scanning fingerprint for {name}...")))?;

    match outcome {
        ScanOutcome::NoUserSelected => {
            warning("Please select a person first.");
        }
        ScanOutcome::Recorded(r) => {
            println!();
            success(format!(
                "Attendance recorded: {} ({} - {})",
                r.name,
                r.shown_date(),
                r.shown_time()
            ));
            journal::ttlog(
                &cfg.journal_path(),
                "scan",
                &r.name,
                &format!(
                    "Checked in on {} at {}",
                    r.date,
                    r.time_24.as_deref().unwrap_or_default()
                ),
            );
        }
    }

    Ok(())
}
