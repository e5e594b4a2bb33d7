use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::journal;
use crate::core::session::{ClearOutcome, Session};
use crate::errors::AppResult;
use crate::ui::messages::{confirm, error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut session = open_session(cfg, None);
        run_clear(&mut session, cfg, *yes)?;
    }
    Ok(())
}

pub(crate) fn run_clear<C: Clock>(
    session: &mut Session<C>,
    cfg: &Config,
    assume_yes: bool,
) -> AppResult<()> {
    if session.store().is_empty() {
        error("The attendance log is already empty.");
        return Ok(());
    }

    let prompt = format!(
        "Delete ALL {} attendance records? This action is irreversible.",
        session.store().len()
    );
    if !assume_yes && !confirm(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    match session.clear()? {
        ClearOutcome::AlreadyEmpty => error("The attendance log is already empty."),
        ClearOutcome::Cleared(n) => {
            success(format!("Attendance log cleared ({} records removed).", n));
            journal::ttlog(
                &cfg.journal_path(),
                "clear",
                &session.store().path().to_string_lossy(),
                &format!("{} records removed", n),
            );
        }
    }
    Ok(())
}
