use crate::cli::commands::clear::run_clear;
use crate::cli::commands::export::output_path;
use crate::cli::commands::list::print_log;
use crate::cli::commands::now::print_now;
use crate::cli::commands::open_session;
use crate::cli::commands::roster::print_roster;
use crate::cli::commands::scan::run_scan;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::journal;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::{error, header, info, success, warning};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

const HELP: &str = "\
  select <name|number>   choose who is checking in
  scan                   scan the fingerprint of the selected person
  list [all]             show the attendance log and statistics
  export [file]          export the log to Excel
  clear                  delete every record
  roster                 show the people who can check in
  now                    show the current time in Cairo
  help                   show this help
  quit                   leave the session";

/// Handle the `session` command: interactive loop over stdin.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { delay_ms } = cmd {
        let mut session = open_session(cfg, *delay_ms);
        run(&mut session, cfg)?;
    }
    Ok(())
}

fn run<C: Clock>(session: &mut Session<C>, cfg: &Config) -> AppResult<()> {
    header("🔐 Fingerprint attendance");
    if session.take_welcome() {
        success("🎉 Welcome to the fingerprint attendance system!");
    }
    print_roster();
    println!("Type 'help' for the list of commands.");

    loop {
        match session.selected_user() {
            Some(name) => print!("[{name}] > "),
            None => print!("> "),
        }
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("").to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match command.as_str() {
            "" => {}
            "select" | "s" => match arg {
                Some(who) => match session.select(who) {
                    Ok(name) => success(format!("Selected: {name}")),
                    Err(e @ AppError::UnknownUser(_)) => error(e),
                    Err(e) => return Err(e),
                },
                None => warning("Usage: select <name|number>"),
            },
            "scan" => run_scan(session, cfg)?,
            "list" | "ls" => {
                let limit = if arg == Some("all") {
                    session.store().len()
                } else {
                    cfg.recent_limit
                };
                print_log(session.store(), limit, &session.now().iso_date(), false);
            }
            "export" => {
                let path = output_path(ExportFormat::Xlsx, arg);
                // export problems do not end the session
                if let Err(e) = export_workbook(session, &path, cfg) {
                    error(e);
                }
            }
            "clear" => run_clear(session, cfg, false)?,
            "roster" => print_roster(),
            "now" => print_now(&session.now()),
            "help" | "?" => println!("{HELP}"),
            "quit" | "exit" | "q" => break,
            other => warning(format!("Unknown command '{other}'. Type 'help'.")),
        }
    }

    info("Session closed.");
    Ok(())
}

/// Save the session's workbook to `path`, asking before overwriting.
fn export_workbook<C: Clock>(session: &Session<C>, path: &Path, cfg: &Config) -> AppResult<()> {
    let Some(bytes) = session.export_spreadsheet()? else {
        error("No attendance data to export.");
        return Ok(());
    };

    ensure_writable(path, false)?;
    fs::write(path, bytes)?;
    notify_export_success("XLSX", path);

    journal::ttlog(
        &cfg.journal_path(),
        "export",
        &path.to_string_lossy(),
        &format!("Exported {} as xlsx", session.records().len()),
    );
    Ok(())
}
