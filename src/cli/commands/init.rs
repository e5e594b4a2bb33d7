use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::journal;
use crate::core::store;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty attendance file, if none exists yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rAttendance…");

    if !cli.test {
        cfg.save()?;
        println!("📄 Config file : {}", Config::config_file().display());
    }

    let data = cfg.data_path();
    if !data.exists() {
        store::write_records(&data, &[])?;
    }
    println!("🗂️  Data file   : {}", data.display());

    journal::ttlog(
        &cfg.journal_path(),
        "init",
        &data.to_string_lossy(),
        "Attendance log initialized",
    );

    println!("🎉 rAttendance initialization completed!");
    Ok(())
}
