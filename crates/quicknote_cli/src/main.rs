//! Command-line smoke check for the QuickNote core.
//!
//! # Responsibility
//! - Verify `quicknote_core` linkage with deterministic output.
//! - Optionally print the rendered card list of a local store file,
//!   logging to a `logs/` directory next to it.

use quicknote_core::{render, NotePersistence, NoteStore, Platform, SqliteSlot};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("quicknote_core ping={}", quicknote_core::ping());
    println!("quicknote_core version={}", quicknote_core::core_version());
    println!("quicknote_core platform={:?}", Platform::current());

    let Some(db_path) = std::env::args().nth(1) else {
        return ExitCode::SUCCESS;
    };

    match log_dir_for(Path::new(&db_path)) {
        Ok(log_dir) => {
            let log_dir = log_dir.to_string_lossy();
            if let Err(err) =
                quicknote_core::init_logging(quicknote_core::default_log_level(), &log_dir)
            {
                eprintln!("logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let slot = match SqliteSlot::open(&db_path) {
        Ok(slot) => slot,
        Err(err) => {
            eprintln!("failed to open note store `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };
    let store = NoteStore::open(NotePersistence::new(slot));
    println!("quicknote_core notes={}", store.len());
    print!("{}", render(&store.filter("")));
    ExitCode::SUCCESS
}

fn log_dir_for(db_path: &Path) -> std::io::Result<PathBuf> {
    let parent = db_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(std::path::absolute(parent)?.join("logs"))
}
