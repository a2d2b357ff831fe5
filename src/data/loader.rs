use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use anyhow::{Context, Result};

use super::model::{Program, ProgramCatalog};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a program catalog from a file.
///
/// The content is always read as JSON (an array of program records),
/// whatever the file is named.
pub fn load_file(path: &Path) -> Result<ProgramCatalog> {
    load_json(path)
}

/// Result of a load that never fails: on error the catalog is empty and the
/// error text is kept for the status bar.
#[derive(Debug)]
pub struct LoadOutcome {
    pub path: PathBuf,
    pub catalog: ProgramCatalog,
    pub error: Option<String>,
}

/// Load `path`, substituting an empty catalog on any failure.
pub fn load_or_empty(path: &Path) -> LoadOutcome {
    match load_file(path) {
        Ok(catalog) => {
            log::info!(
                "Loaded {} programs from {}",
                catalog.len(),
                path.display()
            );
            LoadOutcome {
                path: path.to_path_buf(),
                catalog,
                error: None,
            }
        }
        Err(e) => {
            log::error!("Failed to load {}: {e:#}", path.display());
            LoadOutcome {
                path: path.to_path_buf(),
                catalog: ProgramCatalog::default(),
                error: Some(format!("{e:#}")),
            }
        }
    }
}

/// Run [`load_or_empty`] on a worker thread; the outcome arrives on the
/// returned channel exactly once.
pub fn spawn_load(path: PathBuf) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = load_or_empty(&path);
        // The receiver is gone if the window closed before the load finished.
        let _ = tx.send(outcome);
    });
    rx
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// [
///   {
///     "name": "Islamic Law",
///     "degree": "بكالوريوس",
///     "years": {
///       "1445": {
///         "All_All": { "students": 450, "faculty_total": 50, "course_eval": "4.1" },
///         "All_Male": { "students": 230 }
///       }
///     }
///   }
/// ]
/// ```
fn load_json(path: &Path) -> Result<ProgramCatalog> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_catalog(&text)
}

/// Parse the records-oriented JSON text into a catalog.
pub fn parse_catalog(text: &str) -> Result<ProgramCatalog> {
    let programs: Vec<Program> =
        serde_json::from_str(text).context("Expected top-level JSON array of programs")?;
    Ok(ProgramCatalog::from_programs(programs))
}
