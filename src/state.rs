use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::data::loader::{spawn_load, LoadOutcome};
use crate::data::lookup::resolve;
use crate::data::model::ProgramCatalog;
use crate::indicators::Locale;
use crate::report::ProgramReport;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded catalog (empty until the startup load finishes or if it failed).
    pub catalog: ProgramCatalog,

    /// Where the current catalog came from.
    pub data_path: PathBuf,

    /// Index into `catalog.programs`.
    pub selected_program: Option<usize>,

    /// Year label of the selected program.
    pub selected_year: Option<String>,

    /// Report shown in the central panel.
    pub report: Option<ProgramReport>,

    /// Blocking notice awaiting acknowledgement.
    pub notice: Option<String>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,

    /// Channel of the background load, while one is running.
    pending_load: Option<Receiver<LoadOutcome>>,

    pub locale: Locale,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: ProgramCatalog::default(),
            data_path: PathBuf::new(),
            selected_program: None,
            selected_year: None,
            report: None,
            notice: None,
            status_message: None,
            loading: false,
            pending_load: None,
            locale: Locale::default(),
        }
    }
}

impl AppState {
    /// Start loading `path` on a worker thread. Selections stay usable on
    /// the old catalog until the new one arrives.
    pub fn start_load(&mut self, path: PathBuf) {
        log::info!("Loading programs from {}", path.display());
        self.loading = true;
        self.status_message = None;
        self.pending_load = Some(spawn_load(path));
    }

    /// Check for a finished background load. Returns `true` once the outcome
    /// has been applied.
    pub fn poll_load(&mut self) -> bool {
        let Some(rx) = &self.pending_load else {
            return false;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending_load = None;
                self.apply_load(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                log::error!("Program loader exited without a result");
                self.pending_load = None;
                self.apply_load(LoadOutcome {
                    path: self.data_path.clone(),
                    catalog: ProgramCatalog::default(),
                    error: Some("loader thread stopped".to_string()),
                });
                true
            }
        }
    }

    /// Ingest a finished load; failures leave an empty catalog and an error
    /// in the status line.
    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        self.data_path = outcome.path;
        self.status_message = outcome.error.map(|e| format!("Error: {e}"));
        self.set_catalog(outcome.catalog);
    }

    /// Replace the catalog and reset every selection.
    pub fn set_catalog(&mut self, catalog: ProgramCatalog) {
        self.catalog = catalog;
        self.selected_program = None;
        self.selected_year = None;
        self.report = None;
        self.notice = None;
        self.loading = false;
    }

    /// Choose a program. The year list is rebuilt from it, so the previous
    /// year and any shown report are cleared.
    pub fn select_program(&mut self, index: Option<usize>) {
        self.selected_program = index.filter(|&i| i < self.catalog.len());
        self.selected_year = None;
        self.report = None;
    }

    pub fn select_year(&mut self, year: Option<String>) {
        self.selected_year = year;
    }

    /// Years offered for the selected program, ascending.
    pub fn year_options(&self) -> Vec<String> {
        self.selected_program
            .and_then(|i| self.catalog.get(i))
            .map(|p| p.year_labels())
            .unwrap_or_default()
    }

    /// Whether the year selector should accept input.
    pub fn years_enabled(&self) -> bool {
        self.selected_program.is_some()
    }

    /// Whether the "show" action is available.
    pub fn can_show(&self) -> bool {
        self.selected_program.is_some() && self.selected_year.is_some()
    }

    /// Build the report for the current selection. If the pair no longer
    /// resolves, raise the blocking notice and keep whatever was shown.
    pub fn show_results(&mut self) {
        let (Some(index), Some(year)) = (self.selected_program, self.selected_year.as_deref())
        else {
            return;
        };

        match resolve(&self.catalog, index, year) {
            Ok(selection) => {
                self.report = Some(ProgramReport::build(&selection, self.locale));
            }
            Err(e) => {
                log::warn!("Cannot show indicators: {e}");
                self.notice = Some(self.locale.strings().no_data_notice.to_string());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Switch label language, re-rendering the current report if any.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale == locale {
            return;
        }
        self.locale = locale;
        if self.report.is_some() {
            self.show_results();
        }
    }
}
