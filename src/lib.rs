//! Quality-indicator dashboard for academic programs.
//!
//! The data layer loads the program catalog, [`indicators`] derives the
//! thirteen indicators for one program-year, and [`report`] lays them out
//! for the egui front end in [`ui`].

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod fonts;
pub mod indicators;
pub mod report;
pub mod state;
pub mod ui;
