use eframe::egui::{self, Color32, RichText, Ui};

use crate::indicators::Locale;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – program / year selection
// ---------------------------------------------------------------------------

/// Render the selection panel: program, then year, then the show button.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let strings = state.locale.strings();

    ui.heading(strings.window_title);
    ui.separator();

    if state.loading {
        ui.horizontal(|ui: &mut Ui| {
            ui.spinner();
            ui.label(strings.loading);
        });
        return;
    }

    if state.catalog.is_empty() {
        ui.label(strings.no_programs);
    }

    // ---- Program selector ----
    ui.strong(strings.program_heading);
    let program_text = state
        .selected_program
        .and_then(|i| state.catalog.get(i))
        .map(|p| p.display_label())
        .unwrap_or_else(|| strings.choose_program.to_string());

    let mut program_choice = state.selected_program;
    ui.add_enabled_ui(!state.catalog.is_empty(), |ui: &mut Ui| {
        egui::ComboBox::from_id_salt("program_select")
            .selected_text(program_text)
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut program_choice, None, strings.choose_program);
                for (index, program) in state.catalog.programs.iter().enumerate() {
                    ui.selectable_value(&mut program_choice, Some(index), program.display_label());
                }
            });
    });
    if program_choice != state.selected_program {
        state.select_program(program_choice);
    }

    ui.add_space(8.0);

    // ---- Year selector (depends on the program) ----
    ui.strong(strings.year_heading);
    let year_text = state
        .selected_year
        .as_ref()
        .map(|y| format!("{} {y}", strings.year_option))
        .unwrap_or_else(|| strings.choose_year.to_string());

    let years = state.year_options();
    let mut year_choice = state.selected_year.clone();
    ui.add_enabled_ui(state.years_enabled(), |ui: &mut Ui| {
        egui::ComboBox::from_id_salt("year_select")
            .selected_text(year_text)
            .width(ui.available_width())
            .show_ui(ui, |ui: &mut Ui| {
                ui.selectable_value(&mut year_choice, None, strings.choose_year);
                for year in &years {
                    let label = format!("{} {year}", strings.year_option);
                    ui.selectable_value(&mut year_choice, Some(year.clone()), label);
                }
            });
    });
    if year_choice != state.selected_year {
        state.select_year(year_choice);
    }

    ui.add_space(12.0);

    let show = ui.add_enabled(
        state.can_show(),
        egui::Button::new(RichText::new(strings.show_button).strong())
            .min_size(egui::vec2(ui.available_width(), 28.0)),
    );
    if show.clicked() {
        state.show_results();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_reload = !state.loading && !state.data_path.as_os_str().is_empty();
            if ui.add_enabled(can_reload, egui::Button::new("Reload")).clicked() {
                state.start_load(state.data_path.clone());
                ui.close_menu();
            }
        });

        ui.menu_button("Language", |ui: &mut Ui| {
            for locale in Locale::ALL {
                if ui
                    .selectable_label(state.locale == locale, locale.to_string())
                    .clicked()
                {
                    state.set_locale(locale);
                    ui.close_menu();
                }
            }
        });

        ui.separator();

        if !state.loading && !state.catalog.is_empty() {
            ui.label(format!(
                "{} programs loaded from {}",
                state.catalog.len(),
                state.data_path.display()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Blocking notice
// ---------------------------------------------------------------------------

/// Modal message that must be acknowledged before the UI accepts input again.
pub fn notice_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.notice.clone() else {
        return;
    };

    let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui: &mut Ui| {
        ui.set_min_width(260.0);
        ui.label(RichText::new(message).strong());
        ui.add_space(8.0);
        ui.vertical_centered(|ui: &mut Ui| ui.button("OK").clicked())
            .inner
    });

    if modal.inner || modal.should_close() {
        state.dismiss_notice();
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open program dataset")
        .add_filter("JSON", &["json"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.start_load(path);
    }
}
