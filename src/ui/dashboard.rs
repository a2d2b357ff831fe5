use eframe::egui::{self, Color32, RichText, ScrollArea, Stroke, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{card_accent, DegreePalette};
use crate::indicators::catalog::UiStrings;
use crate::report::{IndicatorCard, ProgramReport, ProgramSummary, RawDataRow};
use crate::state::AppState;

const CARD_WIDTH: f32 = 230.0;
const CARD_SPACING: f32 = 10.0;

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Render the summary, indicator cards and raw data for the shown report.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let strings = state.locale.strings();

    let Some(report) = &state.report else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(strings.empty_hint);
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            summary_header(ui, &report.summary);
            ui.separator();

            ui.heading(strings.indicators_heading);
            ui.add_space(4.0);
            indicator_grid(ui, report);

            ui.add_space(12.0);
            ui.heading(strings.raw_data_heading);
            ui.add_space(4.0);
            raw_data_table(ui, &report.raw_rows, strings);
        });
}

fn summary_header(ui: &mut Ui, summary: &ProgramSummary) {
    let badge_color = DegreePalette::default().color_for(summary.degree_level);

    ui.horizontal(|ui: &mut Ui| {
        ui.label(
            RichText::new(format!(" {} ", summary.degree_badge))
                .strong()
                .color(Color32::WHITE)
                .background_color(badge_color),
        );
        ui.heading(&summary.program_name);
    });
    ui.label(RichText::new(&summary.year_caption).weak());
}

fn indicator_grid(ui: &mut Ui, report: &ProgramReport) {
    let per_row = ((ui.available_width() + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING))
        .floor()
        .max(1.0) as usize;

    egui::Grid::new("indicator_cards")
        .spacing([CARD_SPACING, CARD_SPACING])
        .show(ui, |ui: &mut Ui| {
            for (i, card) in report.cards.iter().enumerate() {
                indicator_card(ui, card);
                if (i + 1) % per_row == 0 {
                    ui.end_row();
                }
            }
        });
}

fn indicator_card(ui: &mut Ui, card: &IndicatorCard) {
    let accent = card_accent(card.available);

    egui::Frame::group(ui.style())
        .stroke(Stroke::new(1.5, accent))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui: &mut Ui| {
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new(card.id.to_string()).small().color(accent));
                    if card.calculated {
                        ui.label(RichText::new("ƒ").small().weak())
                            .on_hover_text("Derived from raw data");
                    }
                });
                ui.label(RichText::new(card.name).strong());
                let value = RichText::new(&card.value).color(accent);
                ui.label(if card.available {
                    value.size(24.0)
                } else {
                    value.italics()
                });
                ui.label(RichText::new(card.unit).weak());
            });
        });
}

fn raw_data_table(ui: &mut Ui, rows: &[RawDataRow], strings: &UiStrings) {
    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(260.0))
        .column(Column::remainder())
        .header(22.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong(strings.metric_column);
            });
            header.col(|ui: &mut Ui| {
                ui.strong(strings.value_column);
            });
        })
        .body(|mut body| {
            for row in rows {
                body.row(20.0, |mut table_row| {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(row.label);
                    });
                    table_row.col(|ui: &mut Ui| {
                        if row.available {
                            ui.label(&row.value);
                        } else {
                            ui.label(RichText::new(&row.value).weak());
                        }
                    });
                });
            }
        });
}
