use crate::data::lookup::ProgramYear;
use crate::data::model::DegreeLevel;
use crate::indicators::catalog::{indicators, raw_metric_labels, Locale};
use crate::indicators::{compute, IndicatorKey, IndicatorResult};

// ---------------------------------------------------------------------------
// Report – everything the central panel draws for one selection
// ---------------------------------------------------------------------------

/// Header region: degree badge, program name and year caption.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSummary {
    pub degree_badge: String,
    pub degree_level: DegreeLevel,
    pub program_name: String,
    pub year: String,
    pub year_caption: String,
}

/// One indicator card.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorCard {
    pub id: u8,
    pub key: IndicatorKey,
    pub name: &'static str,
    /// Formatted value, or the locale's "not available" placeholder.
    pub value: String,
    pub unit: &'static str,
    /// Derived from several raw metrics rather than read directly.
    pub calculated: bool,
    pub available: bool,
}

/// One label/value row of the raw-data table.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    pub available: bool,
}

/// Renderable output for a (program, year) selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramReport {
    pub summary: ProgramSummary,
    pub cards: Vec<IndicatorCard>,
    pub raw_rows: Vec<RawDataRow>,
    pub indicators: IndicatorResult,
}

impl ProgramReport {
    /// Compute indicators for `selection` and lay them out for display.
    ///
    /// Graduate-only indicators are dropped unless the program is a master's
    /// or doctoral one; the underlying [`IndicatorResult`] keeps all keys.
    pub fn build(selection: &ProgramYear<'_>, locale: Locale) -> Self {
        let strings = locale.strings();
        let program = selection.program;
        let degree_level = program.degree_level();
        let result = compute(selection.metrics);

        let summary = ProgramSummary {
            degree_badge: program.degree.clone(),
            degree_level,
            program_name: program.name.clone(),
            year: selection.year.to_string(),
            year_caption: format!("{} {}", strings.academic_year, selection.year),
        };

        let cards = indicators()
            .iter()
            .filter(|def| !def.grad_only || degree_level.is_graduate())
            .map(|def| {
                let value = result.get(def.key);
                IndicatorCard {
                    id: def.id,
                    key: def.key,
                    name: def.name.get(locale),
                    value: if value.is_available() {
                        value.to_string()
                    } else {
                        strings.not_available.to_string()
                    },
                    unit: def.unit.get(locale),
                    calculated: def.calculated,
                    available: value.is_available(),
                }
            })
            .collect();

        let raw_rows = raw_metric_labels()
            .iter()
            .map(|row| {
                let value = selection.metrics.and_then(|m| m.get(row.key));
                let available = value.is_some_and(|v| v.is_present());
                RawDataRow {
                    key: row.key,
                    label: row.label.get(locale),
                    value: match value {
                        Some(v) if available => v.to_string(),
                        _ => strings.empty_value.to_string(),
                    },
                    available,
                }
            })
            .collect();

        log::debug!(
            "Built report for '{}' {}: {} of 13 indicators available",
            program.name,
            selection.year,
            result.available_count()
        );

        ProgramReport {
            summary,
            cards,
            raw_rows,
            indicators: result,
        }
    }
}
