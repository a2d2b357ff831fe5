use thiserror::Error;

use super::model::{Program, ProgramCatalog, RawMetrics, YearRecord};

// ---------------------------------------------------------------------------
// Section fallback
// ---------------------------------------------------------------------------

/// Exact key of the all-students / all-groups aggregate.
pub const AGGREGATE_SECTION: &str = "All_All";
/// Case variant seen in some upstream exports.
pub const AGGREGATE_SECTION_ALT: &str = "All_all";
/// Any section whose key starts with this is an aggregate over one axis.
pub const AGGREGATE_PREFIX: &str = "All_";

/// Pick the section to report for a year.
///
/// Upstream data is inconsistent, so the first rule that matches wins:
/// 1. exact `All_All`
/// 2. `All_all`
/// 3. first key (document order) starting with `All_`
/// 4. first section of any kind
///
/// Returns `None` only when the year has no sections at all.
pub fn aggregate_section(year: &YearRecord) -> Option<&RawMetrics> {
    let sections = &year.sections;
    sections
        .get(AGGREGATE_SECTION)
        .or_else(|| sections.get(AGGREGATE_SECTION_ALT))
        .or_else(|| {
            sections
                .iter()
                .find(|(key, _)| key.starts_with(AGGREGATE_PREFIX))
                .map(|(_, metrics)| metrics)
        })
        .or_else(|| sections.values().next())
}

// ---------------------------------------------------------------------------
// Selection resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no program at index {0}")]
    UnknownProgram(usize),
    #[error("program '{program}' has no data for year {year}")]
    UnknownYear { program: String, year: String },
}

/// A resolved (program, year) pair and the section chosen for it.
#[derive(Debug, Clone, Copy)]
pub struct ProgramYear<'a> {
    pub program: &'a Program,
    pub year: &'a str,
    /// `None` when the year exists but carries no sections.
    pub metrics: Option<&'a RawMetrics>,
}

/// Resolve the user's selection against the catalog.
pub fn resolve<'a>(
    catalog: &'a ProgramCatalog,
    program_index: usize,
    year: &'a str,
) -> Result<ProgramYear<'a>, LookupError> {
    let program = catalog
        .get(program_index)
        .ok_or(LookupError::UnknownProgram(program_index))?;
    let record = program
        .years
        .get(year)
        .ok_or_else(|| LookupError::UnknownYear {
            program: program.name.clone(),
            year: year.to_string(),
        })?;

    Ok(ProgramYear {
        program,
        year,
        metrics: aggregate_section(record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(students: f64) -> RawMetrics {
        RawMetrics::from_iter([("students", students)])
    }

    fn picked(year: &YearRecord) -> Option<f64> {
        aggregate_section(year).and_then(|m| m.number("students"))
    }

    #[test]
    fn exact_aggregate_wins() {
        let year = YearRecord::from_iter([
            ("All_Male", metrics(1.0)),
            ("All_all", metrics(2.0)),
            ("All_All", metrics(3.0)),
        ]);
        assert_eq!(picked(&year), Some(3.0));
    }

    #[test]
    fn case_variant_beats_prefix() {
        let year = YearRecord::from_iter([("All_Male", metrics(1.0)), ("All_all", metrics(2.0))]);
        assert_eq!(picked(&year), Some(2.0));
    }

    #[test]
    fn first_prefixed_key_in_document_order() {
        let year = YearRecord::from_iter([
            ("Male_All", metrics(1.0)),
            ("All_Female", metrics(2.0)),
            ("All_Male", metrics(3.0)),
        ]);
        assert_eq!(picked(&year), Some(2.0));
    }

    #[test]
    fn falls_back_to_first_section() {
        let year = YearRecord::from_iter([("Male_Male", metrics(5.0)), ("Female_Female", metrics(6.0))]);
        assert_eq!(picked(&year), Some(5.0));
    }

    #[test]
    fn empty_year_has_no_section() {
        assert!(aggregate_section(&YearRecord::default()).is_none());
    }

    #[test]
    fn resolve_reports_unknown_program_and_year() {
        let mut program = Program {
            name: "Law".into(),
            degree: "bachelor".into(),
            ..Default::default()
        };
        program.years.insert("1445".into(), YearRecord::default());
        let catalog = ProgramCatalog::from_programs(vec![program]);

        assert_eq!(
            resolve(&catalog, 3, "1445").unwrap_err(),
            LookupError::UnknownProgram(3)
        );
        assert!(matches!(
            resolve(&catalog, 0, "1999"),
            Err(LookupError::UnknownYear { .. })
        ));

        let found = resolve(&catalog, 0, "1445").unwrap();
        assert_eq!(found.program.name, "Law");
        assert_eq!(found.year, "1445");
        assert!(found.metrics.is_none());
    }
}
