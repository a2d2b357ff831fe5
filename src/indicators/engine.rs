use std::collections::BTreeMap;
use std::fmt;

use crate::data::model::RawMetrics;

use super::catalog::IndicatorKey;
use super::format::{round_half_up, to_fixed};

// ---------------------------------------------------------------------------
// IndicatorValue / IndicatorResult
// ---------------------------------------------------------------------------

/// Outcome of one indicator for a program-year.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorValue {
    /// A passthrough score, shown as recorded.
    Number(f64),
    /// A formatted derived value (`"1:9"`, `"50.0"`).
    Text(String),
    Unavailable,
}

impl IndicatorValue {
    pub fn is_available(&self) -> bool {
        !matches!(self, IndicatorValue::Unavailable)
    }
}

impl fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorValue::Number(v) => write!(f, "{v}"),
            IndicatorValue::Text(s) => f.write_str(s),
            IndicatorValue::Unavailable => Ok(()),
        }
    }
}

static UNAVAILABLE: IndicatorValue = IndicatorValue::Unavailable;

/// Every indicator key mapped to its value for one program-year.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorResult {
    values: BTreeMap<IndicatorKey, IndicatorValue>,
}

impl IndicatorResult {
    pub fn get(&self, key: IndicatorKey) -> &IndicatorValue {
        self.values
            .get(&key)
            .unwrap_or(&UNAVAILABLE)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn available_count(&self) -> usize {
        self.values.values().filter(|v| v.is_available()).count()
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive all indicators from one section's raw metrics.
///
/// `None` (no section recorded for the year) yields an all-unavailable
/// result. Each key is computed on its own; a missing field only affects the
/// indicators that read it.
pub fn compute(metrics: Option<&RawMetrics>) -> IndicatorResult {
    let values = IndicatorKey::ALL
        .iter()
        .map(|&key| {
            let value = metrics
                .map(|m| compute_one(key, m))
                .unwrap_or(IndicatorValue::Unavailable);
            (key, value)
        })
        .collect();
    IndicatorResult { values }
}

fn compute_one(key: IndicatorKey, m: &RawMetrics) -> IndicatorValue {
    use IndicatorKey::*;

    match key {
        ExperienceEval => score(m, "experience_eval"),
        CourseEval => score(m, "course_eval"),

        // No raw source is modeled for these yet.
        GraduationRate | RetentionRate | StudentPerformance | EmploymentRate | EmployerEval => {
            IndicatorValue::Unavailable
        }
        StudentPublication | Patents => IndicatorValue::Unavailable,

        StudentFacultyRatio => match (positive(m, "students"), positive(m, "faculty_total")) {
            (Some(students), Some(faculty)) => {
                IndicatorValue::Text(format!("1:{}", round_half_up(students / faculty)))
            }
            _ => IndicatorValue::Unavailable,
        },
        PublicationPct => per_faculty(m, "faculty_published", 100.0, 1),
        ResearchPerFaculty => per_faculty(m, "research_count", 1.0, 2),
        CitationsPerFaculty => per_faculty(m, "citations", 1.0, 1),
    }
}

/// Passthrough of a 1–5 rating; zero means the survey was not run.
fn score(m: &RawMetrics, metric: &str) -> IndicatorValue {
    match m.number(metric) {
        Some(v) if v != 0.0 => IndicatorValue::Number(v),
        _ => IndicatorValue::Unavailable,
    }
}

fn positive(m: &RawMetrics, metric: &str) -> Option<f64> {
    m.number(metric).filter(|v| *v > 0.0)
}

/// `numerator / faculty_total * scale` with `digits` decimals. A missing
/// numerator counts as zero; a missing or non-positive denominator does not.
fn per_faculty(m: &RawMetrics, numerator: &str, scale: f64, digits: usize) -> IndicatorValue {
    let Some(faculty) = positive(m, "faculty_total") else {
        return IndicatorValue::Unavailable;
    };
    let count = m.number(numerator).unwrap_or(0.0);
    IndicatorValue::Text(to_fixed(count / faculty * scale, digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::MetricValue;

    const RESERVED: [IndicatorKey; 7] = [
        IndicatorKey::GraduationRate,
        IndicatorKey::RetentionRate,
        IndicatorKey::StudentPerformance,
        IndicatorKey::EmploymentRate,
        IndicatorKey::EmployerEval,
        IndicatorKey::StudentPublication,
        IndicatorKey::Patents,
    ];

    fn metrics<const N: usize>(pairs: [(&str, f64); N]) -> RawMetrics {
        RawMetrics::from_iter(pairs)
    }

    fn text(s: &str) -> IndicatorValue {
        IndicatorValue::Text(s.to_string())
    }

    fn full_record() -> RawMetrics {
        metrics([
            ("students", 450.0),
            ("graduates", 80.0),
            ("faculty_total", 50.0),
            ("faculty_phd", 40.0),
            ("faculty_published", 30.0),
            ("research_count", 42.0),
            ("citations", 310.0),
            ("course_eval", 4.1),
            ("experience_eval", 3.9),
            // Reserved slots must ignore lookalike raw fields.
            ("graduation_rate", 88.0),
            ("patents", 2.0),
        ])
    }

    #[test]
    fn every_key_is_present() {
        for input in [None, Some(&RawMetrics::default()), Some(&full_record())] {
            let result = compute(input);
            assert_eq!(result.len(), 13);
            for key in IndicatorKey::ALL {
                assert!(result.values.contains_key(&key), "missing {key}");
            }
        }
    }

    #[test]
    fn absent_metrics_are_all_unavailable() {
        let result = compute(None);
        assert_eq!(result.available_count(), 0);
    }

    #[test]
    fn reserved_slots_never_compute() {
        for input in [None, Some(&RawMetrics::default()), Some(&full_record())] {
            let result = compute(input);
            for key in RESERVED {
                assert_eq!(result.get(key), &IndicatorValue::Unavailable, "{key}");
            }
        }
    }

    #[test]
    fn student_faculty_ratio() {
        let r = compute(Some(&metrics([("students", 450.0), ("faculty_total", 50.0)])));
        assert_eq!(r.get(IndicatorKey::StudentFacultyRatio), &text("1:9"));

        let r = compute(Some(&metrics([("students", 17.0), ("faculty_total", 2.0)])));
        assert_eq!(r.get(IndicatorKey::StudentFacultyRatio), &text("1:9"));

        let r = compute(Some(&metrics([("students", 0.0), ("faculty_total", 50.0)])));
        assert_eq!(r.get(IndicatorKey::StudentFacultyRatio), &IndicatorValue::Unavailable);

        let r = compute(Some(&metrics([("students", 450.0)])));
        assert_eq!(r.get(IndicatorKey::StudentFacultyRatio), &IndicatorValue::Unavailable);
    }

    #[test]
    fn publication_percentage() {
        let r = compute(Some(&metrics([("faculty_published", 30.0), ("faculty_total", 60.0)])));
        assert_eq!(r.get(IndicatorKey::PublicationPct), &text("50.0"));

        let r = compute(Some(&metrics([("faculty_published", 30.0), ("faculty_total", 0.0)])));
        assert_eq!(r.get(IndicatorKey::PublicationPct), &IndicatorValue::Unavailable);

        let r = compute(Some(&metrics([("faculty_total", 60.0)])));
        assert_eq!(r.get(IndicatorKey::PublicationPct), &text("0.0"));
    }

    #[test]
    fn research_and_citations_per_faculty() {
        let r = compute(Some(&metrics([("research_count", 7.0), ("faculty_total", 20.0)])));
        assert_eq!(r.get(IndicatorKey::ResearchPerFaculty), &text("0.35"));

        let r = compute(Some(&metrics([("citations", 153.0), ("faculty_total", 40.0)])));
        assert_eq!(r.get(IndicatorKey::CitationsPerFaculty), &text("3.8"));

        let r = compute(Some(&metrics([("research_count", 1.0), ("faculty_total", 8.0)])));
        assert_eq!(r.get(IndicatorKey::ResearchPerFaculty), &text("0.13"));
    }

    #[test]
    fn negative_denominator_is_unavailable() {
        let r = compute(Some(&metrics([
            ("students", 100.0),
            ("citations", 10.0),
            ("faculty_total", -5.0),
        ])));
        for key in [
            IndicatorKey::StudentFacultyRatio,
            IndicatorKey::PublicationPct,
            IndicatorKey::ResearchPerFaculty,
            IndicatorKey::CitationsPerFaculty,
        ] {
            assert_eq!(r.get(key), &IndicatorValue::Unavailable, "{key}");
        }
    }

    #[test]
    fn numeric_strings_and_garbage() {
        let m = RawMetrics::from_iter([
            ("faculty_total", MetricValue::from("40")),
            ("citations", MetricValue::from("lots")),
            ("course_eval", MetricValue::from(" 4.25")),
            ("experience_eval", MetricValue::from("n/a")),
        ]);
        let r = compute(Some(&m));
        assert_eq!(r.get(IndicatorKey::CitationsPerFaculty), &text("0.0"));
        assert_eq!(r.get(IndicatorKey::CourseEval), &IndicatorValue::Number(4.25));
        assert_eq!(r.get(IndicatorKey::ExperienceEval), &IndicatorValue::Unavailable);
    }

    #[test]
    fn counts_with_unit_suffixes_still_derive() {
        let m = RawMetrics::from_iter([
            ("students", MetricValue::from("450 students")),
            ("faculty_total", MetricValue::from("50 members")),
            ("course_eval", MetricValue::from("4.2/5")),
        ]);
        let r = compute(Some(&m));
        assert_eq!(r.get(IndicatorKey::StudentFacultyRatio), &text("1:9"));
        assert_eq!(r.get(IndicatorKey::CourseEval), &IndicatorValue::Number(4.2));
    }

    #[test]
    fn zero_scores_are_unavailable() {
        let r = compute(Some(&metrics([("course_eval", 0.0), ("experience_eval", 4.0)])));
        assert_eq!(r.get(IndicatorKey::CourseEval), &IndicatorValue::Unavailable);
        assert_eq!(r.get(IndicatorKey::ExperienceEval), &IndicatorValue::Number(4.0));
        assert_eq!(r.get(IndicatorKey::ExperienceEval).to_string(), "4");
    }

    #[test]
    fn one_failure_does_not_affect_others() {
        let r = compute(Some(&metrics([
            ("research_count", 7.0),
            ("faculty_total", 20.0),
            ("course_eval", 3.5),
        ])));
        assert_eq!(r.get(IndicatorKey::StudentFacultyRatio), &IndicatorValue::Unavailable);
        assert_eq!(r.get(IndicatorKey::ResearchPerFaculty), &text("0.35"));
        assert_eq!(r.get(IndicatorKey::CourseEval), &IndicatorValue::Number(3.5));
    }
}
