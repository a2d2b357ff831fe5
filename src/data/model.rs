use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// MetricValue – a single raw statistic
// ---------------------------------------------------------------------------

/// A raw statistic as it appears in the dataset.
///
/// Upstream files mix JSON numbers and numeric strings (`"450"`, `" 4.2 "`,
/// `"50 members"`), so both are kept and interpreted lazily. Everything else collapses to
/// [`MetricValue::Missing`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "JsonValue")]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Missing,
}

impl From<JsonValue> for MetricValue {
    fn from(val: JsonValue) -> Self {
        match val {
            JsonValue::Number(n) => n
                .as_f64()
                .map(MetricValue::Number)
                .unwrap_or(MetricValue::Missing),
            JsonValue::String(s) => MetricValue::Text(s),
            _ => MetricValue::Missing,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(v: f64) -> Self {
        MetricValue::Number(v)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        MetricValue::Text(s.to_string())
    }
}

impl MetricValue {
    /// Interpret the value as a finite `f64`.
    ///
    /// Strings are read up to the end of their leading number, so unit
    /// suffixes (`"4.2/5"`) are ignored. `NaN` and infinities count as no
    /// data.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            MetricValue::Number(v) => *v,
            MetricValue::Text(s) => leading_float(s)?,
            MetricValue::Missing => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Whether there is anything to show for this value in the raw-data grid.
    pub fn is_present(&self) -> bool {
        match self {
            MetricValue::Number(_) => true,
            MetricValue::Text(s) => !s.is_empty(),
            MetricValue::Missing => false,
        }
    }
}

/// Parse the longest decimal literal at the start of `s`, after leading
/// whitespace: `[sign] digits [. digits] [e [sign] digits]`, with at least one
/// mantissa digit. An exponent marker without digits is left unread.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(v) => write!(f, "{v}"),
            MetricValue::Text(s) => write!(f, "{s}"),
            MetricValue::Missing => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// RawMetrics – one section of one year
// ---------------------------------------------------------------------------

/// Flat metric-name → value mapping for a single section of a year.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawMetrics {
    values: BTreeMap<String, MetricValue>,
}

impl RawMetrics {
    pub fn get(&self, metric: &str) -> Option<&MetricValue> {
        self.values.get(metric)
    }

    /// Numeric reading of `metric`, or `None` when absent or unparsable.
    pub fn number(&self, metric: &str) -> Option<f64> {
        self.get(metric).and_then(MetricValue::as_f64)
    }
}

impl<K, V> FromIterator<(K, V)> for RawMetrics
where
    K: Into<String>,
    V: Into<MetricValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RawMetrics {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// YearRecord – all sections recorded for a year
// ---------------------------------------------------------------------------

/// Section key (e.g. `"All_All"`, `"Male_All"`) → metrics, in document order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct YearRecord {
    pub sections: IndexMap<String, RawMetrics>,
}

impl<K: Into<String>> FromIterator<(K, RawMetrics)> for YearRecord {
    fn from_iter<I: IntoIterator<Item = (K, RawMetrics)>>(iter: I) -> Self {
        YearRecord {
            sections: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// DegreeLevel
// ---------------------------------------------------------------------------

/// Academic level of a program, recognised from its free-text degree label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DegreeLevel {
    Bachelor,
    Master,
    Doctorate,
    Other,
}

impl DegreeLevel {
    /// Classify a dataset degree label. Arabic and English spellings are
    /// accepted; anything unrecognised is [`DegreeLevel::Other`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "بكالوريوس" | "البكالوريوس" | "bachelor" | "bachelor's" | "bachelors" | "ba"
            | "bsc" => DegreeLevel::Bachelor,
            "الماجستير" | "ماجستير" | "master" | "master's" | "masters" | "ma" | "msc" => {
                DegreeLevel::Master
            }
            "دكتوراه" | "الدكتوراه" | "doctorate" | "doctoral" | "phd" => DegreeLevel::Doctorate,
            _ => DegreeLevel::Other,
        }
    }

    /// Master's and doctoral programs see the graduate-only indicators.
    pub fn is_graduate(self) -> bool {
        matches!(self, DegreeLevel::Master | DegreeLevel::Doctorate)
    }
}

// ---------------------------------------------------------------------------
// Program
// ---------------------------------------------------------------------------

/// One academic program with its yearly statistics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub name: String,
    /// Degree label exactly as written in the dataset.
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub years: BTreeMap<String, YearRecord>,
}

impl Program {
    pub fn degree_level(&self) -> DegreeLevel {
        DegreeLevel::from_label(&self.degree)
    }

    /// Year labels in ascending (lexicographic) order.
    pub fn year_labels(&self) -> Vec<String> {
        self.years.keys().cloned().collect()
    }

    /// Label used by the program selector.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.degree)
    }
}

// ---------------------------------------------------------------------------
// ProgramCatalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset, in the order the source file lists programs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgramCatalog {
    pub programs: Vec<Program>,
}

impl ProgramCatalog {
    pub fn from_programs(programs: Vec<Program>) -> Self {
        ProgramCatalog { programs }
    }

    pub fn get(&self, index: usize) -> Option<&Program> {
        self.programs.get(index)
    }

    /// Number of programs.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_value_parses_numbers_and_numeric_strings() {
        assert_eq!(MetricValue::Number(450.0).as_f64(), Some(450.0));
        assert_eq!(MetricValue::from(" 4.25 ").as_f64(), Some(4.25));
        assert_eq!(MetricValue::from("n/a").as_f64(), None);
        assert_eq!(MetricValue::from("").as_f64(), None);
        assert_eq!(MetricValue::from("NaN").as_f64(), None);
        assert_eq!(MetricValue::from("inf").as_f64(), None);
        assert_eq!(MetricValue::Missing.as_f64(), None);
    }

    #[test]
    fn numeric_strings_read_their_leading_number() {
        assert_eq!(MetricValue::from("50 members").as_f64(), Some(50.0));
        assert_eq!(MetricValue::from("4.2/5").as_f64(), Some(4.2));
        assert_eq!(MetricValue::from("  -3.5e2x").as_f64(), Some(-350.0));
        assert_eq!(MetricValue::from("12abc").as_f64(), Some(12.0));
        assert_eq!(MetricValue::from("1e").as_f64(), Some(1.0));
        assert_eq!(MetricValue::from("7e+").as_f64(), Some(7.0));
        assert_eq!(MetricValue::from(".5").as_f64(), Some(0.5));
        assert_eq!(MetricValue::from("3.").as_f64(), Some(3.0));
        assert_eq!(MetricValue::from("+8 staff").as_f64(), Some(8.0));
        assert_eq!(MetricValue::from(".").as_f64(), None);
        assert_eq!(MetricValue::from("-").as_f64(), None);
        assert_eq!(MetricValue::from("abc 12").as_f64(), None);
        assert_eq!(MetricValue::from("Infinity").as_f64(), None);
        assert_eq!(MetricValue::from("1e999").as_f64(), None);
    }

    #[test]
    fn metric_value_from_json_collapses_non_scalars() {
        assert_eq!(MetricValue::from(serde_json::json!(12)), MetricValue::Number(12.0));
        assert_eq!(MetricValue::from(serde_json::json!("7")), MetricValue::from("7"));
        assert_eq!(MetricValue::from(serde_json::json!(null)), MetricValue::Missing);
        assert_eq!(MetricValue::from(serde_json::json!(true)), MetricValue::Missing);
        assert_eq!(MetricValue::from(serde_json::json!([1, 2])), MetricValue::Missing);
    }

    #[test]
    fn metric_value_display_drops_trailing_zero_fraction() {
        assert_eq!(MetricValue::Number(450.0).to_string(), "450");
        assert_eq!(MetricValue::Number(4.25).to_string(), "4.25");
        assert!(!MetricValue::from("").is_present());
        assert!(MetricValue::from("0").is_present());
    }

    #[test]
    fn degree_levels_from_arabic_and_english_labels() {
        assert_eq!(DegreeLevel::from_label("بكالوريوس"), DegreeLevel::Bachelor);
        assert_eq!(DegreeLevel::from_label("الماجستير"), DegreeLevel::Master);
        assert_eq!(DegreeLevel::from_label(" PhD "), DegreeLevel::Doctorate);
        assert_eq!(DegreeLevel::from_label("دكتوراه"), DegreeLevel::Doctorate);
        assert_eq!(DegreeLevel::from_label("diploma"), DegreeLevel::Other);
        assert!(DegreeLevel::Master.is_graduate());
        assert!(!DegreeLevel::Bachelor.is_graduate());
        assert!(!DegreeLevel::Other.is_graduate());
    }

    #[test]
    fn sections_keep_document_order() {
        let year: YearRecord =
            serde_json::from_str(r#"{"Male_All": {"students": 1}, "All_Male": {}, "All_All": {}}"#)
                .unwrap();
        let keys: Vec<&str> = year.sections.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Male_All", "All_Male", "All_All"]);
    }

    #[test]
    fn program_years_sort_lexicographically() {
        let program: Program = serde_json::from_str(
            r#"{"name": "Law", "degree": "بكالوريوس", "years": {"1446": {}, "1444": {}, "1445": {}}}"#,
        )
        .unwrap();
        assert_eq!(program.year_labels(), ["1444", "1445", "1446"]);
        assert_eq!(program.display_label(), "Law (بكالوريوس)");
    }
}
