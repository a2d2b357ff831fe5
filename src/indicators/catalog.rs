//! Static indicator and raw-metric tables.
//!
//! Everything here is immutable and lives for the whole process; callers go
//! through [`indicators`] and [`raw_metric_labels`] rather than the arrays.

use std::fmt;

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Display language for labels, units and placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "ar")]
    Arabic,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Arabic];

    pub fn strings(self) -> &'static UiStrings {
        match self {
            Locale::English => &EN_STRINGS,
            Locale::Arabic => &AR_STRINGS,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "English"),
            Locale::Arabic => write!(f, "العربية"),
        }
    }
}

/// A label in every supported language.
#[derive(Debug, Clone, Copy)]
pub struct Label {
    pub en: &'static str,
    pub ar: &'static str,
}

impl Label {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.en,
            Locale::Arabic => self.ar,
        }
    }
}

// ---------------------------------------------------------------------------
// Indicator definitions
// ---------------------------------------------------------------------------

/// Identifies one of the thirteen quality indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IndicatorKey {
    ExperienceEval,
    CourseEval,
    GraduationRate,
    RetentionRate,
    StudentPerformance,
    EmploymentRate,
    EmployerEval,
    StudentFacultyRatio,
    PublicationPct,
    ResearchPerFaculty,
    CitationsPerFaculty,
    StudentPublication,
    Patents,
}

impl IndicatorKey {
    pub const ALL: [IndicatorKey; 13] = [
        IndicatorKey::ExperienceEval,
        IndicatorKey::CourseEval,
        IndicatorKey::GraduationRate,
        IndicatorKey::RetentionRate,
        IndicatorKey::StudentPerformance,
        IndicatorKey::EmploymentRate,
        IndicatorKey::EmployerEval,
        IndicatorKey::StudentFacultyRatio,
        IndicatorKey::PublicationPct,
        IndicatorKey::ResearchPerFaculty,
        IndicatorKey::CitationsPerFaculty,
        IndicatorKey::StudentPublication,
        IndicatorKey::Patents,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IndicatorKey::ExperienceEval => "experience_eval",
            IndicatorKey::CourseEval => "course_eval",
            IndicatorKey::GraduationRate => "graduation_rate",
            IndicatorKey::RetentionRate => "retention_rate",
            IndicatorKey::StudentPerformance => "student_performance",
            IndicatorKey::EmploymentRate => "employment_rate",
            IndicatorKey::EmployerEval => "employer_eval",
            IndicatorKey::StudentFacultyRatio => "student_faculty_ratio",
            IndicatorKey::PublicationPct => "publication_pct",
            IndicatorKey::ResearchPerFaculty => "research_per_faculty",
            IndicatorKey::CitationsPerFaculty => "citations_per_faculty",
            IndicatorKey::StudentPublication => "student_publication",
            IndicatorKey::Patents => "patents",
        }
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one indicator card.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorDefinition {
    /// 1-based display order.
    pub id: u8,
    pub key: IndicatorKey,
    pub name: Label,
    pub unit: Label,
    /// Derived from several raw metrics rather than read directly.
    /// Informational only.
    pub calculated: bool,
    /// Shown only for master's and doctoral programs.
    pub grad_only: bool,
}

const SCORE_1_5: Label = Label {
    en: "Score (1-5)",
    ar: "درجة (1-5)",
};
const PERCENT: Label = Label { en: "%", ar: "%" };

static INDICATORS: [IndicatorDefinition; 13] = [
    IndicatorDefinition {
        id: 1,
        key: IndicatorKey::ExperienceEval,
        name: Label {
            en: "Student rating of learning experience quality",
            ar: "تقويم الطالب لجودة خبرات التعلم",
        },
        unit: SCORE_1_5,
        calculated: false,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 2,
        key: IndicatorKey::CourseEval,
        name: Label {
            en: "Student rating of course quality",
            ar: "تقييم الطالب لجودة المقررات",
        },
        unit: SCORE_1_5,
        calculated: false,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 3,
        key: IndicatorKey::GraduationRate,
        name: Label {
            en: "On-time graduation rate",
            ar: "معدّل التخرج بالوقت المحدد",
        },
        unit: PERCENT,
        calculated: true,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 4,
        key: IndicatorKey::RetentionRate,
        name: Label {
            en: "First-year student retention rate",
            ar: "معدّل استبقاء طلاب السنة الأولى",
        },
        unit: PERCENT,
        calculated: true,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 5,
        key: IndicatorKey::StudentPerformance,
        name: Label {
            en: "Student performance level (exams)",
            ar: "مستوى أداء الطالب (اختبارات)",
        },
        unit: PERCENT,
        calculated: false,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 6,
        key: IndicatorKey::EmploymentRate,
        name: Label {
            en: "Graduate employment and further study",
            ar: "توظيف الخريجين والدراسات العليا",
        },
        unit: PERCENT,
        calculated: false,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 7,
        key: IndicatorKey::EmployerEval,
        name: Label {
            en: "Employer rating of graduates",
            ar: "تقويم جهات التوظيف",
        },
        unit: SCORE_1_5,
        calculated: false,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 8,
        key: IndicatorKey::StudentFacultyRatio,
        name: Label {
            en: "Student to faculty ratio",
            ar: "نسبة الطلاب/هيئة التدريس",
        },
        unit: Label {
            en: "Ratio",
            ar: "نسبة",
        },
        calculated: true,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 9,
        key: IndicatorKey::PublicationPct,
        name: Label {
            en: "Faculty publishing percentage",
            ar: "النسبة المئوية للنشر العلمي",
        },
        unit: PERCENT,
        calculated: true,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 10,
        key: IndicatorKey::ResearchPerFaculty,
        name: Label {
            en: "Research papers per faculty member",
            ar: "معدّل البحوث/عضو هيئة تدريس",
        },
        unit: Label {
            en: "Papers",
            ar: "بحث",
        },
        calculated: true,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 11,
        key: IndicatorKey::CitationsPerFaculty,
        name: Label {
            en: "Citations per faculty member",
            ar: "معدّل الاقتباسات/عضو هيئة تدريس",
        },
        unit: Label {
            en: "Citations",
            ar: "اقتباس",
        },
        calculated: true,
        grad_only: false,
    },
    IndicatorDefinition {
        id: 12,
        key: IndicatorKey::StudentPublication,
        name: Label {
            en: "Student publishing percentage",
            ar: "نسبة النشر العلمي للطلاب",
        },
        unit: PERCENT,
        calculated: false,
        grad_only: true,
    },
    IndicatorDefinition {
        id: 13,
        key: IndicatorKey::Patents,
        name: Label {
            en: "Patents ratio",
            ar: "نسبة براءات الاختراع",
        },
        unit: Label {
            en: "Patents",
            ar: "براءة",
        },
        calculated: false,
        grad_only: true,
    },
];

/// All indicator definitions in display order.
pub fn indicators() -> &'static [IndicatorDefinition] {
    &INDICATORS
}

// ---------------------------------------------------------------------------
// Raw metric labels
// ---------------------------------------------------------------------------

/// A raw dataset field and its row label.
#[derive(Debug, Clone, Copy)]
pub struct RawMetricLabel {
    pub key: &'static str,
    pub label: Label,
}

static RAW_METRIC_LABELS: [RawMetricLabel; 12] = [
    RawMetricLabel {
        key: "students",
        label: Label {
            en: "Enrolled regular students",
            ar: "عدد الطلاب المنتظمين",
        },
    },
    RawMetricLabel {
        key: "graduates",
        label: Label {
            en: "Graduates",
            ar: "عدد الخريجين",
        },
    },
    RawMetricLabel {
        key: "faculty_total",
        label: Label {
            en: "Total faculty members",
            ar: "إجمالي أعضاء هيئة التدريس",
        },
    },
    RawMetricLabel {
        key: "faculty_phd",
        label: Label {
            en: "Faculty members (doctorate+)",
            ar: "أعضاء هيئة التدريس (دكتور+)",
        },
    },
    RawMetricLabel {
        key: "faculty_male",
        label: Label {
            en: "Male faculty members",
            ar: "أعضاء هيئة التدريس الذكور",
        },
    },
    RawMetricLabel {
        key: "faculty_published",
        label: Label {
            en: "Faculty members who published",
            ar: "الأعضاء الذين نشروا بحثاً",
        },
    },
    RawMetricLabel {
        key: "research_count",
        label: Label {
            en: "Published research papers",
            ar: "عدد الأبحاث المنشورة",
        },
    },
    RawMetricLabel {
        key: "citations",
        label: Label {
            en: "Total citations",
            ar: "إجمالي الاقتباسات",
        },
    },
    RawMetricLabel {
        key: "sections_total",
        label: Label {
            en: "Total class sections",
            ar: "عدد الشعب الإجمالي",
        },
    },
    RawMetricLabel {
        key: "sections_male",
        label: Label {
            en: "Male class sections",
            ar: "عدد شعب الذكور",
        },
    },
    RawMetricLabel {
        key: "course_eval",
        label: Label {
            en: "Course quality rating",
            ar: "تقييم جودة المقررات",
        },
    },
    RawMetricLabel {
        key: "experience_eval",
        label: Label {
            en: "Program experience rating",
            ar: "تقييم خبرة البرنامج",
        },
    },
];

/// Raw-data rows in display order.
pub fn raw_metric_labels() -> &'static [RawMetricLabel] {
    &RAW_METRIC_LABELS
}

// ---------------------------------------------------------------------------
// UI strings
// ---------------------------------------------------------------------------

/// Fixed UI text for one locale.
#[derive(Debug)]
pub struct UiStrings {
    pub window_title: &'static str,
    pub program_heading: &'static str,
    pub choose_program: &'static str,
    pub year_heading: &'static str,
    pub choose_year: &'static str,
    pub year_option: &'static str,
    pub show_button: &'static str,
    pub academic_year: &'static str,
    pub indicators_heading: &'static str,
    pub raw_data_heading: &'static str,
    pub not_available: &'static str,
    pub empty_value: &'static str,
    pub no_data_notice: &'static str,
    pub empty_hint: &'static str,
    pub loading: &'static str,
    pub no_programs: &'static str,
    pub metric_column: &'static str,
    pub value_column: &'static str,
}

static EN_STRINGS: UiStrings = UiStrings {
    window_title: "Program Quality Indicators",
    program_heading: "Program",
    choose_program: "-- Select program --",
    year_heading: "Year",
    choose_year: "-- Select year --",
    year_option: "Year",
    show_button: "Show indicators",
    academic_year: "Academic year:",
    indicators_heading: "Performance indicators",
    raw_data_heading: "Raw data",
    not_available: "Not available",
    empty_value: "—",
    no_data_notice: "No data available",
    empty_hint: "Choose a program and a year, then press \"Show indicators\".",
    loading: "Loading programs…",
    no_programs: "No programs loaded.",
    metric_column: "Metric",
    value_column: "Value",
};

static AR_STRINGS: UiStrings = UiStrings {
    window_title: "مؤشرات الأداء",
    program_heading: "البرنامج",
    choose_program: "-- اختر البرنامج --",
    year_heading: "السنة",
    choose_year: "-- اختر السنة --",
    year_option: "سنة",
    show_button: "عرض المؤشرات",
    academic_year: "السنة الدراسية:",
    indicators_heading: "مؤشرات الأداء",
    raw_data_heading: "البيانات الخام",
    not_available: "غير متوفر",
    empty_value: "—",
    no_data_notice: "لا توجد بيانات متاحة",
    empty_hint: "اختر البرنامج والسنة ثم اضغط \"عرض المؤشرات\".",
    loading: "جارٍ تحميل البرامج…",
    no_programs: "لا توجد برامج.",
    metric_column: "البيان",
    value_column: "القيمة",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_table_is_ordered_and_complete() {
        let defs = indicators();
        assert_eq!(defs.len(), 13);
        for (i, def) in defs.iter().enumerate() {
            assert_eq!(def.id as usize, i + 1);
            assert_eq!(def.key, IndicatorKey::ALL[i]);
        }
    }

    #[test]
    fn only_student_publication_and_patents_are_grad_only() {
        let grad: Vec<IndicatorKey> = indicators()
            .iter()
            .filter(|d| d.grad_only)
            .map(|d| d.key)
            .collect();
        assert_eq!(grad, [IndicatorKey::StudentPublication, IndicatorKey::Patents]);
    }

    #[test]
    fn raw_labels_cover_the_twelve_metrics() {
        let keys: Vec<&str> = raw_metric_labels().iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            [
                "students",
                "graduates",
                "faculty_total",
                "faculty_phd",
                "faculty_male",
                "faculty_published",
                "research_count",
                "citations",
                "sections_total",
                "sections_male",
                "course_eval",
                "experience_eval",
            ]
        );
    }

    #[test]
    fn labels_switch_with_locale() {
        let def = indicators()
            .iter()
            .find(|d| d.key == IndicatorKey::Patents)
            .unwrap();
        assert_eq!(def.unit.get(Locale::English), "Patents");
        assert_eq!(def.unit.get(Locale::Arabic), "براءة");
        assert_eq!(Locale::Arabic.strings().not_available, "غير متوفر");
    }
}
