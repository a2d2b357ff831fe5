use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Map, Value};

/// Write a synthetic program dataset for the dashboard.
#[derive(Debug, Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Output file.
    #[arg(default_value = "data/programs.json")]
    output: PathBuf,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as u64
    }

    /// Rating on the 1–5 scale with two decimals.
    fn rating(&mut self) -> f64 {
        (300.0 + self.next_f64() * 180.0).round() / 100.0
    }
}

/// (name, degree label, typical enrolment)
const PROGRAMS: [(&str, &str, u64); 5] = [
    ("الشريعة", "بكالوريوس", 900),
    ("الأنظمة", "بكالوريوس", 1200),
    ("الفقه المقارن", "الماجستير", 120),
    ("السياسة الشرعية", "الماجستير", 90),
    ("الفقه وأصوله", "دكتوراه", 40),
];

const YEARS: [&str; 4] = ["1443", "1444", "1445", "1446"];

fn section(rng: &mut SimpleRng, students: u64, sparse: bool) -> Value {
    let faculty_total = (students / rng.range(8, 20)).max(3);
    let faculty_published = rng.range(faculty_total / 4, faculty_total);
    let research_count = faculty_published + rng.range(0, faculty_total * 2);
    let sections_total = (students / 35).max(2);

    let mut obj = Map::new();
    obj.insert("students".into(), json!(students));
    obj.insert("graduates".into(), json!(students / rng.range(4, 6)));
    obj.insert("faculty_total".into(), json!(faculty_total));
    obj.insert("faculty_phd".into(), json!(rng.range(faculty_total * 6 / 10, faculty_total)));
    obj.insert("faculty_male".into(), json!(rng.range(faculty_total / 2, faculty_total)));
    obj.insert("faculty_published".into(), json!(faculty_published));
    obj.insert("research_count".into(), json!(research_count));
    obj.insert("citations".into(), json!(research_count * rng.range(2, 9)));
    obj.insert("sections_total".into(), json!(sections_total));
    obj.insert("sections_male".into(), json!(sections_total / 2));

    if sparse {
        // Older exports: evaluations missing, counts stored as text.
        obj.insert("course_eval".into(), json!(""));
        obj.insert("citations".into(), Value::Null);
        obj.insert("students".into(), json!(students.to_string()));
    } else {
        obj.insert("course_eval".into(), json!(rng.rating()));
        obj.insert("experience_eval".into(), json!(format!("{:.2}", rng.rating())));
    }
    Value::Object(obj)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    let mut programs = Vec::with_capacity(PROGRAMS.len());
    for &(name, degree, enrolment) in &PROGRAMS {
        let mut years = Map::new();
        for (i, &year) in YEARS.iter().enumerate() {
            let students = enrolment + rng.range(0, enrolment / 5);
            let sparse = i == 0;

            let mut sections = Map::new();
            // Some exports only carry a single-axis aggregate.
            let key = if rng.next_f64() < 0.2 { "All_all" } else { "All_All" };
            sections.insert(key.into(), section(&mut rng, students, sparse));
            sections.insert(
                "Male_All".into(),
                section(&mut rng, students * 11 / 20, sparse),
            );
            years.insert(year.into(), Value::Object(sections));
        }
        programs.push(json!({
            "name": name,
            "degree": degree,
            "years": years,
        }));
    }

    if let Some(dir) = args.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let text = serde_json::to_string_pretty(&programs).context("serializing programs")?;
    fs::write(&args.output, text)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} programs ({} years each) to {}",
        programs.len(),
        YEARS.len(),
        args.output.display()
    );
    Ok(())
}
