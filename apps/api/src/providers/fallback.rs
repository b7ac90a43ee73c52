//! Synthetic placeholder listings returned when a provider call fails.

use chrono::{Duration, Utc};

use crate::models::job::JobRecord;

struct Template {
    title_prefix: &'static str,
    title_suffix: &'static str,
    company: &'static str,
    salary: &'static str,
    description: &'static str,
}

const TEMPLATES: [Template; 3] = [
    Template {
        title_prefix: "Senior ",
        title_suffix: " Developer",
        company: "TechCorp Solutions",
        salary: "£45,000 - £65,000",
        description: "Exciting opportunity for an experienced professional to join our growing engineering team.",
    },
    Template {
        title_prefix: "",
        title_suffix: " Specialist",
        company: "Digital Innovations Ltd",
        salary: "£35,000 - £50,000",
        description: "Work on modern tooling with a collaborative product team and flexible hours.",
    },
    Template {
        title_prefix: "Graduate ",
        title_suffix: " Analyst",
        company: "Future Systems Group",
        salary: "£28,000 - £38,000",
        description: "Entry-level role with structured mentoring and a clear progression path.",
    },
];

/// Builds exactly three deterministic placeholder records for a failed
/// `source`. The only non-determinism is the current time: one shared
/// millisecond stamp makes the ids unique per call, and the posted dates
/// step back one day per record starting from today. No I/O, never fails.
pub fn fallback_jobs(keywords: &str, location: &str, source: &str) -> Vec<JobRecord> {
    let now = Utc::now();
    let stamp = now.timestamp_millis();

    TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, t)| JobRecord {
            id: format!("fallback-{}-{stamp}", i + 1),
            title: format!("{}{keywords}{}", t.title_prefix, t.title_suffix),
            company: t.company.to_string(),
            location: location.to_string(),
            description: t.description.to_string(),
            salary: t.salary.to_string(),
            url: format!("https://example.com/jobs/fallback-{}", i + 1),
            posted: (now - Duration::days(i as i64)).format("%d/%m/%Y").to_string(),
            source: source.to_string(),
        })
        .collect()
}
