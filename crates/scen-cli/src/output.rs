//! Presentación de resultados en texto plano o JSON.

use std::fmt::Write as _;

use serde::Serialize;
use serde_json::Value;
use scen_core::{RecordingSink, ScenarioReport, StepDescriptorSet, StepStatus, SuiteReport};

pub fn text(names: &[String], report: &SuiteReport) -> String {
    let mut out = String::new();
    for (name, result) in names.iter().zip(&report.scenarios) {
        match result {
            Ok(r) => {
                let verdict = if r.passed() { "PASSED" } else { "FAILED" };
                let _ = writeln!(out, "scenario {} [{}]: {}", r.scenario, r.run_id, verdict);
                for step in &r.steps {
                    match &step.status {
                        StepStatus::Passed => {
                            let _ = writeln!(out, "  PASS {}", step.name);
                        }
                        StepStatus::Failed(error) => {
                            let _ = writeln!(out, "  FAIL {}: {}", step.name, error);
                        }
                    }
                }
                for skipped in &r.skipped {
                    let _ = writeln!(out, "  SKIP {skipped}");
                }
            }
            Err(e) => {
                let _ = writeln!(out, "scenario {name}: ABORTED ({e})");
            }
        }
    }
    let total = report.len();
    let passed = report.reports().filter(|r| r.passed()).count();
    let _ = write!(out, "{passed}/{total} scenario(s) passed");
    out
}

#[derive(Serialize)]
#[serde(untagged)]
enum ScenarioEntry<'a> {
    Completed {
        #[serde(flatten)]
        report: &'a ScenarioReport,
        events: Value,
    },
    Aborted {
        scenario: &'a str,
        error: String,
    },
}

pub fn json(names: &[String], report: &SuiteReport, recording: &RecordingSink) -> serde_json::Result<String> {
    let mut entries = Vec::with_capacity(names.len());
    for (name, result) in names.iter().zip(&report.scenarios) {
        entries.push(match result {
                         Ok(r) => ScenarioEntry::Completed { report: r,
                                                             events: serde_json::to_value(recording.events_for(r.run_id))? },
                         Err(e) => ScenarioEntry::Aborted { scenario: name,
                                                            error: e.to_string() },
                     });
    }
    serde_json::to_string_pretty(&serde_json::json!({
        "passed": report.passed(),
        "scenarios": entries,
    }))
}

pub fn descriptions(sets: &[StepDescriptorSet]) -> String {
    let mut out = String::new();
    for set in sets {
        let suite = set.suite_description();
        let _ = writeln!(out, "{} {}", suite.id, suite);
        for d in set.ordered_setup_descriptors() {
            let _ = writeln!(out, "  setup {}", d.name());
        }
        for d in set.descriptions() {
            let _ = writeln!(out, "  {} {}", d.id, d.display_name());
        }
    }
    out.trim_end().to_string()
}
