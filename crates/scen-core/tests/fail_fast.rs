mod test_support;

use std::panic::{self, AssertUnwindSafe};

use scen_core::{inject_fields, EngineConfig, Injection, Phase, RecordingSink, ReportEventKind, RunnerState,
                ScenarioBuilder, ScenarioRunner, StepContexts, StepFailure, StepResult, StepStatus, TestStep};
use test_support::{Journal, JournalStep};

#[test]
fn pass_fail_pass_emits_no_events_for_the_skipped_step() {
    let journal = Journal::new();
    let (j1, j2, j3) = (journal.clone(), journal.clone(), journal.clone());
    let set = ScenarioBuilder::new("FailFast").step("S3", move || JournalStep::passing(&j3))
                                              .step("S1", move || JournalStep::passing(&j1))
                                              .step("S2", move || JournalStep::failing_in(&j2, Phase::Execute))
                                              .build()
                                              .unwrap();
    let sink = RecordingSink::new();
    let report = ScenarioRunner::new(set).run(&sink).expect("not fatal");

    // S, S1 started/finished, S2 started/failed/finished, F
    assert_eq!(sink.event_codes(), "SsfsxfF");
    let names = sink.names_for(report.run_id);
    assert!(!names.iter().any(|n| n == "S3"), "S3 must never reach the sink");
    assert_eq!(report.state, RunnerState::Finished);
    assert_eq!(report.step_names(), vec!["S1", "S2"]);
    assert_eq!(report.skipped, vec!["S3".to_string()]);
    assert!(!report.passed());
    assert_eq!(report.failed_step().map(|s| s.name.as_str()), Some("S2"));

    // S2 falló en execute: post_execute y verify no corren; S3 nunca corre
    assert_eq!(journal.entries(),
               vec!["S1:pre_execute", "S1:execute", "S1:post_execute", "S1:verify", "S2:pre_execute", "S2:execute"]);
}

#[test]
fn failure_event_carries_the_cause() {
    let journal = Journal::new();
    let set = ScenarioBuilder::new("Cause").step("1_fail", move || JournalStep::failing_in(&journal, Phase::Execute))
                                           .build()
                                           .unwrap();
    let sink = RecordingSink::new();
    ScenarioRunner::new(set).run(&sink).unwrap();
    let failure = sink.events()
                      .into_iter()
                      .find_map(|e| match e.kind {
                          ReportEventKind::StepFailed { error, .. } => Some(error),
                          _ => None,
                      })
                      .expect("step failed event");
    assert_eq!(failure, StepFailure::msg("1_fail failed in execute"));
}

#[test]
fn verify_failure_after_successful_execute_halts_the_scenario() {
    let journal = Journal::new();
    let (a, b) = (journal.clone(), journal.clone());
    let set = ScenarioBuilder::new("Verify").step("1_verify_fails", move || JournalStep::failing_in(&a, Phase::Verify))
                                            .step("2_never", move || JournalStep::passing(&b))
                                            .build()
                                            .unwrap();
    let sink = RecordingSink::new();
    let report = ScenarioRunner::new(set).run(&sink).unwrap();
    assert_eq!(sink.event_codes(), "SsxfF");
    assert!(matches!(&report.steps[0].status, StepStatus::Failed(msg) if msg.contains("verify")));
    assert_eq!(report.skipped, vec!["2_never".to_string()]);
    assert_eq!(journal.executed(), vec!["1_verify_fails"]);
}

#[test]
fn panicking_assertion_is_reported_as_step_failure() {
    let journal = Journal::new();
    let (a, b) = (journal.clone(), journal.clone());
    let set = ScenarioBuilder::new("Panics").step("1_asserts", move || JournalStep::panicking_in(&a, Phase::Execute))
                                            .step("2_never", move || JournalStep::passing(&b))
                                            .build()
                                            .unwrap();
    let sink = RecordingSink::new();
    let report = ScenarioRunner::new(set).run(&sink).unwrap();
    assert_eq!(sink.event_codes(), "SsxfF");
    match &report.steps[0].status {
        StepStatus::Failed(msg) => assert!(msg.contains("1_asserts asserted in execute"), "{msg}"),
        other => panic!("unexpected status {other:?}"),
    }
}

#[test]
fn uncaptured_panic_still_closes_step_and_scenario_events() {
    let journal = Journal::new();
    let (a, b) = (journal.clone(), journal.clone());
    let set = ScenarioBuilder::new("RawPanic").step("1_asserts", move || JournalStep::panicking_in(&a, Phase::Execute))
                                              .step("2_never", move || JournalStep::passing(&b))
                                              .build()
                                              .unwrap();
    let runner = ScenarioRunner::new(set).with_config(EngineConfig::default().capture_panics(false));
    let sink = RecordingSink::new();

    let unwound = panic::catch_unwind(AssertUnwindSafe(|| runner.run(&sink)));
    let payload = unwound.err().expect("panic must propagate");
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str),
               Some("1_asserts asserted in execute"));
    assert_eq!(sink.event_codes(), "SsfF");
    assert_eq!(journal.executed(), vec!["1_asserts"]);
}

#[test]
fn uncaptured_setup_panic_still_closes_the_scenario() {
    let journal = Journal::new();
    let (s1, m1) = (journal.clone(), journal.clone());
    let set = ScenarioBuilder::new("RawSetupPanic").setup("1_asserts", move || JournalStep::panicking_in(&s1, Phase::PreExecute))
                                                   .step("1_main", move || JournalStep::passing(&m1))
                                                   .build()
                                                   .unwrap();
    let runner = ScenarioRunner::new(set).with_config(EngineConfig::default().capture_panics(false));
    let sink = RecordingSink::new();

    assert!(panic::catch_unwind(AssertUnwindSafe(|| runner.run(&sink))).is_err());
    assert_eq!(sink.event_codes(), "SF");
    assert_eq!(journal.entries(), vec!["1_asserts:pre_execute"]);
}

#[derive(Default)]
struct NeedsConfig {
    journal: Option<Journal>,
    url: Option<String>,
}

impl TestStep for NeedsConfig {
    fn injections(&self) -> Vec<Injection<Self>> {
        inject_fields![url <- Global("service.url")]
    }

    fn pre_execute(&mut self, ctx: &StepContexts) -> StepResult {
        if let Some(j) = &self.journal {
            j.push(format!("{}:pre_execute", ctx.name()));
        }
        Ok(())
    }

    fn execute(&mut self, ctx: &StepContexts) -> StepResult {
        if let Some(j) = &self.journal {
            j.push(format!("{}:execute", ctx.name()));
        }
        Ok(())
    }
}

#[test]
fn missing_configuration_fails_the_step_before_any_phase() {
    let journal = Journal::new();
    let (a, b) = (journal.clone(), journal.clone());
    let set = ScenarioBuilder::new("Missing").step("1_needs", move || NeedsConfig { journal: Some(a.clone()),
                                                                                      url: None })
                                             .step("2_never", move || JournalStep::passing(&b))
                                             .build()
                                             .unwrap();
    let sink = RecordingSink::new();
    let report = ScenarioRunner::new(set).run(&sink).unwrap();

    assert!(journal.entries().is_empty(), "no phase may run after a failed resolution");
    let cause = sink.events().into_iter().find_map(|e| match e.kind {
                                              ReportEventKind::StepFailed { error, .. } => Some(error),
                                              _ => None,
                                          });
    assert!(cause.is_some_and(|c| c.is_injection()));
    assert_eq!(sink.event_codes(), "SsxfF");
    match &report.steps[0].status {
        StepStatus::Failed(msg) => {
            assert!(msg.contains("service.url"), "{msg}");
            assert!(msg.contains("GLOBAL"), "{msg}");
        }
        other => panic!("unexpected status {other:?}"),
    }
    assert_eq!(report.skipped, vec!["2_never".to_string()]);
}

#[test]
fn all_passing_scenario_reports_every_step() {
    let journal = Journal::new();
    let (a, b) = (journal.clone(), journal.clone());
    let set = ScenarioBuilder::new("Green").step("1_a", move || JournalStep::passing(&a))
                                           .step("2_b", move || JournalStep::passing(&b))
                                           .build()
                                           .unwrap();
    let sink = RecordingSink::new();
    let report = ScenarioRunner::new(set).run(&sink).unwrap();
    assert!(report.passed());
    assert!(report.skipped.is_empty());
    assert_eq!(sink.event_codes(), "SsfsfF");
}
