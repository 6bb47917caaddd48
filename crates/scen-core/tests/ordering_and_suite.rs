mod test_support;

use std::sync::Arc;

use scen_core::{EngineConfig, Phase, RecordingSink, ScenarioBuilder, ScenarioRunner, ScenarioSuite, StepDescriptor,
                StepDescriptorSet};
use test_support::{Journal, JournalStep};

fn build(journal: &Journal, names: &[&'static str]) -> StepDescriptorSet {
    let mut builder = ScenarioBuilder::new("Ordering");
    for name in names {
        let j = journal.clone();
        builder = builder.descriptor(StepDescriptor::main(*name, move || JournalStep::passing(&j)));
    }
    builder.build().unwrap()
}

#[test]
fn execution_order_does_not_depend_on_declaration_order() {
    let forward = Journal::new();
    let backward = Journal::new();
    ScenarioRunner::new(build(&forward, &["1_a", "2_b", "3_c"])).run(&RecordingSink::new())
                                                              .unwrap();
    ScenarioRunner::new(build(&backward, &["3_c", "1_a", "2_b"])).run(&RecordingSink::new())
                                                               .unwrap();
    assert_eq!(forward.executed(), vec!["1_a", "2_b", "3_c"]);
    assert_eq!(forward.entries(), backward.entries());
}

#[test]
fn reruns_produce_the_same_trace_and_descriptions() {
    let journal = Journal::new();
    let runner = ScenarioRunner::new(build(&journal, &["2_b", "1_a"]));
    let sink_a = RecordingSink::new();
    let sink_b = RecordingSink::new();
    let a = runner.run(&sink_a).unwrap();
    let b = runner.run(&sink_b).unwrap();

    assert_ne!(a.run_id, b.run_id);
    assert_eq!(sink_a.event_codes(), sink_b.event_codes());
    let ids = |sink: &RecordingSink| sink.events().into_iter().map(|e| e.kind.description().id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(&sink_a), ids(&sink_b));
}

fn two_steps(journal: &Journal, name: String, fail_second: bool) -> Arc<StepDescriptorSet> {
    let (a, b) = (journal.clone(), journal.clone());
    let set = ScenarioBuilder::new(name).step("1_a", move || JournalStep::passing(&a))
                                        .step("2_b", move || {
                                            if fail_second {
                                                JournalStep::failing_in(&b, Phase::Execute)
                                            } else {
                                                JournalStep::passing(&b)
                                            }
                                        })
                                        .build()
                                        .unwrap();
    Arc::new(set)
}

#[test]
fn parallel_suite_keeps_per_scenario_event_order() {
    let journal = Journal::new();
    let scenarios: Vec<_> = (0..4).map(|i| two_steps(&journal, format!("Scenario{i}"), i % 2 == 1)).collect();
    let mut suite = ScenarioSuite::new(EngineConfig::default().parallel(true).worker_threads(2));
    for s in &scenarios {
        suite.push(Arc::clone(s));
    }
    let sink = RecordingSink::new();
    let report = suite.run(&sink);

    assert_eq!(report.len(), 4);
    assert!(!report.passed());
    assert_eq!(report.fatal_errors().count(), 0);
    for scenario in report.reports() {
        let expected = if scenario.passed() { "SsfsfF" } else { "SsfsxfF" };
        assert_eq!(sink.event_codes_for(scenario.run_id), expected, "{}", scenario.scenario);
    }
    assert_eq!(report.reports().filter(|r| r.passed()).count(), 2);
}

#[test]
fn sequential_suite_reports_in_declaration_order() {
    let journal = Journal::new();
    let (a, b) = (journal.clone(), journal.clone());
    let suite = ScenarioSuite::default().add(ScenarioBuilder::new("B").step("1", move || JournalStep::passing(&a))
                                                                      .build()
                                                                      .unwrap())
                                        .add(ScenarioBuilder::new("A").step("1", move || JournalStep::passing(&b))
                                                                      .build()
                                                                      .unwrap());
    let report = suite.run(&RecordingSink::new());
    let names: Vec<_> = report.reports().map(|r| r.scenario.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}
