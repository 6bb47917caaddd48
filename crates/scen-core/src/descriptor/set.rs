use std::collections::HashSet;

use indexmap::IndexMap;

use super::{Description, StepDescriptor, StepKind};
use crate::errors::ConfigurationError;

/// Conjunto ordenado de descriptores de un escenario.
///
/// Se construye una sola vez antes de ejecutar. Ambas listas quedan
/// ordenadas por nombre (orden lexicográfico, sort estable) y las
/// `Description` de los steps principales se cachean en ese mismo orden.
#[derive(Debug, Clone)]
pub struct StepDescriptorSet {
    scenario: String,
    setup: Vec<StepDescriptor>,
    main: Vec<StepDescriptor>,
    suite_description: Description,
    descriptions: IndexMap<String, Description>,
}

impl StepDescriptorSet {
    pub fn new(scenario: impl Into<String>,
               setup: Vec<StepDescriptor>,
               main: Vec<StepDescriptor>)
               -> Result<Self, ConfigurationError> {
        let scenario = scenario.into();
        let setup = order(setup, StepKind::Setup)?;
        let main = order(main, StepKind::Main)?;
        let descriptions = main.iter()
                               .map(|d| (d.name().to_string(), Description::step(&scenario, d.name())))
                               .collect();
        Ok(Self { suite_description: Description::suite(&scenario),
                  scenario,
                  setup,
                  main,
                  descriptions })
    }

    pub fn scenario_name(&self) -> &str {
        &self.scenario
    }

    pub fn ordered_setup_descriptors(&self) -> &[StepDescriptor] {
        &self.setup
    }

    pub fn ordered_main_descriptors(&self) -> &[StepDescriptor] {
        &self.main
    }

    /// Identidad cacheada de un step principal.
    pub fn description_for(&self, name: &str) -> Option<&Description> {
        self.descriptions.get(name)
    }

    /// Identidad del escenario completo.
    pub fn suite_description(&self) -> &Description {
        &self.suite_description
    }

    /// Descripciones de los steps principales, en orden de ejecución.
    pub fn descriptions(&self) -> impl Iterator<Item = &Description> {
        self.descriptions.values()
    }
}

fn order(mut descriptors: Vec<StepDescriptor>, kind: StepKind) -> Result<Vec<StepDescriptor>, ConfigurationError> {
    let mut seen = HashSet::with_capacity(descriptors.len());
    for d in &descriptors {
        if d.name().is_empty() {
            return Err(ConfigurationError::EmptyStepName { kind });
        }
        if d.kind() != kind {
            return Err(ConfigurationError::InvalidPlan(format!("step {} declared as {} but listed as {}",
                                                               d.name(),
                                                               d.kind(),
                                                               kind)));
        }
        if !seen.insert(d.name().to_string()) {
            return Err(ConfigurationError::DuplicateStepName { kind,
                                                               name: d.name().to_string() });
        }
    }
    descriptors.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StepResult;
    use crate::step::{StepContexts, TestStep};

    struct Noop;
    impl TestStep for Noop {
        fn execute(&mut self, _ctx: &StepContexts) -> StepResult {
            Ok(())
        }
    }

    fn main_named(names: &[&str]) -> Vec<StepDescriptor> {
        names.iter().map(|n| StepDescriptor::main(*n, || Noop)).collect()
    }

    #[test]
    fn orders_by_name_regardless_of_declaration_order() {
        let set = StepDescriptorSet::new("s", vec![], main_named(&["3_c", "1_a", "10_z", "2_b"])).unwrap();
        let names: Vec<&str> = set.ordered_main_descriptors().iter().map(|d| d.name()).collect();
        // orden lexicográfico puro: '0' < '_', así que "10_z" va primero
        assert_eq!(names, vec!["10_z", "1_a", "2_b", "3_c"]);
        let described: Vec<&str> = set.descriptions().map(|d| d.display_name()).collect();
        assert_eq!(described, names);
    }

    #[test]
    fn duplicate_names_are_a_configuration_error() {
        let err = StepDescriptorSet::new("s", vec![], main_named(&["1_a", "1_a"])).unwrap_err();
        assert_eq!(err,
                   ConfigurationError::DuplicateStepName { kind: StepKind::Main,
                                                           name: "1_a".into() });
    }

    #[test]
    fn same_name_in_setup_and_main_is_allowed() {
        let setup = vec![StepDescriptor::setup("1_a", || Noop)];
        let set = StepDescriptorSet::new("s", setup, main_named(&["1_a"])).unwrap();
        assert!(set.description_for("1_a").is_some());
        assert_eq!(set.ordered_setup_descriptors().len(), 1);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = StepDescriptorSet::new("s", vec![], main_named(&[""])).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyStepName { kind: StepKind::Main });
    }
}
