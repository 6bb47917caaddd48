//! Suite de escenarios con contexto global compartido.
//!
//! Todos los runners de la suite reciben el mismo `Context` global; los
//! valores GLOBAL escritos por un escenario son visibles en los siguientes
//! (o en los concurrentes, en modo paralelo).

use std::sync::Arc;

use log::{info, warn};
use rayon::prelude::*;

use super::outcome::SuiteReport;
use super::runner::ScenarioRunner;
use crate::config::EngineConfig;
use crate::context::{Context, SharedContext};
use crate::descriptor::{StepDescriptorSet, StepRegistry, SuitePlan};
use crate::errors::ScenarioError;
use crate::report::ReportingSink;

#[derive(Debug, Clone)]
pub struct ScenarioSuite {
    global: SharedContext,
    scenarios: Vec<Arc<StepDescriptorSet>>,
    config: EngineConfig,
}

impl Default for ScenarioSuite {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ScenarioSuite {
    pub fn new(config: EngineConfig) -> Self {
        Self { global: Context::shared(),
               scenarios: Vec::new(),
               config }
    }

    /// Construye una suite con un escenario por cada plan, resolviendo sus
    /// steps contra `registry`.
    pub fn from_plan(plan: &SuitePlan, registry: &StepRegistry, config: EngineConfig) -> Result<Self, ScenarioError> {
        let mut suite = Self::new(config);
        for set in registry.build_suite(plan)? {
            suite.push(set);
        }
        Ok(suite)
    }

    pub fn with_global_context(mut self, global: SharedContext) -> Self {
        self.global = global;
        self
    }

    pub fn add(mut self, scenario: impl Into<Arc<StepDescriptorSet>>) -> Self {
        self.scenarios.push(scenario.into());
        self
    }

    pub fn push(&mut self, scenario: impl Into<Arc<StepDescriptorSet>>) {
        self.scenarios.push(scenario.into());
    }

    pub fn global_context(&self) -> &SharedContext {
        &self.global
    }

    /// Nombres de los escenarios en orden de declaración (el mismo que el de
    /// `SuiteReport::scenarios`).
    pub fn scenario_names(&self) -> Vec<String> {
        self.scenarios.iter().map(|s| s.scenario_name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Runner de un escenario cableado al contexto global de la suite.
    pub fn runner_for(&self, scenario: &Arc<StepDescriptorSet>) -> ScenarioRunner {
        ScenarioRunner::new(Arc::clone(scenario)).with_global_context(Arc::clone(&self.global))
                                                 .with_config(self.config.clone())
    }

    pub fn run(&self, sink: &dyn ReportingSink) -> SuiteReport {
        info!("running suite of {} scenario(s), parallel={}",
              self.scenarios.len(),
              self.config.parallel_scenarios);
        if self.config.parallel_scenarios {
            self.run_parallel(sink)
        } else {
            SuiteReport { scenarios: self.scenarios.iter().map(|s| self.runner_for(s).run(sink)).collect() }
        }
    }

    fn run_parallel(&self, sink: &dyn ReportingSink) -> SuiteReport {
        let run_all = || SuiteReport { scenarios: self.scenarios.par_iter().map(|s| self.runner_for(s).run(sink)).collect() };
        if self.config.worker_threads == 0 {
            return run_all();
        }
        match rayon::ThreadPoolBuilder::new().num_threads(self.config.worker_threads).build() {
            Ok(pool) => pool.install(run_all),
            Err(e) => {
                warn!("could not build a pool of {} threads ({e}); using the global pool",
                      self.config.worker_threads);
                run_all()
            }
        }
    }
}
