//! Ejecución de un escenario: instanciación, setup, steps principales.
//!
//! Invariantes:
//! - Setup: inyección + `pre_execute -> execute -> post_execute`; cualquier
//!   fallo es fatal y ningún step principal llega a empezar.
//! - Main: por cada step, `step_started`, inyección, las cuatro fases y
//!   `step_finished` siempre; si falló, `step_failed` y se corta el resto
//!   (fail-fast). Los steps cortados no generan eventos.
//! - La inyección se resuelve completa antes de `pre_execute`; si falla,
//!   ninguna fase corre.
//! - Con `capture_panics = false` un panic no se convierte en fallo, pero
//!   antes de relanzarlo se emiten `step_finished` y `suite_finished`.

use std::panic;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, warn};
use uuid::Uuid;

use super::guard::{guarded, PanicPayload};
use super::outcome::{ScenarioReport, StepOutcome};
use super::state::RunnerState;
use crate::config::EngineConfig;
use crate::context::{Context, SharedContext};
use crate::descriptor::{Description, StepDescriptor, StepDescriptorSet};
use crate::errors::{ScenarioError, StepFailure};
use crate::report::ReportingSink;
use crate::step::{Phase, StepContexts, StepInstance, StepStatus};

/// Motor de ejecución de un escenario.
///
/// El contexto global se comparte (p.ej. entre escenarios de una suite); el
/// de escenario se crea nuevo en cada `run`.
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    descriptors: Arc<StepDescriptorSet>,
    global: SharedContext,
    config: EngineConfig,
}

/// Estado mutable de una única ejecución.
struct ScenarioRun<'a> {
    run_id: Uuid,
    state: RunnerState,
    scenario: &'a str,
    scenario_ctx: SharedContext,
}

impl ScenarioRun<'_> {
    fn transition(&mut self, next: RunnerState) {
        debug_assert!(self.state.can_transition_to(next),
                      "invalid transition {:?} -> {:?}",
                      self.state,
                      next);
        debug!("[{}] {}: {:?} -> {:?}", self.run_id, self.scenario, self.state, next);
        self.state = next;
    }
}

impl ScenarioRunner {
    /// Runner con un contexto global propio y configuración por defecto.
    pub fn new(descriptors: impl Into<Arc<StepDescriptorSet>>) -> Self {
        Self { descriptors: descriptors.into(),
               global: Context::shared(),
               config: EngineConfig::default() }
    }

    /// Comparte `global` con otros runners.
    pub fn with_global_context(mut self, global: SharedContext) -> Self {
        self.global = global;
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn global_context(&self) -> &SharedContext {
        &self.global
    }

    pub fn descriptors(&self) -> &StepDescriptorSet {
        &self.descriptors
    }

    /// Ejecuta el escenario completo reportando a `sink`.
    ///
    /// Devuelve `Err` sólo ante errores fatales (instanciación o setup); un
    /// fallo de step principal queda en el `ScenarioReport`.
    pub fn run(&self, sink: &dyn ReportingSink) -> Result<ScenarioReport, ScenarioError> {
        let set = &*self.descriptors;
        let mut run = ScenarioRun { run_id: Uuid::new_v4(),
                                    state: RunnerState::Initialized,
                                    scenario: set.scenario_name(),
                                    scenario_ctx: Context::shared() };
        let started_at = Utc::now();
        debug!("[{}] running scenario {}", run.run_id, set.scenario_name());

        let (setup_steps, main_steps) = match self.instantiate_all(&run) {
            Ok(steps) => steps,
            Err(e) => {
                error!("[{}] {}", run.run_id, e);
                run.transition(RunnerState::Aborted);
                return Err(e);
            }
        };
        run.transition(RunnerState::RunningSetup);

        let suite = set.suite_description();
        sink.suite_started(run.run_id, suite);

        if let Err(e) = self.run_setup(&run, setup_steps, sink, suite) {
            error!("[{}] {}", run.run_id, e);
            run.transition(RunnerState::Aborted);
            sink.suite_finished(run.run_id, suite);
            return Err(e);
        }
        run.transition(RunnerState::RunningMain);

        let (steps, skipped) = self.run_main(&run, main_steps, sink, suite);

        run.transition(RunnerState::Finished);
        sink.suite_finished(run.run_id, suite);
        debug!("[{}] scenario {} finished: {} step(s) run, {} skipped",
              run.run_id,
              set.scenario_name(),
              steps.len(),
              skipped.len());

        Ok(ScenarioReport { run_id: run.run_id,
                            scenario: set.scenario_name().to_string(),
                            state: run.state,
                            steps,
                            skipped,
                            started_at,
                            finished_at: Utc::now(),
                            scenario_context: run.scenario_ctx })
    }

    fn instantiate(&self, run: &ScenarioRun<'_>, descriptor: &StepDescriptor) -> Result<StepInstance, ScenarioError> {
        let produced = guarded(self.config.capture_panics, || descriptor.produce()).unwrap_or_else(|payload| {
                                                                                               panic::resume_unwind(payload)
                                                                                           });
        let step = produced.map_err(|source| ScenarioError::Instantiation { step: descriptor.name().to_string(),
                                                                             kind: descriptor.kind(),
                                                                             source })?;
        let contexts = StepContexts::new(descriptor.name(), Arc::clone(&self.global), Arc::clone(&run.scenario_ctx));
        Ok(StepInstance::new(descriptor.kind(), contexts, step))
    }

    /// Instancia todos los steps (setup y main) antes de ejecutar ninguno.
    #[allow(clippy::type_complexity)]
    fn instantiate_all(&self,
                       run: &ScenarioRun<'_>)
                       -> Result<(Vec<StepInstance>, Vec<(StepInstance, Description)>), ScenarioError> {
        let set = &*self.descriptors;
        let setup = set.ordered_setup_descriptors()
                       .iter()
                       .map(|d| self.instantiate(run, d))
                       .collect::<Result<Vec<_>, _>>()?;
        let main = set.ordered_main_descriptors()
                      .iter()
                      .map(|d| {
                          let description = set.description_for(d.name())
                                               .cloned()
                                               .unwrap_or_else(|| Description::step(set.scenario_name(), d.name()));
                          self.instantiate(run, d).map(|step| (step, description))
                      })
                      .collect::<Result<Vec<_>, _>>()?;
        Ok((setup, main))
    }

    fn run_setup(&self,
                 run: &ScenarioRun<'_>,
                 steps: Vec<StepInstance>,
                 sink: &dyn ReportingSink,
                 suite: &Description)
                 -> Result<(), ScenarioError> {
        for mut step in steps {
            debug!("setup step {} ({})", step.name(), step.step_type());
            let result = match guarded(self.config.capture_panics, || run_phases(&mut step, &Phase::SETUP)) {
                Ok(result) => result,
                Err(payload) => {
                    error!("[{}] setup step {} panicked", run.run_id, step.name());
                    sink.suite_finished(run.run_id, suite);
                    panic::resume_unwind(payload)
                }
            };
            result.map_err(|source| ScenarioError::SetupFailed { step: step.name().to_string(),
                                                                  source })?;
        }
        Ok(())
    }

    fn run_main(&self,
                run: &ScenarioRun<'_>,
                steps: Vec<(StepInstance, Description)>,
                sink: &dyn ReportingSink,
                suite: &Description)
                -> (Vec<StepOutcome>, Vec<String>) {
        let mut outcomes = Vec::with_capacity(steps.len());
        let mut remaining = steps.into_iter();

        for (mut step, description) in remaining.by_ref() {
            sink.step_started(run.run_id, &description);
            let result = match guarded(self.config.capture_panics, || run_phases(&mut step, &Phase::MAIN)) {
                Ok(result) => result,
                Err(payload) => unwind_step(run, sink, &description, suite, payload),
            };
            let failed = result.is_err();
            let status = match result {
                Ok(()) => StepStatus::Passed,
                Err(failure) => {
                    if failure.is_injection() {
                        debug!("[{}] step {} not run, injection failed: {}", run.run_id, step.name(), failure);
                    } else {
                        debug!("[{}] step {} failed: {}", run.run_id, step.name(), failure);
                    }
                    sink.step_failed(run.run_id, &description, &failure);
                    StepStatus::Failed(failure.to_string())
                }
            };
            sink.step_finished(run.run_id, &description);
            outcomes.push(StepOutcome { name: step.name().to_string(),
                                        description,
                                        status });
            if failed {
                break;
            }
        }

        let skipped: Vec<String> = remaining.map(|(step, _)| step.name().to_string()).collect();
        if !skipped.is_empty() {
            warn!("[{}] fail-fast: skipping {:?}", run.run_id, skipped);
        }
        (outcomes, skipped)
    }
}

/// Cierra los eventos del step y del escenario y relanza el panic.
fn unwind_step(run: &ScenarioRun<'_>,
               sink: &dyn ReportingSink,
               description: &Description,
               suite: &Description,
               payload: PanicPayload)
               -> ! {
    error!("[{}] step {} panicked with capture disabled", run.run_id, description.display_name());
    sink.step_finished(run.run_id, description);
    sink.suite_finished(run.run_id, suite);
    panic::resume_unwind(payload)
}

/// Inyección seguida de las fases indicadas, cortando en el primer error.
fn run_phases(step: &mut StepInstance, phases: &[Phase]) -> Result<(), StepFailure> {
    step.inject()?;
    for phase in phases {
        step.run_phase(*phase)?;
    }
    Ok(())
}
