//! ImportPropertiesStep
//!
//! Lee un archivo `.properties` y copia cada entrada como `String` al
//! contexto de escenario, donde los steps siguientes pueden inyectarla.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use scen_core::{StepContexts, StepFailure, StepResult, TestStep};

use crate::properties;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportPropertiesParams {
    pub path: PathBuf,
    /// Directorio contra el que se resuelve `path` si es relativo.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ImportPropertiesStep {
    path: PathBuf,
    base_dir: Option<PathBuf>,
}

impl ImportPropertiesStep {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(),
               base_dir: None }
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// `base_dir` del propio step gana sobre `fallback_dir`.
    pub fn from_params(params: ImportPropertiesParams, fallback_dir: Option<&Path>) -> Self {
        let base_dir = params.base_dir.or_else(|| fallback_dir.map(Path::to_path_buf));
        Self { path: params.path,
               base_dir }
    }

    pub fn resolved_path(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) if self.path.is_relative() => dir.join(&self.path),
            _ => self.path.clone(),
        }
    }
}

impl TestStep for ImportPropertiesStep {
    fn execute(&mut self, ctx: &StepContexts) -> StepResult {
        let path = self.resolved_path();
        if !path.is_file() {
            return Err(StepFailure::msg(format!("Cannot find property file with name: {}", path.display())));
        }
        let props = properties::load_file(&path)?;
        let scenario = ctx.scenario_context();
        for (key, value) in props.iter() {
            debug!("{}: {} <- {}", ctx.name(), key, path.display());
            scenario.set(key.clone(), value.clone());
        }
        info!("{}: imported {} properties from {}", ctx.name(), props.len(), path.display());
        Ok(())
    }
}
