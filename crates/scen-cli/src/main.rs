//! scen-cli: ejecuta planes JSON de escenarios con los steps incluidos.
//!
//!   scen-cli run --plan demos/client.json [--format json] [--base-dir DIR]
//!   scen-cli describe --plan demos/client.json
//!
//! Códigos de salida: 0 todo pasó, 1 falló algún step, 2 error fatal de
//! escenario (setup o instanciación), 3 plan inválido.

mod output;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use scen_core::{ConfigurationError, EngineConfig, FanoutSink, LogSink, RecordingSink, ScenarioError, ScenarioSuite,
                StepRegistry, SuitePlan};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const EXIT_STEP_FAILED: u8 = 1;
const EXIT_FATAL: u8 = 2;
const EXIT_CONFIG: u8 = 3;

#[derive(Parser)]
#[command(name = "scen-cli")]
#[command(about = "Runs step-based test scenarios described as JSON plans")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every scenario of a plan
    Run {
        /// Plan file (a single scenario or `{ "scenarios": [...] }`)
        #[arg(long)]
        plan: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Directory for relative property files (default: the plan's directory)
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Run scenarios in parallel (overrides SCENFLOW_PARALLEL_SCENARIOS)
        #[arg(long)]
        parallel: bool,
    },
    /// Print the ordered step descriptions of a plan
    Describe {
        #[arg(long)]
        plan: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let config = EngineConfig::from_env();
    match cli.command {
        Commands::Run { plan,
                        format,
                        base_dir,
                        parallel, } => {
            let config = if parallel { config.parallel(true) } else { config };
            run(&plan, format, base_dir, config)
        }
        Commands::Describe { plan } => describe(&plan),
    }
}

fn read_plan(plan: &Path) -> Result<SuitePlan, ConfigurationError> {
    let raw = fs::read_to_string(plan).map_err(|e| ConfigurationError::InvalidPlan(format!("{}: {e}", plan.display())))?;
    SuitePlan::from_json_str(&raw)
}

/// Por defecto los paths relativos se resuelven contra el directorio del plan.
fn registry_for(plan: &Path, base_dir: Option<PathBuf>) -> StepRegistry {
    let base_dir = base_dir.unwrap_or_else(|| plan.parent().map(Path::to_path_buf).unwrap_or_default());
    scen_adapters::builtin_registry_in(base_dir)
}

fn run(plan: &Path, format: Format, base_dir: Option<PathBuf>, config: EngineConfig) -> ExitCode {
    let suite = read_plan(plan).map_err(ScenarioError::from)
                               .and_then(|p| ScenarioSuite::from_plan(&p, &registry_for(plan, base_dir), config));
    let suite = match suite {
        Ok(suite) => suite,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(EXIT_CONFIG);
        }
    };
    let names = suite.scenario_names();
    info!("plan {}: {} scenario(s)", plan.display(), names.len());

    let recording = Arc::new(RecordingSink::new());
    let sink = FanoutSink::new().with(LogSink).with(Arc::clone(&recording));
    let report = suite.run(&sink);

    let rendered = match format {
        Format::Text => output::text(&names, &report),
        Format::Json => match output::json(&names, &report, &recording) {
            Ok(json) => json,
            Err(e) => {
                error!("cannot render report: {e}");
                return ExitCode::from(EXIT_FATAL);
            }
        },
    };
    println!("{rendered}");

    if report.fatal_errors().next().is_some() {
        ExitCode::from(EXIT_FATAL)
    } else if !report.passed() {
        ExitCode::from(EXIT_STEP_FAILED)
    } else {
        ExitCode::SUCCESS
    }
}

fn describe(plan: &Path) -> ExitCode {
    match read_plan(plan).and_then(|p| registry_for(plan, None).build_suite(&p)) {
        Ok(sets) => {
            println!("{}", output::descriptions(&sets));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(EXIT_CONFIG)
        }
    }
}
