//! vertexareas -- compute and validate per-vertex surface area metrics for brain surface meshes
//!
//! Finds all '*mid*.surf.gii' surfaces below the input directory, runs 'wb_command -surface-vertex-areas'
//! for each of them and validates the resulting '.func.gii' metric files.

use anyhow::Context;
use clap::Parser;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use vertexareas::logging::init_tracing;
use vertexareas::{inspector_for, Config, InspectStrategy, Pipeline, VertexAreasError, WbCommand};

/// Exit status when no input surface was found.
const EXIT_NO_INPUT: u8 = 1;
/// Exit status with `--fail-on-invalid` when a file did not validate.
const EXIT_INVALID: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "vertexareas", version, about = "Compute and validate vertex area metrics for brain surface meshes")]
struct Cli {
    /// Directory to search for input surfaces, recursively. Defaults to the configured directory or '.'.
    input_dir: Option<PathBuf>,
    #[arg(long, help = "TOML configuration file")]
    config: Option<PathBuf>,
    #[arg(long, value_name = "PROG", help = "wb_command executable to run")]
    wb_command: Option<String>,
    #[arg(long, value_enum, help = "How to inspect the produced metric files")]
    strategy: Option<InspectStrategy>,
    #[arg(long, overrides_with = "no_keep_going", help = "Continue with the next surface if computing one fails")]
    keep_going: bool,
    #[arg(long, overrides_with = "keep_going", help = "Stop at the first failing surface, even if the config file says to keep going")]
    no_keep_going: bool,
    #[arg(long, help = "Exit with status 2 if any output file fails validation")]
    fail_on_invalid: bool,
    #[arg(long, help = "Only list the discovered input surfaces")]
    dry_run: bool,
    #[arg(long, help = "Print the run summary as JSON")]
    json: bool,
}

impl Cli {
    /// Built-in defaults, overridden by the config file, overridden by the command line.
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path.display()))?,
            None => Config::default(),
        };
        if let Some(dir) = &self.input_dir {
            cfg.input_dir = dir.clone();
        }
        if let Some(program) = &self.wb_command {
            cfg.workbench.program = program.clone();
        }
        if let Some(strategy) = self.strategy {
            cfg.workbench.strategy = strategy;
        }
        if self.keep_going {
            cfg.keep_going = true;
        } else if self.no_keep_going {
            cfg.keep_going = false;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let cfg = cli.resolve_config()?;

    let workbench = WbCommand::new(cfg.workbench.program.clone());
    let inspector = inspector_for(cfg.workbench.strategy, &workbench);
    let pipeline = Pipeline::new(&cfg, &workbench, &*inspector);

    if cli.dry_run {
        return match pipeline.discover() {
            Ok(surfaces) => {
                for surface in surfaces {
                    println!("{}", surface.display());
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => no_input_or(err),
        };
    }

    let stdout = io::stdout();
    let mut human_out: Box<dyn Write> = if cli.json { Box::new(io::sink()) } else { Box::new(stdout.lock()) };
    let summary = match pipeline.run(&mut *human_out) {
        Ok(summary) => summary,
        Err(err) => return no_input_or(err),
    };
    drop(human_out);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    if cli.fail_on_invalid && !summary.all_passed() {
        return Ok(ExitCode::from(EXIT_INVALID));
    }
    Ok(ExitCode::SUCCESS)
}

/// Report a missing input as a plain message with its own exit status, anything else as a fatal error.
fn no_input_or(err: VertexAreasError) -> anyhow::Result<ExitCode> {
    match err {
        VertexAreasError::NoInputFiles => {
            println!("{}", err);
            Ok(ExitCode::from(EXIT_NO_INPUT))
        }
        other => Err(other.into()),
    }
}
