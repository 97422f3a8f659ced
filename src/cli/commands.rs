//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::ValidationService;
use crate::cli::args::{CheckArgs, Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::exitcode;

const STDIN_NAME: &str = "<stdin>";

/// Run the parsed command and return the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let project_dir = cli
        .project_dir
        .clone()
        .or_else(|| std::env::current_dir().ok());

    match &cli.command {
        Commands::Check(args) => cmd_check(args, project_dir.as_deref()),
        Commands::Config { command } => cmd_config(command, project_dir.as_deref()),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(exitcode::OK)
        }
    }
}

/// Settings from config layers with CLI flags applied last.
fn effective_settings(args: &CheckArgs, project_dir: Option<&Path>) -> CliResult<Settings> {
    let mut settings = Settings::load(project_dir)?;

    if let Some(max_children) = args.max_children {
        if max_children == 0 {
            return Err(CliError::InvalidArgs(
                "--max-children must be at least 1".to_string(),
            ));
        }
        settings.max_children = max_children;
    }
    if args.empty_invalid {
        settings.empty_is_tree = false;
    }
    if let Some(strategy) = args.strategy {
        settings.cycle_strategy = strategy;
    }
    Ok(settings)
}

#[instrument(level = "debug", skip(args), fields(files = args.files.len()))]
fn cmd_check(args: &CheckArgs, project_dir: Option<&Path>) -> CliResult<i32> {
    let settings = effective_settings(args, project_dir)?;
    debug!(?settings, "effective settings");
    let service = ValidationService::new(&settings);

    let results = if args.files.is_empty() {
        let result = service.check_reader(STDIN_NAME, io::stdin().lock());
        vec![(PathBuf::from(STDIN_NAME), result)]
    } else {
        service.check_paths(&args.files)
    };

    let mut code = exitcode::OK;
    for (path, result) in results {
        match result {
            Ok(report) if report.is_valid() => {
                if !args.quiet {
                    output::success(&report.source);
                }
            }
            Ok(report) => {
                code = code.max(exitcode::INVALID);
                match report.verdict.violation() {
                    Some(violation) if !args.quiet => output::failure(&report.source, violation),
                    _ => {}
                }
            }
            Err(e) => {
                debug!(path = %path.display(), "check failed");
                output::error(&e);
                code = code.max(CliError::from(e).exit_code());
            }
        }
    }
    Ok(code)
}

fn cmd_config(command: &ConfigCommands, project_dir: Option<&Path>) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(project_dir)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".to_string()))?;
            output::info(&path.display());
        }
    }
    Ok(exitcode::OK)
}
