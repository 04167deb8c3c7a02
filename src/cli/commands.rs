//! Command dispatch: runs parsed CLI commands against the service container

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{BstArena, TreeRender};
use crate::exitcode;
use crate::infrastructure::{InfraError, InfraResult, ServiceContainer};

/// Run the parsed command and return the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given, see --help".to_string()));
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(exitcode::OK);
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Verify {
            values,
            file,
            tree,
            explain,
        } => cmd_verify(&container, values, file.as_deref(), *tree, *explain),
        Commands::Build { values, tree } => cmd_build(&container, values, *tree),
        Commands::Config { command } => cmd_config(&container, command, cli.config.as_deref()),
        Commands::Completion { .. } => Ok(exitcode::OK),
    }
}

#[instrument(skip(container))]
fn cmd_verify(
    container: &ServiceContainer,
    values: &[String],
    file: Option<&Path>,
    tree: bool,
    explain: bool,
) -> CliResult<i32> {
    if values.is_empty() && file.is_none() {
        return Err(CliError::Usage(
            "no values given, pass them inline or with --file".to_string(),
        ));
    }

    let service = &container.sequence_service;
    let values = service.read_values(values, file)?;
    let report = service.verify(values);
    debug!("report: {:?}", report);

    if report.is_valid() {
        output::success("valid");
        if tree || container.settings.render_tree {
            match report.tree() {
                Some(bst) => write_tree(&bst)?,
                None => output::detail("no tree: sequence repeats a key"),
            }
        }
        Ok(exitcode::OK)
    } else {
        output::failure("invalid");
        if explain || container.settings.explain {
            if let Some(violation) = &report.violation {
                output::detail(violation);
            }
        }
        Ok(exitcode::INVALID)
    }
}

#[instrument(skip(container))]
fn cmd_build(container: &ServiceContainer, values: &[String], tree: bool) -> CliResult<i32> {
    let service = &container.sequence_service;
    let values = service.read_values(values, None)?;
    let bst = service.build(&values);

    let postorder = bst
        .postorder()
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    output::info(&postorder);

    if tree || container.settings.render_tree {
        write_tree(&bst)?;
    }
    Ok(exitcode::OK)
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    config_file: Option<&Path>,
) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective configuration");
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let path: Option<PathBuf> = config_file
                .map(Path::to_path_buf)
                .or_else(global_config_path);
            match path {
                Some(path) => output::info(&path.display()),
                None => output::detail("no config directory available"),
            }
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(exitcode::OK)
}

fn write_tree(bst: &BstArena) -> InfraResult<()> {
    let rendered = bst.to_tree_string();
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", rendered).map_err(|e| InfraError::io("write tree", e))?;
    stdout.flush().map_err(|e| InfraError::io("flush stdout", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    /// Runs `bstseq -c <defaults file> <args>` so host config does not leak in.
    fn run(args: &[&str]) -> CliResult<i32> {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("bstseq.toml");
        fs::write(&config, Settings::default().to_toml().unwrap()).unwrap();

        let mut argv = vec!["bstseq", "-c", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("valid arguments");
        execute_command(&cli)
    }

    #[test]
    fn given_no_command_when_executing_then_usage_error() {
        let err = run(&[]).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn given_verify_without_values_when_executing_then_usage_error() {
        let err = run(&["verify"]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn given_valid_sequence_when_verifying_then_ok_code() {
        assert_eq!(run(&["verify", "1,3,2,5,7,6,4"]).unwrap(), exitcode::OK);
    }

    #[test]
    fn given_invalid_sequence_when_verifying_then_invalid_code() {
        assert_eq!(
            run(&["verify", "7", "4", "6", "5", "--explain"]).unwrap(),
            exitcode::INVALID
        );
    }

    #[test]
    fn given_garbage_value_when_verifying_then_dataerr() {
        let err = run(&["verify", "1,two,3"]).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_missing_file_when_verifying_then_ioerr() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = run(&["verify", "--file", missing.to_str().unwrap()]).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::IOERR);
    }

    #[test]
    fn given_long_sorted_file_when_verifying_with_tree_then_ok_code() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seq.txt");
        let text = (1..=100_000)
            .map(|v: i64| v.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&path, text).unwrap();

        assert_eq!(
            run(&["verify", "--file", path.to_str().unwrap(), "--tree"]).unwrap(),
            exitcode::OK
        );
    }

    #[test]
    fn given_build_with_tree_when_executing_then_ok_code() {
        assert_eq!(run(&["build", "10", "6", "14", "--tree"]).unwrap(), exitcode::OK);
    }

    #[test]
    fn given_missing_config_file_when_executing_then_config_code() {
        let cli = Cli::try_parse_from([
            "bstseq",
            "-c",
            "/nonexistent/bstseq.toml",
            "config",
            "show",
        ])
        .expect("valid arguments");
        let err = execute_command(&cli).unwrap_err();
        assert_eq!(err.exit_code(), exitcode::CONFIG);
    }
}
