//! Implementation of the `sorspec init` command.
//!
//! Responsibility: translate CLI arguments into `InitOptions`, wire the
//! catalogs and the local filesystem into the core service, and display
//! results. No business logic lives here.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use sorspec_adapters::{LocalFilesystem, ResourceDir, builtin_requirements};
use sorspec_core::{
    application::{InitReport, InitService},
    domain::{InitOptions, LayerCatalog},
};

use crate::{
    cli::{InitArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable summary printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct InitSummary<'a> {
    config_file: &'a Path,
    directories: &'a [PathBuf],
    placeholders_created: &'a [PathBuf],
    bytes_written: usize,
    replaced: bool,
}

#[derive(Debug, Serialize)]
struct DryRunSummary<'a> {
    config_file: &'a Path,
    directories: &'a [PathBuf],
    placeholders: &'a [PathBuf],
    document: &'a str,
}

/// Execute the `sorspec init` command.
///
/// 1. Resolve the target path and the output mode
/// 2. Build the requirement catalog from the resource directory
/// 3. Either render only (`--dry-run`) or run the full `init`
/// 4. Report what was written
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let path = resolve_path(&args.path)?;
    let mode = args
        .mode
        .clone()
        .unwrap_or_else(|| config.defaults.mode.clone());

    let options = build_options(&args, path, mode);

    let resources = ResourceDir::discover(config.resources.dir.as_deref());
    debug!(
        dir = %resources.path().display(),
        origin = ?resources.origin(),
        "resource directory resolved"
    );

    let service = InitService::new(
        LayerCatalog::builtin(),
        builtin_requirements(&resources),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let plan = service.plan(options)?;
        info!(path = %plan.layout.config_file().display(), "dry run, nothing written");

        return match output.format() {
            OutputFormat::Json => output.json(&DryRunSummary {
                config_file: plan.layout.config_file(),
                directories: plan.layout.directories(),
                placeholders: plan.layout.placeholders(),
                document: &plan.text,
            }),
            _ => output.document(&plan.text),
        }
        .map_err(CliError::from);
    }

    let report = service.init(options)?;
    show_report(&report, &output)
}

fn build_options(args: &InitArgs, path: PathBuf, mode: String) -> InitOptions {
    let options = args
        .layer_selections()
        .into_iter()
        .fold(InitOptions::new(path).mode(mode), |opts, (layer, core)| {
            opts.layer(layer, core)
        });

    args.requirements
        .iter()
        .fold(options, |opts, id| opts.requirement(id.as_str()))
}

fn show_report(report: &InitReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&InitSummary {
            config_file: &report.config_file,
            directories: &report.directories,
            placeholders_created: &report.placeholders_created,
            bytes_written: report.bytes_written,
            replaced: report.replaced,
        })?;
        return Ok(());
    }

    let verb = if report.replaced { "Replaced" } else { "Wrote" };
    output.success(&format!(
        "{verb} {} ({} bytes)",
        report.config_file.display(),
        report.bytes_written
    ))?;
    for dir in &report.directories {
        output.print(&format!("  created {}/", dir.display()))?;
    }
    for file in &report.placeholders_created {
        output.print(&format!("  created {}", file.display()))?;
    }
    Ok(())
}

/// Paths whose last component is `.` or `..` are made absolute against the
/// working directory so that they name a directory.
fn resolve_path(path: &Path) -> CliResult<PathBuf> {
    if path.file_name().is_some() {
        return Ok(path.to_path_buf());
    }

    let absolute = std::path::absolute(path).map_err(|e| CliError::InvalidInput {
        message: format!("cannot resolve '{}'", path.display()),
        source: Some(Box::new(e)),
    })?;
    Ok(normalize(&absolute))
}

/// Lexically fold `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use sorspec_core::domain::Layer;

    fn parse(argv: &[&str]) -> InitArgs {
        let mut full = vec!["sorspec", "init"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Init(args) => args,
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn named_paths_are_kept_as_given() {
        assert_eq!(resolve_path(Path::new("myapp")).unwrap(), PathBuf::from("myapp"));
        assert_eq!(
            resolve_path(Path::new("../shop")).unwrap(),
            PathBuf::from("../shop")
        );
    }

    #[test]
    fn dot_resolves_to_working_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_path(Path::new(".")).unwrap(), cwd);
        assert_eq!(
            resolve_path(Path::new("..")).unwrap(),
            cwd.parent().unwrap().to_path_buf()
        );
    }

    #[test]
    fn normalize_folds_components() {
        assert_eq!(
            normalize(Path::new("/a/b/./c/../d")),
            PathBuf::from("/a/b/d")
        );
    }

    #[test]
    fn options_carry_layers_requirements_and_mode() {
        let args = parse(&["base", "-s", "go", "-a", "kotlin", "authorization", "authentication"]);
        let options = build_options(&args, PathBuf::from("base"), "dir".into());

        assert_eq!(options.mode, "dir");
        assert_eq!(options.requirements, vec!["authorization", "authentication"]);
        let layers: Vec<_> = options.layers.iter().map(|s| s.layer).collect();
        assert_eq!(layers, vec![Layer::Server, Layer::Android]);
    }
}
