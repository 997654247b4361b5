//! CLI entrypoint for funwave-input
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use funwave_application::{
    CheckConfigError, CheckConfigInput, CheckConfigUseCase, ExportError, ExportInput,
    ExportParams, ExportUseCase, ParameterStore, RenderInputError, RenderInputInput,
    RenderInputUseCase, RenderParams, StoreError,
};
use funwave_domain::{Category, DomainError, Parameter, State, catalog};
use funwave_infrastructure::{
    ConfigIssue, ConfigLoader, ErrorReport, FileConfig, FileParameterStore, Severity,
};
use funwave_presentation::{Cli, Command, ConsoleFormatter, ReportFormat};
use funwave_presentation::cli::commands::{ShapeArgs, ViewArgs};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let error_report = cli.error_report.clone();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(dir) = error_report {
                let report = ErrorReport::new(error_kind(&err), &*err);
                if let Err(write_err) = report.write_to_dir(&dir) {
                    eprintln!("Error: could not write error report: {write_err}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        println!("Configuration sources (in priority order):");
        for source in ConfigLoader::config_sources() {
            println!("  {source}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        bail!("No command given. Run with --help for usage.");
    };

    info!("Starting funwave-input");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("failed to load configuration: {e}"))?
    };

    // === Dependency Injection ===
    let store: Arc<dyn ParameterStore> = Arc::new(FileParameterStore::new());

    match command {
        Command::Render {
            source,
            output,
            view,
            with_desc,
            width,
            banner_char,
            strict,
        } => {
            let mut params = apply_view(render_params(&config)?, &view)
                .with_desc(with_desc || config.input.with_desc)
                .with_strict(strict || config.input.strict);
            if let Some(width) = width {
                params = params.with_width(width);
            }
            if let Some(banner_char) = banner_char {
                params = params.with_banner_char(banner_char);
            }

            let mut input = RenderInputInput::new(&source).with_params(params);
            if let Some(output) = &output {
                input = input.with_output(output);
            }
            let result = RenderInputUseCase::new(store)
                .execute(input)
                .with_context(|| format!("could not render {}", source.display()))?;

            if result.written_to.is_none() {
                print!("{}", result.text);
            }
            eprint!("{}", ConsoleFormatter::render_summary(&result));
            Ok(ExitCode::SUCCESS)
        }

        Command::Check {
            source,
            view,
            format,
        } => {
            let params = apply_view(render_params(&config)?, &view);
            let input = CheckConfigInput::new(&source)
                .with_minimal(params.is_minimal)
                .with_modules(params.modules);
            let result = CheckConfigUseCase::new(store)
                .execute(input)
                .with_context(|| format!("could not check {}", source.display()))?;

            match format {
                ReportFormat::Text => print!("{}", ConsoleFormatter::check_report(&result)),
                ReportFormat::Json => println!("{}", ConsoleFormatter::reports_json(&result.issues)),
            }
            Ok(if result.overall == State::Error {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }

        Command::Export {
            source,
            output,
            view,
            shape,
        } => {
            let params = export_params(&config, &view, &shape)?;
            let input = ExportInput::new(&source).with_params(params);
            export(store, input, output)
                .with_context(|| format!("could not export {}", source.display()))
        }

        Command::Template {
            output,
            view,
            shape,
        } => {
            let params = export_params(&config, &view, &shape)?.with_minimal(!view.full);
            export(store, ExportInput::template().with_params(params), output)
                .context("could not write template")
        }

        Command::Show { all, category } => {
            let registry = catalog::input_file()?;
            let selected: Vec<(Category, &Parameter)> = match category {
                Some(category) => registry
                    .category(category)
                    .into_iter()
                    .map(|p| (category, p))
                    .collect(),
                None if all => registry.filter_grouped(false, &Category::ALL),
                None => registry.filter_grouped(true, &[]),
            };
            print!("{}", ConsoleFormatter::parameter_table(&selected));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn export(
    store: Arc<dyn ParameterStore>,
    mut input: ExportInput,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    if let Some(output) = output {
        input = input.with_output(output);
    }
    let result = ExportUseCase::new(store).execute(input)?;
    if result.written_to.is_none() {
        println!("{}", result.json);
    }
    eprint!("{}", ConsoleFormatter::export_summary(&result));
    Ok(ExitCode::SUCCESS)
}

/// `[input]` section as render parameters; fatal issues abort.
fn render_params(config: &FileConfig) -> Result<RenderParams> {
    let (params, issues) = config.input.to_render_params();
    check_issues(&issues)?;
    Ok(params)
}

fn export_params(config: &FileConfig, view: &ViewArgs, shape: &ShapeArgs) -> Result<ExportParams> {
    let (mut params, issues) = config.json.to_export_params();
    check_issues(&issues)?;
    if view.full {
        params = params.with_minimal(false);
    }
    if !view.modules.is_empty() {
        params = params.with_modules(view.modules.iter().copied());
    }
    let grouped = shape.grouped || params.is_grouped;
    let detailed = shape.detailed || params.is_detailed;
    let pretty = params.pretty && !shape.compact;
    Ok(params
        .with_grouped(grouped)
        .with_detailed(detailed)
        .with_pretty(pretty))
}

fn apply_view(params: RenderParams, view: &ViewArgs) -> RenderParams {
    let minimal = params.is_minimal && !view.full;
    let params = params.with_minimal(minimal);
    if view.modules.is_empty() {
        params
    } else {
        params.with_modules(view.modules.iter().copied())
    }
}

fn check_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => bail!("invalid configuration: {}", issue.message),
        }
    }
    Ok(())
}

/// Short type name written into the error report.
fn error_kind(err: &anyhow::Error) -> &'static str {
    for cause in err.chain() {
        if cause.is::<RenderInputError>() {
            return "RenderInputError";
        }
        if cause.is::<CheckConfigError>() {
            return "CheckConfigError";
        }
        if cause.is::<ExportError>() {
            return "ExportError";
        }
        if cause.is::<StoreError>() {
            return "StoreError";
        }
        if cause.is::<DomainError>() {
            return "DomainError";
        }
    }
    "UnexpectedError"
}
