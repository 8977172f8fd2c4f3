//! Application orchestrator.
//! Loads settings, applies CLI overrides, initializes logging, builds the
//! OperationConfig and runs preview or execute.
//!
//! Exit codes: 0 success, 1 configuration or startup error, 2 execute finished
//! with errors or without processing anything.

use anyhow::{Context, Result, anyhow};
use dialoguer::Confirm;
use std::process::ExitCode;
use tracing::{debug, error, info};

use file_falcon::cli::{Args, Command, RunArgs};
use file_falcon::config::{CONFIG_ENV, LoadResult, load_or_init};
use file_falcon::output as out;
use file_falcon::{
    ConsoleReporter, ExtensionCatalog, LogLevel, OperationConfig, OperationType, Reporter,
    RunStatus, Settings, TracingReporter, default_config_path, execute, preview,
};

use crate::logging::init_tracing;

const EXIT_RUN_INCOMPLETE: u8 = 2;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    if args.print_config {
        print_config_location();
        return Ok(ExitCode::SUCCESS);
    }

    let (run, yes, executing) = match args.command.clone() {
        None => {
            out::print_error("no command given; use `preview`, `execute` or `categories` (see --help)");
            return Ok(ExitCode::FAILURE);
        }
        Some(Command::Categories) => {
            print_categories();
            return Ok(ExitCode::SUCCESS);
        }
        Some(Command::Preview(run)) => (run, false, false),
        Some(Command::Execute { run, yes }) => (run, yes, true),
    };

    let loaded = load_or_init()?;
    if let LoadResult::CreatedTemplate(path, _) = &loaded {
        out::print_info(&format!("A template settings file was written to: {}", path.display()));
    }
    let mut settings = loaded.into_settings();
    args.apply_overrides(&mut settings);

    let _guard = init_tracing(&settings.log_level, settings.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;
    debug!(?args, "starting file_falcon");

    let mut console = ConsoleReporter {
        quiet: settings.log_level == LogLevel::Quiet,
    };
    let mut tracing_reporter = TracingReporter;
    let reporter: &mut dyn Reporter = if args.json {
        &mut tracing_reporter
    } else {
        &mut console
    };

    let config = build_config(&run, &mut settings)?;
    if !executing {
        preview(&config, reporter)?;
        return Ok(ExitCode::SUCCESS);
    }

    if config.operation_type() == OperationType::Move && !yes && !confirm_move(&config)? {
        out::print_warn("Move cancelled; nothing was changed.");
        return Ok(ExitCode::SUCCESS);
    }
    let outcome = execute(&config, reporter)?;
    let status = outcome.status();
    info!(
        success = outcome.success_count,
        errors = outcome.error_count,
        status = ?status,
        "run finished"
    );
    match status {
        RunStatus::Success => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::from(EXIT_RUN_INCOMPLETE)),
    }
}

/// Merge run flags into settings and validate them into an OperationConfig.
fn build_config(run: &RunArgs, settings: &mut Settings) -> Result<OperationConfig> {
    run.apply_overrides(settings);

    let source = settings
        .source
        .clone()
        .ok_or_else(|| anyhow!("no source folder; pass --source or set <source_folder> in the settings file"))?;
    let dest = settings
        .dest
        .clone()
        .ok_or_else(|| anyhow!("no destination folder; pass --dest or set <dest_folder> in the settings file"))?;

    let config = OperationConfig::for_category(
        &source,
        &dest,
        ExtensionCatalog::builtin(),
        &settings.category,
        &settings.selected_types,
    )
    .inspect_err(|e| error!(code = e.code(), "{e}"))
    .context("invalid configuration")?
    .with_mode(settings.mode)
    .with_keyword(settings.keyword.clone(), settings.match_type)
    .with_operation(settings.operation_type);

    debug!(
        mode = %config.mode(),
        category = config.category(),
        keyword = config.keyword(),
        match_type = %config.match_type(),
        operation = %config.operation_type(),
        "configuration ready"
    );
    Ok(config)
}

/// Ask before moving when a person is at the terminal; scripts proceed.
fn confirm_move(config: &OperationConfig) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(true);
    }
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Move matching files from {} into {}?",
            config.source().display(),
            config.category_dir().display()
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

fn print_categories() {
    for (name, exts) in ExtensionCatalog::builtin().iter() {
        let list: Vec<&str> = exts.iter().map(String::as_str).collect();
        out::print_user(&format!("{name}: {}", list.join(" ")));
    }
}

fn print_config_location() {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        out::print_info(&format!(
            "Using {CONFIG_ENV} (explicit):\n  {}",
            std::path::Path::new(&p).display()
        ));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default settings file:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A settings file already exists at that location.");
            } else {
                out::print_info("No settings file exists there yet; one is created on the next run.");
            }
        }
        None => out::print_error("Could not determine a default settings location."),
    }
}
