// src/cli/handlers.rs
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use colored::Colorize;
use log::{info, warn};

use crate::checker::CollisionChecker;
use crate::cli::args::CheckArgs;
use crate::config::{Config, CONFIG_FILE};
use crate::discovery;
use crate::exceptions::ExceptionRegistry;
use crate::exit::CheckExit;
use crate::header::RulePathHeader;
use crate::kinds::DisplayType;
use crate::reporting;
use crate::store::{MemoryStore, ValueStore};

/// Loads the config named by `args` and applies CLI overrides.
///
/// # Errors
/// Returns error if the config file is malformed.
pub fn resolve_config(args: &CheckArgs) -> Result<Config> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(phase) = args.phase {
        config.phase = phase;
    }
    if args.sequential {
        config.parallel = false;
    }
    Ok(config)
}

/// Loads the reference locale; an unreadable one only disables exceptions.
fn load_reference(path: Option<&Path>) -> Option<MemoryStore> {
    let path = path?;
    match MemoryStore::load(path) {
        Ok(store) => Some(store),
        Err(e) => {
            warn!("reference locale unavailable: {e}");
            None
        }
    }
}

fn build_registry(reference: Option<&MemoryStore>, config: &Config) -> ExceptionRegistry {
    ExceptionRegistry::build(
        reference.map(|r| r as &dyn ValueStore),
        &config.exclusions,
        &config.region_pairs,
    )
}

/// Handles the check command.
///
/// # Errors
/// Returns error on bad config or an internal inconsistency in the checker.
pub fn handle_check(input: &Path, args: &CheckArgs) -> Result<CheckExit> {
    let config = resolve_config(args)?;
    let files = discovery::discover(input, args.reference.as_deref())?;
    if files.is_empty() {
        eprintln!("{} no locale snapshots under {}", "error:".red().bold(), input.display());
        return Ok(CheckExit::InvalidInput);
    }

    let reference = load_reference(args.reference.as_deref());
    let registry = build_registry(reference.as_ref(), &config);
    info!("checking {} locale(s) in phase {}", files.len(), config.phase);

    let mut reports = Vec::new();
    let mut unreadable: Vec<PathBuf> = Vec::new();
    for file in &files {
        let store = match MemoryStore::load(file) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("{} {}: {e}", "error:".red().bold(), file.display());
                unreadable.push(file.clone());
                continue;
            }
        };
        let checker = CollisionChecker::new(
            &store,
            &RulePathHeader,
            &registry,
            &config.exclusions,
            config.phase,
        );
        let report = checker.check_store(config.parallel)?;
        if !args.json {
            reporting::print_report(&report);
        }
        reports.push(report);
    }

    if args.json {
        reporting::print_json(&reports)?;
    }

    let exit = CheckExit::from_reports(&reports);
    if exit == CheckExit::Success && !unreadable.is_empty() {
        return Ok(CheckExit::InvalidInput);
    }
    Ok(exit)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(force: bool) -> Result<CheckExit> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists (use --force to overwrite)");
    }
    Config::new().save(path)?;
    println!("{} wrote {CONFIG_FILE}", "✓".green());
    Ok(CheckExit::Success)
}

/// Handles the exceptions command.
///
/// # Errors
/// Returns error if the config is malformed.
pub fn handle_exceptions(args: &CheckArgs) -> Result<CheckExit> {
    let config = resolve_config(args)?;
    let reference = load_reference(args.reference.as_deref());
    if reference.is_none() {
        eprintln!(
            "{} no reference locale; no exceptions are granted",
            "warning:".yellow().bold()
        );
        return Ok(CheckExit::Success);
    }
    let registry = build_registry(reference.as_ref(), &config);

    let mut zones: Vec<(String, String)> = reference
        .iter()
        .flat_map(|r| r.paths_under(DisplayType::Zone.prefix()))
        .filter_map(|path| {
            let zone = crate::xpath::XPath::parse(&path).ok()?;
            let id = zone.attribute(DisplayType::Zone.region_step(), "type")?.to_string();
            let code = registry.region_exception(&id)?.to_string();
            Some((id, code))
        })
        .collect();
    for pair in &config.region_pairs {
        zones.push((pair.zone.clone(), pair.territory.clone()));
    }
    zones.sort();
    zones.dedup();

    println!("{}", "REGION EXCEPTIONS".cyan().bold());
    for (zone, code) in &zones {
        println!("  {zone} {} {code}", "↔".dimmed());
    }
    println!("\n  {} pairs", zones.len());
    Ok(CheckExit::Success)
}
