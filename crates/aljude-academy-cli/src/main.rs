#![forbid(unsafe_code)]

mod commands;

use aljude_academy_api::{
    capability_payload, category_payload, openapi_v1_spec, routes_payload, score_payload,
    sub_capability_payload, validate_score_request, ScoreRequest,
};
use aljude_academy_assess::{parse_answer_level, score_answers, AnswerLevel};
use aljude_academy_catalog::{build_catalog, catalog};
use aljude_academy_core::{ExitCode, MachineError};
use aljude_academy_model::Catalog;
use aljude_academy_query::{
    find_capability, find_category, find_sub_capability, search, sub_capability_neighbors,
    SearchKind, SearchResult,
};
use clap::{error::ErrorKind, ArgAction, Parser};
use commands::{Commands, OpenapiCommand, ShowCommand};
use serde_json::json;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode as ProcessExitCode;

#[derive(Parser)]
#[command(name = "aljude-academy")]
#[command(about = "Aljude Academy catalog operations CLI")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    #[arg(long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

struct CliError {
    exit_code: ExitCode,
    machine: MachineError,
}

impl CliError {
    fn usage(message: &str) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            machine: MachineError::new("usage_error", message),
        }
    }

    fn validation(code: &str, message: &str) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            machine: MachineError::new(code, message),
        }
    }

    fn internal(message: String) -> Self {
        Self {
            exit_code: ExitCode::Internal,
            machine: MachineError::new("internal_error", &message),
        }
    }
}

fn emit_error(error: &CliError, machine_json: bool) {
    if machine_json {
        match serde_json::to_string(&error.machine) {
            Ok(payload) => eprintln!("{payload}"),
            Err(_) => eprintln!(
                "{{\"code\":\"internal_error\",\"message\":\"failed to encode structured error\",\"details\":{{}}}}"
            ),
        }
    } else {
        eprintln!("{}", error.machine.message);
    }
}

fn main() -> ProcessExitCode {
    let wants_json = std::env::args().any(|arg| arg == "--json");
    match run() {
        Ok(()) => ProcessExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            emit_error(&err, wants_json);
            ProcessExitCode::from(err.exit_code as u8)
        }
    }
}

#[derive(Clone, Copy)]
struct OutputMode {
    json: bool,
    quiet: bool,
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{err}");
                return Ok(());
            }
            _ => {
                return Err(CliError {
                    exit_code: ExitCode::Usage,
                    machine: MachineError::new("usage_error", "invalid command line arguments")
                        .with_detail("error", &err.to_string()),
                });
            }
        },
    };
    let output = OutputMode {
        json: cli.json,
        quiet: cli.quiet,
    };
    let _verbosity = cli.verbose;

    let command = cli
        .command
        .ok_or_else(|| CliError::usage("missing command; see --help"))?;

    match command {
        Commands::Version => run_version(output),
        Commands::Validate => run_validate(output),
        Commands::Stats => run_stats(catalog(), output),
        Commands::Routes { out } => run_routes(catalog(), out, output),
        Commands::Search { query } => run_search(catalog(), &query, output),
        Commands::Show { command } => run_show(catalog(), command, output),
        Commands::Score {
            capability,
            sub,
            answers,
        } => run_score(catalog(), &capability, &sub, &answers, output),
        Commands::Openapi { command } => match command {
            OpenapiCommand::Generate { out } => run_openapi_generate(out, output),
        },
    }
}

fn emit_value(value: &serde_json::Value, output: OutputMode) -> Result<(), CliError> {
    if output.json {
        println!(
            "{}",
            serde_json::to_string(value).map_err(|e| CliError::internal(e.to_string()))?
        );
    } else {
        println!(
            "{}",
            serde_json::to_string_pretty(value).map_err(|e| CliError::internal(e.to_string()))?
        );
    }
    Ok(())
}

fn run_version(output: OutputMode) -> Result<(), CliError> {
    if output.json {
        emit_value(
            &aljude_academy_api::version_payload(env!("CARGO_PKG_VERSION")),
            output,
        )
    } else {
        println!("aljude-academy {}", env!("CARGO_PKG_VERSION"));
        Ok(())
    }
}

fn catalog_counts(catalog: &Catalog) -> (usize, usize, usize, usize) {
    (
        catalog.categories.len(),
        catalog.capability_count(),
        catalog.sub_capability_count(),
        catalog.question_count(),
    )
}

fn run_validate(output: OutputMode) -> Result<(), CliError> {
    let catalog = build_catalog()
        .map_err(|e| CliError::validation("catalog_invalid", &format!("catalog invalid: {e}")))?;
    let (categories, capabilities, sub_capabilities, questions) = catalog_counts(&catalog);
    if output.json {
        emit_value(
            &json!({
                "status": "ok",
                "categories": categories,
                "capabilities": capabilities,
                "sub_capabilities": sub_capabilities,
                "questions": questions,
            }),
            output,
        )?;
    } else if !output.quiet {
        println!(
            "catalog validation: OK ({categories} categories, {capabilities} capabilities, {sub_capabilities} sub-capabilities)"
        );
    }
    Ok(())
}

fn run_stats(catalog: &Catalog, output: OutputMode) -> Result<(), CliError> {
    let (categories, capabilities, sub_capabilities, questions) = catalog_counts(catalog);
    if output.json {
        emit_value(
            &json!({
                "categories": categories,
                "capabilities": capabilities,
                "sub_capabilities": sub_capabilities,
                "questions": questions,
            }),
            output,
        )?;
    } else {
        println!("categories={categories}");
        println!("capabilities={capabilities}");
        println!("sub_capabilities={sub_capabilities}");
        println!("questions={questions}");
    }
    Ok(())
}

fn run_routes(
    catalog: &Catalog,
    out: Option<PathBuf>,
    output: OutputMode,
) -> Result<(), CliError> {
    let payload = routes_payload(catalog);
    if let Some(path) = out {
        let pretty =
            serde_json::to_vec_pretty(&payload).map_err(|e| CliError::internal(e.to_string()))?;
        write_file(&path, &pretty)?;
        if !output.quiet && !output.json {
            println!("routes written to {}", path.display());
        }
        return Ok(());
    }
    if output.json {
        return emit_value(&payload, output);
    }
    for section in ["categories", "capabilities", "sub_capabilities"] {
        if let Some(hrefs) = payload[section].as_array() {
            for href in hrefs {
                if let Some(href) = href.as_str() {
                    println!("{href}");
                }
            }
        }
    }
    Ok(())
}

fn kind_str(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::Category => "category",
        SearchKind::Capability => "capability",
        SearchKind::SubCapability => "sub_capability",
    }
}

fn run_search(catalog: &Catalog, query: &str, output: OutputMode) -> Result<(), CliError> {
    let results: Vec<SearchResult> = search(catalog, query);
    if output.json {
        return emit_value(
            &serde_json::to_value(&results).map_err(|e| CliError::internal(e.to_string()))?,
            output,
        );
    }
    for result in &results {
        println!("{}\t{}\t{}", kind_str(result.kind), result.title, result.href);
    }
    if !output.quiet {
        eprintln!("{} result(s)", results.len());
    }
    Ok(())
}

fn run_show(catalog: &Catalog, command: ShowCommand, output: OutputMode) -> Result<(), CliError> {
    match command {
        ShowCommand::Category { slug } => {
            let category = find_category(catalog, &slug).ok_or_else(|| {
                CliError::validation("not_found", &format!("category not found: {slug}"))
            })?;
            if output.json {
                emit_value(&category_payload(category), output)
            } else {
                println!("{} ({})", category.name, category.slug);
                println!("{}", category.description);
                for capability in &category.capabilities {
                    println!("  {}\t{}", capability.slug, capability.name);
                }
                Ok(())
            }
        }
        ShowCommand::Capability { slug } => {
            let found = find_capability(catalog, &slug).ok_or_else(|| {
                CliError::validation("not_found", &format!("capability not found: {slug}"))
            })?;
            if output.json {
                emit_value(&capability_payload(&found), output)
            } else {
                println!("{} ({})", found.capability.name, found.capability.slug);
                println!("category: {}", found.category.name);
                println!("{}", found.capability.promise);
                for sub in &found.capability.sub_capabilities {
                    println!("  {}\t{}", sub.slug, sub.name);
                }
                Ok(())
            }
        }
        ShowCommand::SubCapability { capability, sub } => {
            let found = find_sub_capability(catalog, &capability, &sub).ok_or_else(|| {
                CliError::validation(
                    "not_found",
                    &format!("sub-capability not found: {capability}/{sub}"),
                )
            })?;
            if output.json {
                let neighbors = sub_capability_neighbors(found.capability, &sub)
                    .ok_or_else(|| CliError::internal("neighbor lookup failed".to_string()))?;
                emit_value(&sub_capability_payload(&found, &neighbors), output)
            } else {
                println!(
                    "{} ({}/{})",
                    found.sub_capability.name, found.capability.slug, found.sub_capability.slug
                );
                println!("benefit: {}", found.sub_capability.benefit);
                println!("outcome: {}", found.sub_capability.outcome);
                println!(
                    "questions: {}",
                    found.sub_capability.assessment.questions.len()
                );
                Ok(())
            }
        }
    }
}

fn parse_answers(raw: &[String]) -> Result<BTreeMap<String, AnswerLevel>, CliError> {
    let mut answers = BTreeMap::new();
    for pair in raw {
        let (id, level) = pair.split_once('=').ok_or_else(|| {
            CliError::usage(&format!("--answer must be qN=<not|partial|full>, got '{pair}'"))
        })?;
        let level = parse_answer_level(level)
            .map_err(|e| CliError::usage(&e.to_string()))?;
        answers.insert(id.trim().to_string(), level);
    }
    Ok(answers)
}

fn run_score(
    catalog: &Catalog,
    capability: &str,
    sub: &str,
    raw_answers: &[String],
    output: OutputMode,
) -> Result<(), CliError> {
    let found = find_sub_capability(catalog, capability, sub).ok_or_else(|| {
        CliError::validation(
            "not_found",
            &format!("sub-capability not found: {capability}/{sub}"),
        )
    })?;
    let answers = parse_answers(raw_answers)?;
    let assessment = &found.sub_capability.assessment;
    let request = ScoreRequest { answers };
    validate_score_request(&request, assessment)
        .map_err(|e| CliError::validation("incomplete_answers", &e.message))?;
    let breakdown = score_answers(&request.answers, assessment.questions.len());
    if output.json {
        emit_value(&score_payload(&breakdown), output)
    } else {
        println!(
            "level={} points={}/{}",
            breakdown.level, breakdown.points, breakdown.max_points
        );
        println!("{}", breakdown.level.description());
        if !output.quiet {
            println!("{}", aljude_academy_assess::next_step_hint());
        }
        Ok(())
    }
}

fn run_openapi_generate(out: Option<PathBuf>, output: OutputMode) -> Result<(), CliError> {
    let spec = openapi_v1_spec();
    match out {
        Some(path) => {
            let pretty =
                serde_json::to_vec_pretty(&spec).map_err(|e| CliError::internal(e.to_string()))?;
            write_file(&path, &pretty)?;
            if !output.quiet && !output.json {
                println!("openapi document written to {}", path.display());
            }
            Ok(())
        }
        None => emit_value(&spec, output),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                CliError::internal(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
    }
    fs::write(path, bytes)
        .map_err(|e| CliError::internal(format!("failed to write {}: {e}", path.display())))
}
