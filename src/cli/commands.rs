//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, Severity};
use nextname_core::registry::{self, SelectorInfo};
use nextname_core::{NumberingScheme, Ordinal};
use nextname_syntax::{DirectiveError, ParsedTemplate, Template};
use serde_json::{Value, json};
use thiserror::Error;

use super::{CliError, CliResult, ExitCode};
use crate::config::RenameConfig;
use crate::history::{EntityId, NameHistory};
use crate::session::Renamer;

/// Problems with command-line input, before any name is computed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown selector `{0}` (run `nextname schemes` for the list)")]
    UnknownSelector(char),
    #[error("selector must be a single character, got {0:?}")]
    InvalidSelector(String),
    #[error("selector `{0}` does not take a width")]
    NotWidthCapable(char),
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        CliError::failure(format!("Error: {err}"))
    }
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Read one name per line, skipping blank lines.
fn read_names(path: &Path) -> Result<Vec<String>, InputError> {
    Ok(read_file(path)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

fn selector_info(selector: &str) -> Result<&'static SelectorInfo, InputError> {
    let mut chars = selector.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(InputError::InvalidSelector(selector.to_string()));
    };
    registry::lookup(c).ok_or(InputError::UnknownSelector(c))
}

// ============================================================================
// next
// ============================================================================

/// Print the next available name for `template`.
pub fn next(
    template: &str,
    mut names: Vec<String>,
    names_file: Option<&Path>,
    description: Option<&Path>,
    config: RenameConfig,
) -> CliResult<ExitCode> {
    if let Some(path) = names_file {
        names.extend(read_names(path)?);
    }
    let description = description.map(read_file).transpose()?;

    let history = NameHistory::from_names(names);
    let id = EntityId::try_from(history.len() + 1).unwrap_or(EntityId::MAX);
    let mut renamer = Renamer::with_history(history, config);
    let rename = renamer.launch(id, template, description.as_deref());

    println!("{}", rename.name);
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// check
// ============================================================================

/// Show how `template` is read and report every rejected directive.
///
/// Exits with failure when a directive was rejected as an error. Warnings (a dangling trailing `%`, a width on `%b`)
/// are reported but do not fail.
pub fn check(template: &str, json: bool) -> CliResult<ExitCode> {
    let parsed = nextname_syntax::parse(template);

    if json {
        let report = check_json(template, &parsed);
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::failure(format!("Error serializing report: {e}")))?;
        println!("{text}");
    } else {
        println!("{}", check_text(&parsed));
        for err in parsed.rejected.iter().chain(&parsed.warnings) {
            let report = miette::Report::new(err.clone()).with_source_code(template.to_string());
            eprintln!("{report:?}");
        }
    }

    let failed = parsed
        .rejected
        .iter()
        .any(|err| !matches!(err.severity(), Some(Severity::Warning)));
    Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn check_text(parsed: &ParsedTemplate) -> String {
    match &parsed.template {
        Template::Literal(text) => format!("literal: {text:?} (no directive)"),
        Template::Directive(d) => format!(
            "prefix:   {:?}\nselector: %{} ({})\nsuffix:   {:?}",
            d.prefix, d.selector, d.scheme, d.suffix
        ),
    }
}

fn diagnostics_json(errors: &[DirectiveError]) -> Vec<Value> {
    errors
        .iter()
        .map(|err| {
            let span = err.span();
            json!({
                "kind": err.kind(),
                "message": err.to_string(),
                "start": span.start,
                "end": span.end,
            })
        })
        .collect()
}

fn check_json(template: &str, parsed: &ParsedTemplate) -> Value {
    let rejected = diagnostics_json(&parsed.rejected);
    let warnings = diagnostics_json(&parsed.warnings);

    match &parsed.template {
        Template::Literal(text) => json!({
            "template": template,
            "directive": null,
            "literal": text,
            "rejected": rejected,
            "warnings": warnings,
        }),
        Template::Directive(d) => json!({
            "template": template,
            "directive": {
                "prefix": d.prefix,
                "selector": d.selector.to_string(),
                "family": d.scheme.family().as_str(),
                "scheme": d.scheme.to_string(),
                "width": d.scheme.width(),
                "suffix": d.suffix,
                "start": d.span.start,
                "end": d.span.end,
            },
            "literal": null,
            "rejected": rejected,
            "warnings": warnings,
        }),
    }
}

// ============================================================================
// schemes
// ============================================================================

/// List the selector registry.
pub fn schemes(json: bool) -> CliResult<ExitCode> {
    if json {
        let text = serde_json::to_string_pretty(&schemes_json())
            .map_err(|e| CliError::failure(format!("Error serializing schemes: {e}")))?;
        println!("{text}");
    } else {
        for info in registry::SELECTORS {
            let width = if info.scheme.is_width_capable() { "width" } else { "" };
            println!(
                "%{}  {:<18} {:<5}  {:<40} {}",
                info.selector,
                info.scheme.to_string(),
                width,
                info.summary,
                info.sample
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn schemes_json() -> Value {
    Value::Array(
        registry::SELECTORS
            .iter()
            .map(|info| {
                json!({
                    "selector": info.selector.to_string(),
                    "family": info.scheme.family().as_str(),
                    "scheme": info.scheme.to_string(),
                    "width_capable": info.scheme.is_width_capable(),
                    "summary": info.summary,
                    "sample": info.sample,
                })
            })
            .collect(),
    )
}

// ============================================================================
// encode / decode
// ============================================================================

fn scheme_for(selector: &str, width: Option<u16>) -> Result<NumberingScheme, InputError> {
    let info = selector_info(selector)?;
    match width {
        None => Ok(info.scheme),
        Some(width) => info
            .scheme
            .with_width(width)
            .ok_or(InputError::NotWidthCapable(info.selector)),
    }
}

/// Encode `ordinal` with the scheme behind `selector`.
pub fn encode(selector: &str, ordinal: Ordinal, width: Option<u16>) -> CliResult<ExitCode> {
    let scheme = scheme_for(selector, width)?;
    let text = scheme.encode(ordinal);
    if text.is_empty() {
        return Err(CliError::failure(format!(
            "Error: {ordinal} has no representation in {scheme}"
        )));
    }
    println!("{text}");
    Ok(ExitCode::SUCCESS)
}

/// Decode `text` with the scheme behind `selector`.
pub fn decode(selector: &str, text: &str) -> CliResult<ExitCode> {
    let scheme = scheme_for(selector, None)?;
    let ordinal = scheme
        .decode(text)
        .ok_or_else(|| CliError::failure(format!("Error: {text:?} is not a valid {scheme} value")))?;
    println!("{ordinal}");
    Ok(ExitCode::SUCCESS)
}
