//! stylenorm CLI - inspect DOCX style mappings and classify conversion warnings

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use stylenorm::{
    model::split_messages, CategorizedDiagnostics, DiagnosticClassifier, DiagnosticMessage,
    JsonFormat, ParagraphElement, StyleInfo, StyleMappingTable, StyleResolver, SummaryLanguage,
};

#[derive(Parser)]
#[command(name = "stylenorm")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Inspect DOCX style mappings and classify conversion warnings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in style map
    Map {
        /// Output the rules as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a paragraph style is resolved
    Resolve {
        /// Style id of the paragraph
        #[arg(long)]
        id: Option<String>,

        /// Style name of the paragraph
        #[arg(long)]
        name: Option<String>,
    },

    /// Classify renderer warnings and print a summary
    Classify {
        /// File with one warning per line, or a JSON array of
        /// {"type", "message"} objects (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output the categories as JSON
        #[arg(long)]
        json: bool,

        /// Summary language
        #[arg(long, value_enum, default_value = "ru", env = "STYLENORM_LANG")]
        lang: Language,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Language {
    /// Russian
    Ru,
    /// English
    En,
}

impl From<Language> for SummaryLanguage {
    fn from(language: Language) -> Self {
        match language {
            Language::Ru => SummaryLanguage::Russian,
            Language::En => SummaryLanguage::English,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Map { json }) => cmd_map(json),
        Some(Commands::Resolve { id, name }) => cmd_resolve(id, name),
        Some(Commands::Classify { input, json, lang }) => {
            cmd_classify(input.as_deref(), json, lang.into())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: stylenorm <COMMAND>".yellow());
            println!("       stylenorm --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_map(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = StyleMappingTable::build();

    if json {
        println!("{}", stylenorm::render::to_json(&table, JsonFormat::Pretty)?);
    } else {
        println!("{}", table.to_style_map());
    }

    Ok(())
}

fn cmd_resolve(id: Option<String>, name: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let element = ParagraphElement {
        style_id: id,
        style_name: name,
        text: String::new(),
    };
    let resolution = StyleResolver::new().resolve_traced(&element);
    let table = StyleMappingTable::build();

    let show = |value: Option<&str>| value.unwrap_or("-").to_string();

    println!("{}", "Paragraph Style".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Input id".bold(), show(element.style_id()));
    println!("{}: {}", "Input name".bold(), show(element.style_name()));

    match resolution.applied {
        Some((rule, style)) => {
            println!("{}: {:?}", "Rule".bold(), rule);
            println!("{}: {}", "Resolved to".bold(), style.to_string().green());
        }
        None => println!("{}: {}", "Resolved to".bold(), "unchanged".yellow()),
    }

    let resolved_name = resolution.element.style_name().unwrap_or_default();
    match table.lookup(resolved_name) {
        Some(rule) => println!("{}: {}", "Mapping".bold(), rule),
        None => println!(
            "{}: {}",
            "Mapping".bold(),
            "no rule (renderer will warn)".yellow()
        ),
    }

    Ok(())
}

/// Classification report printed with `--json`.
#[derive(Serialize)]
struct ClassifyReport {
    style_analysis: CategorizedDiagnostics,
    warning_summary: String,
    styles: Vec<StyleInfo>,
    conversion_errors: Vec<String>,
}

fn cmd_classify(
    input: Option<&Path>,
    json: bool,
    language: SummaryLanguage,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            content
        }
    };

    let messages = parse_messages(&content)?;
    let (warnings, errors) = split_messages(&messages);
    log::debug!("Read {} warnings, {} errors", warnings.len(), errors.len());

    let classifier = DiagnosticClassifier::new().with_language(language);
    let style_analysis = classifier.classify(&warnings);
    let report = ClassifyReport {
        warning_summary: classifier.summarize(&style_analysis),
        styles: classifier.extract_all(&style_analysis),
        style_analysis,
        conversion_errors: errors,
    };

    if json {
        println!("{}", stylenorm::render::to_json(&report, JsonFormat::Pretty)?);
        return Ok(());
    }

    println!("{}", "Warning Analysis".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (category, messages) in report.style_analysis.iter() {
        if messages.is_empty() {
            continue;
        }
        let label = format!("{} ({})", category, messages.len());
        if category.is_actionable() {
            println!("{}", label.yellow().bold());
        } else {
            println!("{}", label.bold());
        }
        for message in messages {
            println!("  {} {}", "•".dimmed(), message);
        }
    }

    if !report.styles.is_empty() {
        println!();
        println!("{}", "Styles".cyan().bold());
        for info in &report.styles {
            println!("  {} (id: {})", info.style_name, info.style_id);
        }
    }

    if !report.conversion_errors.is_empty() {
        println!();
        println!("{}", "Errors".red().bold());
        for error in &report.conversion_errors {
            println!("  {} {}", "•".dimmed(), error);
        }
    }

    println!();
    println!("{}: {}", "Summary".bold(), report.warning_summary.green());

    Ok(())
}

/// Read diagnostics from a JSON array of messages or from plain lines.
///
/// Plain lines are all treated as warnings; blank lines are skipped.
fn parse_messages(content: &str) -> Result<Vec<DiagnosticMessage>, Box<dyn std::error::Error>> {
    if content.trim_start().starts_with('[') {
        let messages: Vec<DiagnosticMessage> = serde_json::from_str(content)?;
        return Ok(messages);
    }

    Ok(content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(DiagnosticMessage::warning)
        .collect())
}

fn cmd_version() {
    println!("{} {}", "stylenorm".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("DOCX style normalization and warning classification tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/stylenorm".dimmed());
    println!("License: MIT");
}
