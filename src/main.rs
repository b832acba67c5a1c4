//! IdeaForge CLI entry point

use std::fs;
use std::path::Path;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use ideaforge::classify::classify;
use ideaforge::cli::{Cli, Command, OutputFormat};
use ideaforge::config::Config;
use ideaforge::domain::{AnswerSet, Plan};
use ideaforge::llm::create_client;
use ideaforge::markdown::{parse_markdown, render_markdown};
use ideaforge::planning::PlanningEngine;

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Questions {
            title,
            description,
            answers,
            format,
        } => cmd_questions(&config, &title, &description, answers.as_deref(), format).await,
        Command::Plan {
            title,
            description,
            answers,
            format,
        } => cmd_plan(&config, &title, &description, answers.as_deref(), format).await,
        Command::Parse { file, format } => cmd_parse(&file, format),
        Command::Render { file, title } => cmd_render(&file, &title),
        Command::Classify { title, description } => cmd_classify(&title, &description),
    }
}

fn engine_for(config: &Config) -> Result<PlanningEngine> {
    config.validate()?;
    let client = create_client(&config.llm)?;
    info!(provider = %config.llm.provider, model = %config.llm.model, "created generative client");
    Ok(PlanningEngine::new(client, config.generation.clone()))
}

async fn cmd_questions(
    config: &Config,
    title: &str,
    description: &str,
    answers: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let engine = engine_for(config)?;

    let questions = match answers {
        Some(path) => {
            let prior = load_answers(path)?;
            engine.generate_followup_questions(title, description, &prior).await
        }
        None => engine.generate_questions(title, description).await,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&questions)?),
        _ => {
            for question in &questions {
                println!("{}: {}", question.id, question.text);
            }
        }
    }
    Ok(())
}

async fn cmd_plan(
    config: &Config,
    title: &str,
    description: &str,
    answers: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let engine = engine_for(config)?;

    let answers = match answers {
        Some(path) => load_answers(path)?,
        None => AnswerSet::new(),
    };

    let plan = engine.generate_plan(title, description, &answers).await;
    print_plan(&plan, title, format)
}

fn cmd_parse(file: &Path, format: OutputFormat) -> Result<()> {
    let content = fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?;
    let plan = parse_markdown(&content);

    let title = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string());
    print_plan(&plan, &title, format)
}

fn cmd_render(file: &Path, title: &str) -> Result<()> {
    let content = fs::read_to_string(file).context(format!("Failed to read {}", file.display()))?;
    let plan: Plan = serde_json::from_str(&content).context("Failed to parse plan JSON")?;

    println!("{}", render_markdown(&plan, title));
    Ok(())
}

fn cmd_classify(title: &str, description: &str) -> Result<()> {
    let classification = classify(title, description, None);
    println!("category: {}", classification.category);
    println!("persona:  {}", classification.persona);
    Ok(())
}

fn print_plan(plan: &Plan, title: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(plan)?),
        OutputFormat::Markdown => println!("{}", render_markdown(plan, title)),
        OutputFormat::Text => {
            println!("{}", plan.summary);
            println!();
            for step in &plan.steps {
                match &step.estimated_time {
                    Some(estimate) => println!("{}. {} ({})", step.order, step.title, estimate),
                    None => println!("{}. {}", step.order, step.title),
                }
            }
            if !plan.resources.is_empty() {
                println!();
                for resource in &plan.resources {
                    println!("[{}] {}", resource.kind, resource.title);
                }
            }
        }
    }
    Ok(())
}

fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content).context("Failed to parse answers file")
}
