//! CLI command definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// IdeaForge - refine raw ideas into structured implementation plans
#[derive(Parser)]
#[command(
    name = "ideaforge",
    about = "Refine raw ideas into structured implementation plans",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Generate clarifying questions for an idea
    Questions {
        /// Idea title
        title: String,

        /// Idea description
        description: String,

        /// YAML file of prior answers (question id -> answer) for a
        /// follow-up round
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate an implementation plan from an idea and its answers
    Plan {
        /// Idea title
        title: String,

        /// Idea description
        description: String,

        /// YAML file of collected answers (question id -> answer)
        #[arg(long)]
        answers: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "markdown")]
        format: OutputFormat,
    },

    /// Parse a markdown or text document into a structured plan
    Parse {
        /// Path to the document
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Render a plan JSON file as markdown
    Render {
        /// Path to the plan JSON
        file: PathBuf,

        /// Idea title for the document heading
        #[arg(long, default_value = "Untitled")]
        title: String,
    },

    /// Show the inferred project category and advisor persona for an idea
    Classify {
        /// Idea title
        title: String,

        /// Idea description
        description: String,
    },
}

/// Output format for command results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_questions_command() {
        let cli = Cli::parse_from(["ideaforge", "questions", "My idea", "a description"]);
        match cli.command {
            Command::Questions {
                title, description, answers, ..
            } => {
                assert_eq!(title, "My idea");
                assert_eq!(description, "a description");
                assert!(answers.is_none());
            }
            _ => panic!("expected questions command"),
        }
    }

    #[test]
    fn test_parse_command_default_format() {
        let cli = Cli::parse_from(["ideaforge", "parse", "plan.md"]);
        match cli.command {
            Command::Parse { format, .. } => assert_eq!(format, OutputFormat::Json),
            _ => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["ideaforge", "--verbose", "classify", "T", "D"]);
        assert!(cli.verbose);
    }
}
