//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};

/// popo - Ask questions about the repository you are standing in
#[derive(Parser, Debug)]
#[command(name = "popo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API key for the chat endpoint
    #[arg(long, env = "POPO_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(
        long,
        env = "POPO_API_BASE",
        default_value = "https://api.openai.com/v1",
        global = true
    )]
    pub api_base: String,

    /// Model identifier
    #[arg(long, env = "POPO_MODEL", default_value = "gpt-4o-mini", global = true)]
    pub model: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Ask the agent a question about the repository
    ///
    /// Assembles the project context, builds the system prompt, and runs
    /// the tool-calling loop until the model answers.
    ///
    /// Examples:
    ///   popo ask "who committed most recently?"
    ///   popo ask --no-tools "what does this project build?"
    Ask {
        /// The question to ask
        question: String,

        /// Run without tools (prompt context only)
        #[arg(long)]
        no_tools: bool,

        /// Upper bound on model round trips
        #[arg(long, default_value_t = 8)]
        max_iterations: usize,

        /// Recent commits to include in the context
        #[arg(long, default_value_t = 5)]
        commits: usize,
    },

    /// Print the gathered project context
    Context {
        /// Output format
        #[arg(long, value_enum, default_value_t = ContextFormat::Tree)]
        format: ContextFormat,

        /// Recent commits to include
        #[arg(long, default_value_t = 5)]
        commits: usize,
    },

    /// List the available tools
    Tools,

    /// Check configuration and repository health
    Check,
}

/// Output format for the context command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextFormat {
    /// Human-readable tree and summary
    Tree,
    /// The XML document embedded in prompts
    Xml,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["popo"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["popo", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_ask_command() {
        let cli = Cli::parse_from(["popo", "ask", "who committed last?"]);
        match cli.command {
            Some(Commands::Ask {
                question,
                no_tools,
                max_iterations,
                commits,
            }) => {
                assert_eq!(question, "who committed last?");
                assert!(!no_tools);
                assert_eq!(max_iterations, 8);
                assert_eq!(commits, 5);
            }
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn parse_ask_no_tools() {
        let cli = Cli::parse_from(["popo", "ask", "q", "--no-tools"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Ask { no_tools: true, .. })
        ));
    }

    #[test]
    fn parse_ask_with_model_override() {
        let cli = Cli::parse_from(["popo", "ask", "q", "--model", "gpt-4o"]);
        assert_eq!(cli.model, "gpt-4o");
    }

    #[test]
    fn parse_context_default_format() {
        let cli = Cli::parse_from(["popo", "context"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Context {
                format: ContextFormat::Tree,
                commits: 5
            })
        ));
    }

    #[test]
    fn parse_context_xml_format() {
        let cli = Cli::parse_from(["popo", "context", "--format", "xml"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Context {
                format: ContextFormat::Xml,
                ..
            })
        ));
    }

    #[test]
    fn parse_context_commits_override() {
        let cli = Cli::parse_from(["popo", "context", "--commits", "10"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Context { commits: 10, .. })
        ));
    }

    #[test]
    fn parse_tools_command() {
        let cli = Cli::parse_from(["popo", "tools"]);
        assert!(matches!(cli.command, Some(Commands::Tools)));
    }

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["popo", "check"]);
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn verbose_flag_works_with_commands() {
        let cli = Cli::parse_from(["popo", "-v", "check"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Check)));

        let cli = Cli::parse_from(["popo", "check", "--verbose"]);
        assert!(cli.verbose);
    }
}
