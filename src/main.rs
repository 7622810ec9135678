use std::io;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use div_centering::quiz::{QuestionBank, QuizSession};
use div_centering::server::{self, ServerConfig};
use div_centering::style::{self, CenteringMethod, PlaygroundParams};
use div_centering::terminal::{self, QuizOutcome};

#[derive(Parser)]
#[command(name = "centering", version)]
#[command(about = "Learn to center a div: lessons, playground, and quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the lesson site locally
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,

        /// Server port
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// JSON question bank to use instead of the built-in quiz
        #[arg(long)]
        questions: Option<PathBuf>,
    },

    /// Print the CSS that centers a box with the given method
    Resolve {
        /// Centering method
        #[arg(long, value_enum, default_value_t = MethodArg::Flexbox)]
        method: MethodArg,

        /// Size of the centered box in pixels (50-250)
        #[arg(long, default_value_t = 100)]
        content: u32,

        /// Size of the parent container in pixels (200-500)
        #[arg(long, default_value_t = 300)]
        parent: u32,

        /// Print the full style descriptor as JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the quiz in the terminal
    Quiz {
        /// JSON question bank to use instead of the built-in quiz
        #[arg(long)]
        questions: Option<PathBuf>,
    },

    /// Validate a JSON question bank without serving it
    Check {
        /// Question bank file
        file: PathBuf,
    },
}

/// Method names accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum MethodArg {
    Flexbox,
    Grid,
    Absolute,
}

impl From<MethodArg> for CenteringMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Flexbox => CenteringMethod::Flexbox,
            MethodArg::Grid => CenteringMethod::Grid,
            MethodArg::Absolute => CenteringMethod::Absolute,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Serve { host, port, questions } => {
            let bank = load_bank(questions.as_deref())?;
            let config = ServerConfig {
                host,
                port,
                bank: Arc::new(bank),
            };
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(server::run_server(config))
                .context("site server failed")?;
        }

        Commands::Resolve {
            method,
            content,
            parent,
            json,
        } => {
            let params = PlaygroundParams::new(method.into(), content, parent)?;
            let descriptor = style::resolve(&params);
            if json {
                println!("{}", serde_json::to_string_pretty(&descriptor)?);
            } else {
                print!("{}", descriptor.snippet);
            }
        }

        Commands::Quiz { questions } => {
            let bank = load_bank(questions.as_deref())?;
            let mut session = QuizSession::new(Arc::new(bank));
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            match terminal::run_quiz(&mut session, stdin.lock(), &mut stdout)? {
                QuizOutcome::Completed { .. } => {}
                QuizOutcome::Quit { score, answered } => {
                    eprintln!("\nquit after {answered} question(s), score {score}");
                }
            }
        }

        Commands::Check { file } => {
            let bank = load_bank(Some(&file))?;
            eprintln!("{}: ok ({} questions)", file.display(), bank.len());
        }
    }
    Ok(())
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank> {
    match path {
        Some(path) => {
            let bank = QuestionBank::load(path)
                .with_context(|| format!("cannot load questions from '{}'", path.display()))?;
            log::debug!("loaded {} questions from {}", bank.len(), path.display());
            Ok(bank)
        }
        None => Ok(QuestionBank::builtin()),
    }
}
