use clap::{Args, Parser as ClapParser, Subcommand};
use std::io::{self, BufRead, Write};
use tally_calc::cli::{self, CliError, RunOptions};
use tally_calc::config::{EvalConfig, DEFAULT_SQRT_SYMBOL};

#[derive(ClapParser)]
#[command(name = "tally")]
#[command(about = "Tally - evaluate one arithmetic expression per line")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Args)]
struct GlobalOptions {
    /// Character used as the square root prefix
    #[arg(long, global = true, default_value_t = DEFAULT_SQRT_SYMBOL)]
    sqrt_symbol: char,

    /// Return NaN and infinities instead of reporting errors
    #[arg(long, global = true)]
    ieee: bool,

    /// Round results to this many decimal places
    #[arg(short, long, global = true)]
    precision: Option<u32>,

    /// Print one JSON object per result
    #[arg(long, global = true)]
    json: bool,

    /// Print the token sequence before each result
    #[arg(long, global = true)]
    tokens: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression given as an argument
    Eval {
        /// The expression to evaluate
        expression: String,
    },

    /// Evaluate stdin line by line, keeping the answer between lines
    Repl,

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'tally docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.options.verbose);

    let options = RunOptions {
        config: EvalConfig::default()
            .with_sqrt_symbol(cli.options.sqrt_symbol)
            .with_domain_checks(!cli.options.ieee),
        precision: cli.options.precision,
        json: cli.options.json,
        show_tokens: cli.options.tokens,
    };

    let result = match cli.command {
        None => run_single_line(&options),
        Some(Commands::Eval { expression }) => run_expression(&expression, &options),
        Some(Commands::Repl) => run_repl(&options),
        Some(Commands::Docs) => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Some(Commands::Doc { category }) => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Logging goes to stderr and stays off unless `RUST_LOG` is set or
/// `--verbose` is passed.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("tally_calc=debug")
    } else {
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
        .with(filter)
        .init();
}

fn run_single_line(options: &RunOptions) -> Result<(), CliError> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    run_expression(&line, options)
}

fn run_expression(expression: &str, options: &RunOptions) -> Result<(), CliError> {
    let mut evaluator = options.evaluator()?;
    println!("{}", cli::execute_line(&mut evaluator, expression, options)?);
    Ok(())
}

fn run_repl(options: &RunOptions) -> Result<(), CliError> {
    let mut evaluator = options.evaluator()?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut stderr = io::stderr();

    let prompt: Option<&mut dyn Write> = if atty::is(atty::Stream::Stdin) {
        Some(&mut stderr)
    } else {
        None
    };

    cli::run_lines(&mut evaluator, stdin.lock(), &mut out, options, prompt)?;
    Ok(())
}
