use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand};
use statecheck::cli::{self, CheckOptions, CliError, OutputFormat, SchemaSource};

#[derive(ClapParser)]
#[command(name = "statecheck")]
#[command(about = "statecheck - Type-check boolean expressions over a state schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an expression against a schema
    Check {
        /// The expression to validate
        expression: String,

        /// Schema JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print the JSON report
        #[arg(short, long, requires = "json")]
        pretty: bool,
    },

    /// List every id in a schema
    Ids {
        /// Schema JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        schema: Option<PathBuf>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'statecheck docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            schema,
            json,
            pretty,
        } => run_check(expression, schema, json, pretty),
        Commands::Ids { schema } => run_ids(schema),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(true)
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
            true
        }),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}

fn schema_source(path: Option<PathBuf>) -> Result<Option<SchemaSource>, CliError> {
    match path {
        Some(path) => Ok(Some(SchemaSource::File(path))),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(SchemaSource::Inline(buffer)))
        }
        None => Ok(None),
    }
}

fn run_check(
    expression: String,
    schema: Option<PathBuf>,
    json: bool,
    pretty: bool,
) -> Result<bool, CliError> {
    let format = match (json, pretty) {
        (true, true) => OutputFormat::PrettyJson,
        (true, false) => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    let options = CheckOptions {
        expression,
        schema: schema_source(schema)?,
        format,
    };

    let result = cli::execute_check(&options)?;
    println!("{}", result.rendered);
    Ok(result.passed())
}

fn run_ids(schema: Option<PathBuf>) -> Result<bool, CliError> {
    let source = schema_source(schema)?.ok_or(CliError::NoSchema)?;
    println!("{}", cli::list_ids(&source)?);
    Ok(true)
}
