mod error;
mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use simplelog::{Config, WriteLogger};
use tablesort_lib::hash::UrlHash;
use tablesort_lib::key::SortKeyRegistry;
use tablesort_lib::status::LogStatus;
use tablesort_lib::table::TableSource;
use tablesort_lib::{ClickEvent, SortConfig, TableRegistry};

use crate::error::CliError;
use crate::render::{TableOutput, render_text};

#[derive(Parser)]
#[command(name = "tablesort")]
#[command(about = "Sort tables by column and keep the sort state in a URL fragment", long_about = None)]
struct Cli {
    /// Sort configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tables in the order selected by a URL fragment
    Show {
        /// JSON file with an array of tables
        tables: PathBuf,
        /// URL fragment, e.g. "#t:sales=1a"
        #[arg(long, default_value = "")]
        hash: String,
        /// Print JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },
    /// Click a column header and print the resulting URL fragment
    Click {
        /// JSON file with an array of tables
        tables: PathBuf,
        /// Current URL fragment
        #[arg(long, default_value = "")]
        hash: String,
        /// Id of the clicked table
        #[arg(long)]
        table: String,
        /// Index of the clicked column
        #[arg(long)]
        column: usize,
    },
}

/// Tables loaded from a file, with their headers kept for output.
struct Page {
    headers: Vec<(String, Vec<String>)>,
    tables: TableRegistry<Vec<String>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    WriteLogger::init(level, Config::default(), std::io::stderr())?;

    let config = match &cli.config {
        Some(path) => read_json(path)?,
        None => SortConfig::default(),
    };
    debug!("Using config {:?}", config);

    match cli.command {
        Commands::Show { tables, hash, json } => {
            let mut page = load_page(&tables, &config)?;
            let hash = UrlHash::parse(&hash)?;
            page.tables.update_tables(&hash, LogStatus);

            for (id, headers) in &page.headers {
                let Some(state) = page.tables.get(id) else {
                    continue;
                };
                if json {
                    let output = TableOutput::new(id, headers, state);
                    println!("{}", serde_json::to_string_pretty(&output)?);
                } else {
                    println!("{}", render_text(id, headers, state));
                }
            }
        }
        Commands::Click {
            tables,
            hash,
            table,
            column,
        } => {
            let mut page = load_page(&tables, &config)?;
            let mut hash = UrlHash::parse(&hash)?;
            page.tables.update_tables(&hash, LogStatus);

            let fragment = page
                .tables
                .dispatch(&mut hash, &ClickEvent::new(table, column))?;
            println!("#{}", fragment);
        }
    }

    Ok(())
}

fn load_page(path: &Path, config: &SortConfig) -> Result<Page, CliError> {
    let sources: Vec<TableSource> = read_json(path)?;
    let keys = SortKeyRegistry::new(config.clone());

    let mut page = Page {
        headers: Vec::with_capacity(sources.len()),
        tables: TableRegistry::new(config),
    };
    for source in sources {
        let id = source.id.clone();
        page.headers.push((id.clone(), source.headers.clone()));
        page.tables
            .register_source(source, &keys)
            .map_err(|source| CliError::Config { table: id, source })?;
    }
    Ok(page)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}
