//! seqtrie - Main entrypoint.
//!
//! Command line front end for the seqtrie library. It loads configuration,
//! initializes logging, reads FASTA input into a compressed trie and prints
//! results as JSON on stdout. Logs go to stderr.

use clap::{Parser, Subcommand};
use seqtrie_lib::config::{ConfigLoader, LogConfig, OutputConfig, SeqTrieConfig, ENV_PREFIX};
use seqtrie_lib::sequence::{prepare_pairs, read_fasta};
use seqtrie_lib::{CompressedTrie, SeqTrieError, SeqTrieResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for seqtrie.
#[derive(Parser, Debug)]
#[clap(name = "seqtrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prefix map of the sequences in a FASTA file
    PrefixMap {
        /// FASTA input file
        #[clap(value_parser)]
        input: PathBuf,
    },

    /// Print the labels stored under a sequence
    Find {
        /// FASTA input file
        #[clap(value_parser)]
        input: PathBuf,

        /// Sequence to look up
        key: String,
    },

    /// Print node and value counts for the trie built from a FASTA file
    Stats {
        /// FASTA input file
        #[clap(value_parser)]
        input: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Summary printed by the `stats` command.
#[derive(Debug, Serialize)]
struct TrieStats {
    nodes: usize,
    values: usize,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> SeqTrieResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_file(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| SeqTrieError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Reads `input` and builds a trie of labels keyed by sequence.
fn load_trie(input: &Path, config: &SeqTrieConfig) -> SeqTrieResult<CompressedTrie<String>> {
    let file = File::open(input)?;
    let records = read_fasta(BufReader::new(file))?;
    info!(records = records.len(), "Read FASTA input from {:?}", input);

    Ok(CompressedTrie::from_pairs(prepare_pairs(records, &config.input)))
}

/// Writes `value` as JSON on stdout.
fn print_json<T: Serialize>(value: &T, output: &OutputConfig) -> SeqTrieResult<()> {
    let json = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn gen_config(output: &Path) -> SeqTrieResult<()> {
    info!("Generating default configuration");
    let default_config = SeqTrieConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| SeqTrieError::Custom(format!("Failed to serialize config: {e}")))?;

    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> SeqTrieResult<()> {
    let args = Args::parse();

    if let Command::GenConfig { output } = &args.command {
        init_logging(&LogConfig::default())?;
        return gen_config(output);
    }

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    init_logging(&config.log)?;

    match args.command {
        Command::PrefixMap { input } => {
            let trie = load_trie(&input, &config)?;
            let prefix_map: BTreeMap<_, _> = trie.prefix_map()?.into_iter().collect();
            info!(groups = prefix_map.len(), "Computed prefix map");
            print_json(&prefix_map, &config.output)
        }
        Command::Find { input, key } => {
            let trie = load_trie(&input, &config)?;
            let key = if config.input.case_sensitive {
                key
            } else {
                key.to_uppercase()
            };
            print_json(&trie.find(&key), &config.output)
        }
        Command::Stats { input } => {
            let trie = load_trie(&input, &config)?;
            let stats = TrieStats {
                nodes: trie.size(),
                values: trie.len(),
            };
            print_json(&stats, &config.output)
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => gen_config(&output),
    }
}
