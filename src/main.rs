use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use dwibahasa::core::{localize_file, DwibahasaResult, LocalizeOptions};
use dwibahasa::env::{self, EnvVar};
use dwibahasa::i18n::{FileStore, Language, LanguageStore, TranslationRegistry, DEFAULT_LANGUAGE};

#[derive(Parser)]
#[command(
    name = "dwibahasa",
    version,
    about = "Localize bilingual (Indonesian/English) HTML pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply dictionary fragments to an HTML page
    Localize {
        /// Input HTML template
        input: PathBuf,

        /// Dictionary fragment file (JSON); may be given multiple times
        #[arg(long = "dict", value_name = "FILE")]
        dictionaries: Vec<PathBuf>,

        /// Target language code (id, en)
        #[arg(short, long)]
        lang: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Character encoding of the input document
        #[arg(long)]
        encoding: Option<String>,
    },

    /// Print or persist the active language
    Language {
        /// Language code to persist (prints the active code when omitted)
        code: Option<String>,
    },
}

fn main() {
    init_logging();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(cli: Cli) -> DwibahasaResult<()> {
    match cli.command {
        Command::Localize {
            input,
            dictionaries,
            lang,
            output,
            encoding,
        } => {
            let options = LocalizeOptions {
                language: lang.or_else(|| env::i18n::Lang::get().ok()),
                encoding,
                state_file: Some(state_file_path()),
            };

            let output_data = localize_file(&input, &dictionaries, &options)?;

            match output {
                Some(path) => fs::write(path, output_data)?,
                None => io::stdout().write_all(&output_data)?,
            }
        }
        Command::Language { code } => {
            let store = FileStore::new(state_file_path());
            match code {
                Some(code) => {
                    let mut registry = TranslationRegistry::new(Box::new(store));
                    println!("{}", registry.switch_to(&code));
                }
                None => {
                    let active = store
                        .load()
                        .as_deref()
                        .and_then(Language::parse)
                        .unwrap_or(DEFAULT_LANGUAGE);
                    println!("{}", active);
                }
            }
        }
    }

    Ok(())
}

fn state_file_path() -> PathBuf {
    env::i18n::StateFile::get()
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(FileStore::default_path)
}

fn init_logging() {
    let level = env::core::LogLevel::get().unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
