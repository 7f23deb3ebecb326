//! pictospeak CLI: symbol-sequence-to-sentence interpretation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

use pictospeak::interpreter::{Interpreter, InterpreterConfig};
use pictospeak::lexicon::category;
use pictospeak::store::PhraseStore;

#[derive(Parser)]
#[command(
    name = "pictospeak",
    version,
    about = "Turn pictographic symbol sequences into spoken-language sentences"
)]
struct Cli {
    /// JSON lexicon file replacing the built-in symbol catalog.
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// JSON override file replacing the built-in phrase overrides.
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret a symbol sequence and print the sentence.
    Say {
        /// The raw symbol sequence, e.g. "🧑‍🦯➡️🏥".
        sequence: String,
    },

    /// Show how a sequence splits into symbol units.
    Tokens {
        sequence: String,
    },

    /// List and inspect known symbols.
    Symbols {
        #[command(subcommand)]
        action: SymbolAction,
    },

    /// Show the picker categories, or one category's symbols.
    Categories {
        /// Tab icon, e.g. "⚕️". Omit to list all tabs.
        icon: Option<String>,
    },

    /// List the phrase overrides.
    Overrides,

    /// Manage saved phrases (favorites and speech history).
    Phrases {
        /// Phrase store JSON file.
        #[arg(long, default_value = "pictospeak-phrases.json")]
        store: PathBuf,

        #[command(subcommand)]
        action: PhraseAction,
    },
}

#[derive(Subcommand)]
enum SymbolAction {
    /// List all symbols with roles and glosses.
    List,
    /// Show details of one symbol.
    Show {
        symbol: String,
    },
}

#[derive(Subcommand)]
enum PhraseAction {
    /// Show speech history, newest first.
    History,
    /// Show saved favorites, newest first.
    Favorites,
    /// Save a sequence as a favorite.
    Favorite {
        sequence: String,
    },
    /// Remove a favorite by its zero-based index.
    Unfavorite {
        index: usize,
    },
    /// Interpret a sequence, record it to history, and print the sentence.
    Record {
        sequence: String,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = InterpreterConfig {
        lexicon_path: cli.lexicon.clone(),
        overrides_path: cli.overrides.clone(),
    };

    match cli.command {
        Commands::Say { sequence } => {
            let interp = Interpreter::new(config)?;
            println!("{}", interp.interpret(&sequence));
        }

        Commands::Tokens { sequence } => {
            let interp = Interpreter::new(config)?;
            for (i, tok) in interp.tokenize(&sequence).iter().enumerate() {
                let gloss = interp
                    .lookup_symbol(tok)
                    .map(|info| format!("{:?}: {}", info.role, info.gloss))
                    .unwrap_or_else(|| "unknown".to_string());
                println!("  {}. {tok}  ({gloss})", i + 1);
            }
        }

        Commands::Symbols { action } => {
            let interp = Interpreter::new(config)?;
            match action {
                SymbolAction::List => {
                    let mut entries: Vec<_> = interp.lexicon().iter().collect();
                    entries.sort_by_key(|(_, info)| info.gloss.clone());
                    println!("Symbols ({}):", entries.len());
                    for (symbol, info) in entries {
                        println!("  {symbol}  {:?}: {}", info.role, info.gloss);
                    }
                }
                SymbolAction::Show { symbol } => match interp.lookup_symbol(&symbol) {
                    Some(info) => {
                        println!("{symbol}");
                        println!("  role:  {:?}", info.role);
                        println!("  gloss: {}", info.gloss);
                    }
                    None => println!("{symbol} is not in the lexicon."),
                },
            }
        }

        Commands::Categories { icon } => match icon {
            Some(icon) => match category::lookup(&icon) {
                Some(cat) => {
                    println!("{} {} ({} symbols):", cat.icon, cat.name, cat.symbols.len());
                    for symbol in cat.symbols {
                        println!("  {symbol}");
                    }
                }
                None => println!("No category with icon {icon}."),
            },
            None => {
                for cat in category::all_categories() {
                    println!("{}  {} ({} symbols)", cat.icon, cat.name, cat.symbols.len());
                }
            }
        },

        Commands::Overrides => {
            let interp = Interpreter::new(config)?;
            let mut entries: Vec<_> = interp.overrides().iter().collect();
            entries.sort();
            println!("Overrides ({}):", entries.len());
            for (sequence, sentence) in entries {
                println!("  {sequence}  ->  {sentence}");
            }
        }

        Commands::Phrases { store, action } => {
            let mut phrases = PhraseStore::load(&store)?;
            match action {
                PhraseAction::History => {
                    let interp = Interpreter::new(config)?;
                    for (i, raw) in phrases.history().iter().enumerate() {
                        println!("  {}. {raw}  ->  {}", i + 1, interp.interpret(raw));
                    }
                }
                PhraseAction::Favorites => {
                    let interp = Interpreter::new(config)?;
                    for (i, raw) in phrases.favorites().iter().enumerate() {
                        println!("  {i}. {raw}  ->  {}", interp.interpret(raw));
                    }
                }
                PhraseAction::Favorite { sequence } => {
                    if phrases.add_favorite(&sequence) {
                        phrases.save(&store)?;
                        println!("Saved {sequence} to favorites.");
                    } else {
                        println!("{sequence} is already a favorite.");
                    }
                }
                PhraseAction::Unfavorite { index } => {
                    let removed = phrases.remove_favorite(index)?;
                    phrases.save(&store)?;
                    println!("Removed favorite {removed}.");
                }
                PhraseAction::Record { sequence } => {
                    let interp = Interpreter::new(config)?;
                    let sentence = interp.interpret(&sequence);
                    phrases.record(&sequence);
                    phrases.save(&store)?;
                    println!("{sentence}");
                }
            }
        }
    }

    Ok(())
}
