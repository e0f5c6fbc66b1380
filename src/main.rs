// ===== quadcrack/src/main.rs =====
use clap::{Parser, Subcommand};
use quadcrack::scorer::{loader, QuadgramModel, Scorer};
use std::process;
use std::sync::Arc;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/english_quadgrams.txt")]
    ngrams: String,

    #[arg(global = true, short, long, default_value = "data/dictionary.txt")]
    dictionary: String,

    /// Master seed. Fixes every random draw, making runs reproducible.
    #[arg(global = true, short, long)]
    seed: Option<u64>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Crack(cmd::crack::CrackArgs),
    Score(cmd::score::ScoreArgs),
    Encrypt(cmd::encrypt::EncryptArgs),
    Caesar(cmd::caesar::CaesarArgs),
    Ngrams(cmd::ngrams::NgramsArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let result = match cli.command {
        Commands::Crack(ref args) => {
            let scorer = load_scorer(&cli.ngrams);
            cmd::crack::run(args.clone(), scorer, cli.seed)
        }
        Commands::Score(ref args) => {
            let scorer = load_scorer(&cli.ngrams);
            cmd::score::run(args.clone(), scorer);
            Ok(())
        }
        Commands::Encrypt(ref args) => cmd::encrypt::run(args.clone(), cli.seed),
        Commands::Caesar(ref args) => match args.shift {
            Some(amount) => {
                cmd::caesar::run_shift(args.clone(), amount);
                Ok(())
            }
            None => {
                info!("📖 Loading dictionary: {}", cli.dictionary);
                let dict = loader::load_dictionary(&cli.dictionary).unwrap_or_else(|e| {
                    error!("❌ Could not load dictionary '{}': {}", cli.dictionary, e);
                    process::exit(1);
                });
                info!("   {} words", dict.len());
                cmd::caesar::run_brute(args.clone(), &dict);
                Ok(())
            }
        },
        Commands::Ngrams(ref args) => cmd::ngrams::run(args.clone()),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn load_scorer(path: &str) -> Arc<Scorer> {
    info!("📂 Loading quadgram table: {}", path);
    let raw = loader::load_quadgrams(path).unwrap_or_else(|e| {
        error!("❌ Could not load quadgram table '{}': {}", path, e);
        process::exit(1);
    });

    let model = match QuadgramModel::new(&raw.records) {
        Ok(m) => m,
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING SCORER:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    info!(
        "   {} distinct quadgrams, {} observations",
        model.distinct_quadgrams(),
        model.total_count()
    );
    Arc::new(Scorer::new(model))
}
