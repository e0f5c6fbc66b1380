use clap::Args;
use quadcrack::corpus;
use quadcrack::error::QcResult;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct NgramsArgs {
    /// Training text to count quadgrams from.
    #[arg(short, long)]
    pub input: String,

    /// Table destination. Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Keep only the most frequent N quadgrams (0 keeps all).
    #[arg(long, default_value_t = 0)]
    pub top: usize,
}

pub fn run(args: NgramsArgs) -> QcResult<()> {
    let content = fs::read_to_string(&args.input)?;
    let table = corpus::generate_table(&content, args.top);

    match &args.output {
        Some(path) => {
            fs::write(path, &table)?;
            info!("💾 Quadgram table written to {}", path);
        }
        None => print!("{}", table),
    }

    Ok(())
}
