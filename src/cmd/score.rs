use clap::Args;
use quadcrack::scorer::Scorer;
use std::sync::Arc;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Text to score against the language model.
    pub text: String,
}

pub fn run(args: ScoreArgs, scorer: Arc<Scorer>) {
    println!("{:.4}", scorer.fitness(&args.text));
}
