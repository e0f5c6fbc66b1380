use crate::reports;
use clap::Args;
use quadcrack::cipher::SubstKey;
use quadcrack::config::Config;
use quadcrack::cracker::{CrackOptions, Cracker, RestartObserver};
use quadcrack::error::{CipherError, QcResult};
use quadcrack::scorer::Scorer;
use serde::Serialize;
use std::fs;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext to crack. Read --input instead when omitted.
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<String>,

    /// Write the recovered plaintext here as well as printing it.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write a JSON report (key, score, plaintext) here.
    #[arg(long)]
    pub json: Option<String>,

    #[command(flatten)]
    pub config: Config,
}

#[derive(Serialize)]
struct CrackReport<'a> {
    key: String,
    score: f32,
    plaintext: &'a str,
}

/// Collects per-restart results for the summary table.
struct RestartLog {
    results: Mutex<Vec<(usize, f32)>>,
}

impl RestartObserver for RestartLog {
    fn on_restart(&self, restart: usize, score: f32, _key: &SubstKey) {
        info!("    Restart {:2} finished at {:.2}", restart, score);
        if let Ok(mut results) = self.results.lock() {
            results.push((restart, score));
        }
    }
}

pub fn run(args: CrackArgs, scorer: Arc<Scorer>, seed: Option<u64>) -> QcResult<()> {
    let ciphertext = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(CipherError::Validation(
                "no ciphertext given: pass TEXT or --input".to_string(),
            ))
        }
    };

    let options = CrackOptions::from(&args.config);
    info!(
        "🔎 Cracking {} letters with {} restarts (patience {})",
        ciphertext.chars().filter(|c| c.is_ascii_alphabetic()).count(),
        options.restarts,
        options.patience
    );

    let log = RestartLog {
        results: Mutex::new(Vec::new()),
    };

    let cracker = Cracker::new(scorer, options);
    let started = Instant::now();
    let (outcome, plaintext) = cracker.crack_to_plaintext(&ciphertext, seed, &log);
    let elapsed = started.elapsed().as_secs_f32();

    // Earliest restart that reached the winning score, matching the merge.
    let mut results = log.results.into_inner().unwrap_or_default();
    results.sort_by_key(|(restart, _)| *restart);
    let best_restart = results
        .iter()
        .find(|(_, score)| *score == outcome.score)
        .map(|(restart, _)| *restart)
        .unwrap_or(0);

    reports::print_restart_table(results, best_restart);

    println!("\n=== 🏆 BEST DECRYPTION ===");
    println!("Score: {:.2}", outcome.score);
    reports::print_key_table("Cipher", "Plain", &outcome.key);
    println!("{}", plaintext);
    info!("Done in {:.2}s", elapsed);

    if let Some(path) = &args.output {
        fs::write(path, &plaintext)?;
        info!("💾 Plaintext written to {}", path);
    }

    if let Some(path) = &args.json {
        let report = CrackReport {
            key: outcome.key.to_string(),
            score: outcome.score,
            plaintext: &plaintext,
        };
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!("💾 Report written to {}", path);
    }

    Ok(())
}
