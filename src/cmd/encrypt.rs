use crate::reports;
use clap::Args;
use quadcrack::cipher::SubstKey;
use quadcrack::error::QcResult;
use quadcrack::keys::KnownKey;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plaintext to encrypt.
    pub text: String,

    /// Named key (identity, atbash, rot13, qwerty_rows) or 26 letters.
    /// A random key is drawn when omitted.
    #[arg(short, long)]
    pub key: Option<String>,

    /// Also print the key that was used.
    #[arg(long, default_value_t = false)]
    pub show_key: bool,
}

pub fn run(args: EncryptArgs, seed: Option<u64>) -> QcResult<()> {
    let key = match &args.key {
        Some(spec) => parse_key(spec)?,
        None => {
            let mut rng = if let Some(s) = seed {
                fastrand::Rng::with_seed(s)
            } else {
                fastrand::Rng::new()
            };
            SubstKey::random(&mut rng)
        }
    };

    println!("{}", key.apply(&args.text));

    if args.show_key {
        reports::print_key_table("Plain", "Cipher", &key);
    }

    Ok(())
}

/// A key spec is either a known key name or a 26-letter permutation.
fn parse_key(spec: &str) -> QcResult<SubstKey> {
    if let Ok(known) = spec.parse::<KnownKey>() {
        return Ok(known.to_key());
    }
    spec.parse()
}
