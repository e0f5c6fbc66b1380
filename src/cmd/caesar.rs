use clap::Args;
use quadcrack::cipher::caesar;
use std::collections::HashSet;

#[derive(Args, Debug, Clone)]
pub struct CaesarArgs {
    /// Text to rotate (with --shift) or to brute-force (without).
    pub text: String,

    /// Rotation amount. Negative shifts rotate backwards.
    #[arg(long, allow_hyphen_values = true)]
    pub shift: Option<i32>,
}

pub fn run_shift(args: CaesarArgs, amount: i32) {
    println!("{}", caesar::rot_line(&args.text, amount));
}

pub fn run_brute(args: CaesarArgs, dict: &HashSet<String>) {
    let candidates = caesar::crack(&args.text, dict);
    if candidates.is_empty() {
        println!("No good decryptions found");
    } else {
        for candidate in candidates {
            println!("{}", candidate);
        }
    }
}
