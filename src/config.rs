use crate::consts::{DEFAULT_PATIENCE, DEFAULT_RESTARTS};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,
    #[arg(long, default_value_t = DEFAULT_PATIENCE)]
    pub patience: usize,
}
