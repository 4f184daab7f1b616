//! Priors Binary
//!
//! Estimates action-selection priors from a directory of decision logs and
//! prints them as C++ map literals, a text report, or JSON.

use action_priors::cli::Args;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    action_priors::log(args.log_dir.as_deref())?;
    args.run()
}
