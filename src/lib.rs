//! Empirical action-selection priors from region-level decision logs.
//!
//! Each log line records the abstract order a unit group chose, the orders it
//! could have chosen, and the feature vectors of the regions involved. This
//! crate canonicalizes those lines into a closed set of 18 action categories
//! and estimates marginal and conditional selection probabilities for a
//! naive-Bayes style action predictor.
pub mod category;
pub mod corpus;
pub mod error;
pub mod estimate;
pub mod features;
pub mod record;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Selection frequencies, marginal and conditional estimates.
pub type Probability = f64;
/// Occurrence counters accumulated over the corpus.
pub type Count = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and property checks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// LOG FORMAT PARAMETERS
// ============================================================================
/// File extension of decision logs written by the replay dumper.
pub const LOG_EXTENSION: &str = "asd";
/// Separator between the selection, options and region sections of a line.
pub const SECTION_DELIMITER: char = '#';
/// Separator between fields inside a section.
pub const FIELD_DELIMITER: char = ',';
/// Separator between a key and its value inside an option or region def.
pub const PAIR_DELIMITER: char = ':';
/// Number of bits in a region feature code.
pub const FEATURE_BITS: usize = 4;
/// Number of distinct move buckets (2^FEATURE_BITS).
pub const MOVE_BUCKETS: usize = 1 << FEATURE_BITS;
/// Size of the closed category universe: Idle, Attack and every move bucket.
pub const N_CATEGORIES: usize = 2 + MOVE_BUCKETS;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize logging. INFO and above go to stderr so that stdout stays free
/// for the rendered tables. When a directory is given, a timestamped DEBUG
/// log file is written there as well.
#[cfg(feature = "cli")]
pub fn log(dir: Option<&std::path::Path>) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) as Box<dyn simplelog::SharedLogger>;
    let mut loggers = vec![term];
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
