//! Command line entry point.
//!
//! Reads every decision log it is pointed at, estimates the priors and writes
//! them in the requested format to stdout or a file.
use crate::LOG_EXTENSION;
use crate::corpus::Corpus;
use crate::estimate::Priors;
use crate::render::Format;
use crate::render::Undefined;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log files or directories to scan (defaults to the working directory)
    pub inputs: Vec<PathBuf>,
    /// Extension of log files when scanning directories
    #[arg(short, long, default_value = LOG_EXTENSION)]
    pub extension: String,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Cpp)]
    pub format: Format,
    /// How undefined estimates appear in the C++ output
    #[arg(short, long, value_enum, default_value_t = Undefined::Omit)]
    pub undefined: Undefined,
    /// Write tables here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Also write a DEBUG log file into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    /// Worker threads for parsing files in parallel
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl Args {
    /// Size the worker pool, estimate, and write the tables to `--output`
    /// or stdout.
    pub fn run(self) -> anyhow::Result<()> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
        log::debug!("using {} threads", threads);
        let priors = self.priors()?;
        self.write(&priors, &mut std::io::stdout().lock())
    }

    /// Inputs as given, or the working directory when there are none.
    pub fn inputs(&self) -> anyhow::Result<Vec<PathBuf>> {
        match self.inputs.is_empty() {
            true => Ok(vec![std::env::current_dir()?]),
            false => Ok(self.inputs.clone()),
        }
    }

    /// Read every input and estimate both tables.
    pub fn priors(&self) -> anyhow::Result<Priors> {
        let corpus = Corpus::from_inputs(&self.inputs()?, &self.extension)?;
        if corpus.is_empty() {
            log::warn!("no .{} files found, every estimate will be undefined", self.extension);
        }
        let pass = corpus.aggregate();
        log::info!("{:<32} {}", "total", pass.census());

        let priors = pass.aggregator().priors();
        let undefined = priors.marginal.iter().filter(|(_, e)| !e.is_defined()).count();
        if undefined > 0 {
            log::warn!("{} categories were never available, marginals undefined", undefined);
        }
        Ok(priors)
    }

    /// Render into `--output` when given, otherwise into `stdout`.
    pub fn write(&self, priors: &Priors, stdout: &mut dyn Write) -> anyhow::Result<()> {
        let renderer = self.format.renderer(self.undefined);
        match self.output {
            Some(ref path) => {
                let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
                renderer.render(priors, &mut file)?;
                file.flush()?;
                log::info!("wrote {:?} tables to {}", self.format, path.display());
            }
            None => {
                renderer.render(priors, stdout)?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
