use super::Pass;
use crate::Error;
use rayon::prelude::*;
use std::path::Path;
use std::path::PathBuf;

/// The set of decision logs to estimate from.
///
/// Files are independent: each one gets its own pass and the results are
/// merged by summation, so they can be processed in parallel. Lines within a
/// file are always processed in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Corpus {
    files: Vec<PathBuf>,
}

impl Corpus {
    /// Regular files directly inside `dir` with the given extension, sorted.
    pub fn scan(dir: &Path, extension: &str) -> Result<Self, Error> {
        let mut files = std::fs::read_dir(dir)?
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.path()),
                Err(e) => {
                    log::warn!("skipping entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == extension))
            .collect::<Vec<_>>();
        files.sort();
        log::info!("found {} .{} files in {}", files.len(), extension, dir.display());
        Ok(Self { files })
    }
    /// Directories are scanned, anything else is taken as a file as-is.
    pub fn from_inputs(inputs: &[PathBuf], extension: &str) -> Result<Self, Error> {
        let mut files = Vec::new();
        for input in inputs {
            match input.is_dir() {
                true => files.extend(Self::scan(input, extension)?.files),
                false => files.push(input.clone()),
            }
        }
        Ok(Self { files })
    }
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
    /// One pass per file, in parallel, merged into a single pass.
    /// Unreadable files are logged and left out.
    pub fn aggregate(&self) -> Pass {
        self.files
            .par_iter()
            .filter_map(|path| match Self::read(path) {
                Ok(pass) => Some(pass),
                Err(e) => {
                    log::warn!("skipping file {}: {}", path.display(), e);
                    None
                }
            })
            .reduce(Pass::default, |mut a, b| {
                a.absorb(&b);
                a
            })
    }
    fn read(path: &Path) -> Result<Pass, Error> {
        let file = std::fs::File::open(path)?;
        let mut pass = Pass::default();
        pass.read(std::io::BufReader::new(file))?;
        pass.census_mut().files += 1;
        log::info!("{:<32} {}", path.display(), pass.census());
        Ok(pass)
    }
}
