use super::Census;
use crate::Error;
use crate::estimate::Aggregator;
use crate::record::Record;
use std::io::BufRead;

/// A single sequential pass over a stream of log lines.
///
/// Lines are parsed and folded in order. Bad lines are logged and skipped;
/// nothing a line contains can abort the pass.
#[derive(Debug, Default, Clone)]
pub struct Pass {
    aggregator: Aggregator,
    census: Census,
}

impl Pass {
    /// Parse one raw line and fold it into the counters.
    pub fn feed(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.census.lines += 1;
        match Record::try_from(line) {
            Ok(record) => {
                self.census.records += 1;
                self.census.fallbacks += record.fallbacks() as crate::Count;
                if record.selected().is_none() {
                    self.census.unselected += 1;
                }
                if !record.is_consistent() {
                    log::debug!("selection not among options: {} [{}]", record, line.trim());
                }
                self.aggregator.ingest(&record);
            }
            Err(e) => {
                log::warn!("skipping line: {} [{}]", e, line.trim());
                self.census.rejected += 1;
            }
        }
    }
    /// Consume every line of a reader. Invalid UTF-8 is replaced rather
    /// than treated as a read failure.
    pub fn read<R: BufRead>(&mut self, reader: R) -> Result<(), Error> {
        for line in reader.split(b'\n') {
            self.feed(&String::from_utf8_lossy(&line?));
        }
        Ok(())
    }
    /// Merge another pass over a disjoint part of the corpus.
    pub fn absorb(&mut self, other: &Self) {
        self.aggregator.absorb(&other.aggregator);
        self.census.absorb(&other.census);
    }
    pub fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }
    pub fn census(&self) -> &Census {
        &self.census
    }
    pub(crate) fn census_mut(&mut self) -> &mut Census {
        &mut self.census
    }
}
