use super::Render;
use crate::Error;
use crate::estimate::Priors;
use std::io::Write;

/// Both tables as one JSON document: `{"marginal": {..}, "conditional": {..}}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Render for Json {
    fn render(&self, priors: &Priors, out: &mut dyn Write) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut *out, priors).map_err(std::io::Error::from)?;
        writeln!(out)?;
        Ok(())
    }
}
