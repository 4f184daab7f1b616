use super::Render;
use super::literal;
use crate::Error;
use crate::estimate::Priors;
use std::io::Write;

const RULE: &str = "======================================";

/// Plain-text breakdown with the raw counts behind every estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Report;

impl Render for Report {
    fn render(&self, priors: &Priors, out: &mut dyn Write) -> Result<(), Error> {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Prob of each action when it was available")?;
        writeln!(out, "{}", RULE)?;
        for (category, estimate) in priors.marginal.iter() {
            writeln!(out, "P({}) = {}", category, estimate)?;
        }
        for (selected, row) in priors.conditional.iter() {
            writeln!(out, "{}", RULE)?;
            writeln!(out, "Prob of {} when one of the states is", selected)?;
            writeln!(out, "{}", RULE)?;
            for (available, estimate) in row.iter() {
                match estimate.value() {
                    Some(p) if estimate.hits() > 0 => writeln!(
                        out,
                        "- {} {} ({} of {})",
                        available,
                        literal(p),
                        estimate.hits(),
                        estimate.trials()
                    )?,
                    _ => writeln!(out, "- {} was 0", available)?,
                }
            }
        }
        Ok(())
    }
}
