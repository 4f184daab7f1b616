use super::Render;
use super::Undefined;
use super::literal;
use crate::Error;
use crate::category::Category;
use crate::category::Tally;
use crate::estimate::Estimate;
use crate::estimate::Priors;
use std::io::Write;

/// C++ `std::map` initializers keyed by a `probName` enum, ready to paste
/// into the predictor: `basicProb` holds the marginals, `priorProb` the
/// conditionals keyed by the selected category.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cpp {
    undefined: Undefined,
}

impl From<Undefined> for Cpp {
    fn from(undefined: Undefined) -> Self {
        Self { undefined }
    }
}

impl Cpp {
    fn entry(&self, indent: &str, category: Category, estimate: &Estimate, last: bool) -> String {
        let comma = if last { "" } else { "," };
        match (estimate.value(), self.undefined) {
            (Some(p), _) => format!(
                "{}{{ probName::{}, {} }}{}",
                indent,
                category,
                literal(p),
                comma
            ),
            (None, Undefined::Zero) => {
                format!("{}{{ probName::{}, 0.0 }}{}", indent, category, comma)
            }
            (None, Undefined::Nan) => format!(
                "{}{{ probName::{}, std::numeric_limits<double>::quiet_NaN() }}{}",
                indent, category, comma
            ),
            (None, Undefined::Omit) => {
                format!("{}// {{ probName::{}, undefined }}", indent, category)
            }
        }
    }
    fn entries(
        &self,
        indent: &str,
        tally: &Tally<Estimate>,
        out: &mut dyn Write,
    ) -> Result<(), Error> {
        let n = Category::all().len();
        for (i, (category, estimate)) in tally.iter().enumerate() {
            writeln!(out, "{}", self.entry(indent, category, estimate, i + 1 == n))?;
        }
        Ok(())
    }
}

impl Render for Cpp {
    fn render(&self, priors: &Priors, out: &mut dyn Write) -> Result<(), Error> {
        let marginal = Tally::from_fn(|c| priors.marginal.get(c));
        writeln!(out, "std::map<uint8_t, double> basicProb = {{")?;
        self.entries("  ", &marginal, out)?;
        writeln!(out, "}};")?;
        writeln!(out)?;
        writeln!(out, "std::map<uint8_t, std::map<uint8_t, double> > priorProb = {{")?;
        let n = Category::all().len();
        for (i, (selected, row)) in priors.conditional.iter().enumerate() {
            writeln!(out, "  {{ probName::{}, {{", selected)?;
            self.entries("    ", row, out)?;
            writeln!(out, "  }} }}{}", if i + 1 == n { "" } else { "," })?;
        }
        writeln!(out, "}};")?;
        Ok(())
    }
}
