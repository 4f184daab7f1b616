use super::Cpp;
use super::Json;
use super::Report;
use crate::Error;
use crate::Probability;
use crate::estimate::Priors;
use std::io::Write;

/// Turns the estimated tables into text for some consumer.
pub trait Render {
    fn render(&self, priors: &Priors, out: &mut dyn Write) -> Result<(), Error>;
}

/// Output flavours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// `std::map` literals for the runtime predictor
    #[default]
    Cpp,
    /// human-readable breakdown with raw counts
    Report,
    /// both tables as JSON, undefined values as null
    Json,
}

/// How undefined estimates appear in the C++ literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Undefined {
    /// comment the entry out so the map lacks the key
    #[default]
    Omit,
    /// write 0.0
    Zero,
    /// write a quiet NaN
    Nan,
}

impl Format {
    pub fn renderer(&self, undefined: Undefined) -> Box<dyn Render> {
        match self {
            Self::Cpp => Box::new(Cpp::from(undefined)),
            Self::Report => Box::new(Report),
            Self::Json => Box::new(Json),
        }
    }
}

/// Float literal that always carries a decimal point.
pub fn literal(p: Probability) -> String {
    format!("{:?}", p)
}
