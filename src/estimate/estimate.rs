use crate::Count;
use crate::Probability;

/// A frequency estimate `hits / trials`.
///
/// A zero denominator is its own variant rather than a NaN or a silent zero,
/// so consumers can tell "never happened" (`Defined` with `hits == 0`) from
/// "never had the chance" (`Undefined`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Estimate {
    Defined { hits: Count, trials: Count },
    Undefined { hits: Count },
}

impl Estimate {
    pub fn new(hits: Count, trials: Count) -> Self {
        match trials {
            0 => Self::Undefined { hits },
            trials => Self::Defined { hits, trials },
        }
    }
    pub fn value(&self) -> Option<Probability> {
        match *self {
            Self::Defined { hits, trials } => Some(hits as Probability / trials as Probability),
            Self::Undefined { .. } => None,
        }
    }
    pub fn hits(&self) -> Count {
        match *self {
            Self::Defined { hits, .. } | Self::Undefined { hits } => hits,
        }
    }
    pub fn trials(&self) -> Count {
        match *self {
            Self::Defined { trials, .. } => trials,
            Self::Undefined { .. } => 0,
        }
    }
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined { .. })
    }
}

/// `p (hits of trials)`, or `undefined (hits of 0)`.
impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.value() {
            Some(p) => write!(f, "{:?} ({} of {})", p, self.hits(), self.trials()),
            None => write!(f, "undefined ({} of 0)", self.hits()),
        }
    }
}

/// Serialized as the bare probability, `null` when undefined.
impl serde::Serialize for Estimate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.value(), serializer)
    }
}
