use crate::Arbitrary;
use crate::N_CATEGORIES;
use crate::features::Features;

const OFFSET: usize = 2;

/// The closed universe of abstract actions a unit group can take.
///
/// Moves are bucketed by the feature vector of the target region, so there are
/// exactly 2 + 16 categories. Every category has a dense index in `0..18`:
/// Idle, Attack, then Move0000 through Move1111.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Idle,
    Attack,
    Move(Features),
}

impl Category {
    /// All 18 categories in index order.
    pub fn all() -> [Self; N_CATEGORIES] {
        std::array::from_fn(|i| Self::from(i))
    }
    /// Dense index used by allocation-free tables.
    pub fn index(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Attack => 1,
            Self::Move(features) => OFFSET + u8::from(*features) as usize,
        }
    }
}

impl From<usize> for Category {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Idle,
            1 => Self::Attack,
            n if n < N_CATEGORIES => Self::Move(Features::from((n - OFFSET) as u8)),
            x => panic!("no other usizes {}", x),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Attack => write!(f, "Attack"),
            Self::Move(features) => write!(f, "Move{}", features),
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Idle" => Ok(Self::Idle),
            "Attack" => Ok(Self::Attack),
            _ => s
                .strip_prefix("Move")
                .filter(|bits| !bits.contains(crate::FIELD_DELIMITER))
                .ok_or_else(|| format!("invalid category [{}]", s))
                .and_then(|bits| Features::try_from(bits))
                .map(Self::Move),
        }
    }
}

impl serde::Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Arbitrary for Category {
    fn random() -> Self {
        Self::from(rand::random_range(0..N_CATEGORIES))
    }
}
