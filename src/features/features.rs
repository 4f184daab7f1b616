use crate::Arbitrary;
use crate::FEATURE_BITS;
use crate::FIELD_DELIMITER;
use crate::MOVE_BUCKETS;

const HAS_FRIEND: u8 = 0b1000;
const HAS_ENEMY: u8 = 0b0100;
const TOWARDS_FRIEND: u8 = 0b0010;
const TOWARDS_ENEMY: u8 = 0b0001;

/// The 4-bit feature vector describing a region relative to a unit group.
///
/// Bits, most significant first:
/// - friendly units present
/// - enemy units present
/// - moving there brings us closer to a friendly base
/// - moving there brings us closer to an enemy base
///
/// Two neighbouring regions with the same vector are indistinguishable to the
/// predictor, which is why move options are bucketed by this value.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Features(u8);

impl Features {
    /// Every feature vector, 0000 through 1111.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..MOVE_BUCKETS as u8).map(Self)
    }
    /// Substituted whenever a region cannot be resolved.
    pub const fn fallback() -> Self {
        Self(0)
    }
    pub const fn has_friend(&self) -> bool {
        self.0 & HAS_FRIEND != 0
    }
    pub const fn has_enemy(&self) -> bool {
        self.0 & HAS_ENEMY != 0
    }
    pub const fn towards_friend(&self) -> bool {
        self.0 & TOWARDS_FRIEND != 0
    }
    pub const fn towards_enemy(&self) -> bool {
        self.0 & TOWARDS_ENEMY != 0
    }
}

impl From<u8> for Features {
    fn from(bits: u8) -> Self {
        assert!((bits as usize) < MOVE_BUCKETS, "no other u8s {}", bits);
        Self(bits)
    }
}

impl From<Features> for u8 {
    fn from(features: Features) -> Self {
        features.0
    }
}

/// Accepts the compact form `1010` as well as the comma-separated form
/// `1,0,1,0` written by the replay dumper.
impl TryFrom<&str> for Features {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bits = s
            .chars()
            .filter(|c| *c != FIELD_DELIMITER)
            .collect::<String>();
        if bits.len() != FEATURE_BITS {
            return Err(format!("expected {} bits, found [{}]", FEATURE_BITS, s));
        }
        bits.chars()
            .try_fold(0u8, |acc, c| match c {
                '0' => Ok(acc << 1),
                '1' => Ok(acc << 1 | 1),
                _ => Err(format!("non-binary feature code [{}]", s)),
            })
            .map(Self)
    }
}

impl std::fmt::Display for Features {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:0width$b}", self.0, width = FEATURE_BITS)
    }
}

impl Arbitrary for Features {
    fn random() -> Self {
        Self(rand::random_range(0..MOVE_BUCKETS as u8))
    }
}
