use super::Choice;
use super::Offer;
use super::Options;
use crate::Arbitrary;
use crate::Error;
use crate::FIELD_DELIMITER;
use crate::SECTION_DELIMITER;
use crate::category::Category;
use crate::features::Features;
use crate::features::Regions;

/// One canonicalized decision.
///
/// Parsed from a log line of the form
/// `selection#options#regionDef[#regionDef...]`, where move options and moves
/// selected are replaced by the feature bucket of the region they target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    selected: Option<Category>,
    available: Options,
    fallbacks: usize,
}

impl Record {
    pub fn new(selected: Option<Category>, available: Options) -> Self {
        Self {
            selected,
            available,
            fallbacks: 0,
        }
    }
    /// The category actually chosen. None when the order was not one of
    /// Idle, Attack or Move; such records still count towards availability.
    pub fn selected(&self) -> Option<Category> {
        self.selected
    }
    pub fn available(&self) -> Options {
        self.available
    }
    /// Region lookups in this line that fell back to the zero vector.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }
    /// Selection without availability points at a malformed line.
    pub fn is_consistent(&self) -> bool {
        self.selected
            .map(|c| self.available.contains(c))
            .unwrap_or(true)
    }
}

impl TryFrom<&str> for Record {
    type Error = Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let line = line.trim();
        let mut sections = line.split(SECTION_DELIMITER);
        let selection = sections
            .next()
            .filter(|s| !s.trim().is_empty())
            .ok_or(Error::MalformedLine {
                reason: "missing selection",
            })?;
        let offers = sections.next().ok_or(Error::MalformedLine {
            reason: "missing options",
        })?;
        let offers = offers
            .split(FIELD_DELIMITER)
            .filter(|token| !token.is_empty())
            .map(Offer::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let regions = sections.collect::<Regions>();

        let mut fallbacks = 0;
        let mut resolve = |region: &str| {
            regions.lookup(region).unwrap_or_else(|e| {
                log::warn!("{}, using {} [{}]", e, Features::fallback(), line);
                fallbacks += 1;
                Features::fallback()
            })
        };

        let mut available = Options::idle();
        for offer in offers {
            match offer {
                Offer::Attack => {
                    available.insert(Category::Attack);
                }
                Offer::Move(region) => {
                    let category = Category::Move(resolve(region));
                    if !available.insert(category) {
                        log::trace!("{} via region {} already offered", category, region);
                    }
                }
            }
        }

        let selected = match Choice::try_from(selection) {
            Ok(Choice::Idle) => Some(Category::Idle),
            Ok(Choice::Attack) => Some(Category::Attack),
            Ok(Choice::Move(region)) => Some(Category::Move(resolve(region))),
            Err(e) => {
                log::warn!("{} [{}]", e, line);
                None
            }
        };

        Ok(Self {
            selected,
            available,
            fallbacks,
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.selected {
            Some(category) => write!(f, "{} from {}", category, self.available),
            None => write!(f, "? from {}", self.available),
        }
    }
}

impl Arbitrary for Record {
    /// A well-formed record: the selection is always among the options.
    fn random() -> Self {
        let available = Options::random();
        let members = available.iter().collect::<Vec<_>>();
        let selected = members[rand::random_range(0..members.len())];
        Self::new(Some(selected), available)
    }
}
