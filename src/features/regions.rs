use super::Features;
use crate::Error;
use crate::PAIR_DELIMITER;

/// Region definitions declared by a single log line.
///
/// Each definition reads `regionId:code`, where the code is the feature
/// vector of that region as seen from the acting group. Definitions are local
/// to the line: the same id may describe a different region on the next line.
#[derive(Debug, Default, Clone)]
pub struct Regions<'a>(Vec<(&'a str, &'a str)>);

impl<'a> Regions<'a> {
    /// Feature vector of the first definition with a matching id.
    pub fn lookup(&self, region: &str) -> Result<Features, Error> {
        self.0
            .iter()
            .find(|(id, _)| *id == region)
            .ok_or_else(|| Error::RegionNotFound {
                region: region.to_string(),
            })
            .and_then(|(id, code)| {
                Features::try_from(*code).map_err(|_| Error::InvalidFeatures {
                    region: id.to_string(),
                    code: code.to_string(),
                })
            })
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Regions<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(sections: I) -> Self {
        Self(
            sections
                .into_iter()
                .map(|def| def.split_once(PAIR_DELIMITER).unwrap_or((def, "")))
                .collect(),
        )
    }
}
