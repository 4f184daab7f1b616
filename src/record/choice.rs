use crate::Error;
use crate::FIELD_DELIMITER;

/// Position of the order in a full selection header
/// `unitTypeId,unitTypeName,regionId,order,targetRegion`.
const ORDER: usize = 3;
/// Number of fields in a short header without the leading unit type id.
const SHORT: usize = 3;

/// The abstract order a unit group actually issued, as written in the first
/// section of a log line. Moves keep the raw id of their target region, which
/// only the line's own region definitions can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<'a> {
    Idle,
    Attack,
    Move(&'a str),
}

impl<'a> TryFrom<&'a str> for Choice<'a> {
    type Error = Error;
    fn try_from(section: &'a str) -> Result<Self, Self::Error> {
        let fields = section.split(FIELD_DELIMITER).collect::<Vec<_>>();
        let order = match fields.len() {
            SHORT => SHORT - 1,
            _ => ORDER,
        };
        match fields.get(order).copied().unwrap_or_default() {
            "Idle" => Ok(Self::Idle),
            "Attack" => Ok(Self::Attack),
            "Move" => Ok(Self::Move(fields.get(order + 1).copied().unwrap_or_default())),
            kind => Err(Error::UnknownSelectedAction {
                kind: kind.to_string(),
            }),
        }
    }
}
