use crate::Error;
use crate::PAIR_DELIMITER;

/// One raw option token from the second section of a log line.
///
/// Tokens read `KIND[:arg]`. Attacks carry no argument in practice; moves
/// carry the id of the neighbouring region they lead to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer<'a> {
    Attack,
    Move(&'a str),
}

impl<'a> TryFrom<&'a str> for Offer<'a> {
    type Error = Error;
    fn try_from(token: &'a str) -> Result<Self, Self::Error> {
        let (kind, arg) = token.split_once(PAIR_DELIMITER).unwrap_or((token, ""));
        match kind {
            "ATTACK" => Ok(Self::Attack),
            "MOVE" => Ok(Self::Move(arg)),
            _ => Err(Error::UnknownOptionKind {
                kind: kind.to_string(),
            }),
        }
    }
}
