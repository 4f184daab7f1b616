/// Everything that can go wrong while turning a corpus into priors.
///
/// All line-level variants are recovered locally: the offending line is
/// skipped or patched, a diagnostic is logged, and the batch continues.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown option kind [{kind}]")]
    UnknownOptionKind { kind: String },

    #[error("unknown selected action [{kind}]")]
    UnknownSelectedAction { kind: String },

    #[error("features of region [{region}] not found")]
    RegionNotFound { region: String },

    #[error("invalid feature code [{code}] for region [{region}]")]
    InvalidFeatures { region: String, code: String },

    #[error("undefined probability {event}: zero denominator")]
    UndefinedProbability { event: String },

    #[error("malformed line: {reason}")]
    MalformedLine { reason: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
