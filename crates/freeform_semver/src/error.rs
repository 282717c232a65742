/// The part of a version string an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
    PrereleaseIdentifiers,
    BuildMetadataIdentifiers,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::PrereleaseIdentifiers => "pre-release identifiers",
            Self::BuildMetadataIdentifiers => "build metadata identifiers",
        };
        f.write_str(name)
    }
}

/// Why an input was rejected as malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Malformation {
    #[error("empty version string")]
    Empty,

    #[error("invalid character {ch:?} at byte {index}")]
    InvalidCharacter { ch: char, index: usize },

    #[error("a bare \"-\" cannot prefix a version")]
    BareHyphenPrefix,

    #[error("unconsumed tail {0:?}")]
    UnconsumedTail(String),

    #[error("negative numbers are not versions")]
    NegativeNumber,
}

/// A problem inside a pre-release or build metadata segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier {position} is empty")]
    Empty { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    #[error("malformed version {input:?}{}", render_cause(.cause))]
    MalformedInput {
        input: String,
        cause: Option<Malformation>,
    },

    #[error("no digits found for {component} in {input:?}")]
    NoDigitsFound {
        input: String,
        component: Component,
    },

    #[error("{component} error: {cause}")]
    ComponentParseError {
        component: Component,
        cause: IdentifierError,
    },
}

fn render_cause(cause: &Option<Malformation>) -> String {
    match cause {
        Some(c) => format!(": {c}"),
        None => String::new(),
    }
}

impl ParsingError {
    pub(crate) fn malformed(input: &str, cause: Malformation) -> Self {
        Self::MalformedInput {
            input: input.to_string(),
            cause: Some(cause),
        }
    }

    pub(crate) fn no_digits(input: &str, component: Component) -> Self {
        Self::NoDigitsFound {
            input: input.to_string(),
            component,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }

    pub fn is_no_digits(&self) -> bool {
        matches!(self, Self::NoDigitsFound { .. })
    }
}

/// Returned when a [crate::Style] name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style {0:?}, expected compact, comparable or full")]
pub struct StyleError(pub String);
