// freeform semver
//
// --- General rules ---
//
// 1. Any leading run of non-digits is a prefix and is thrown away ("v", "semver.", "ver")
// 2. major, minor and patch are digit strings of any length, compared by magnitude
// 3. a missing minor or patch is "0"
// 4. pre-release and build metadata follow semver
// 5. build metadata never takes part in equality or ordering
//
// --- General Form ---
//
// prefix numbers                              example: v1.2.3
// prefix numbers "-" prerelease               example: 1.2.3-rc.1
// prefix numbers "+" build                    example: 1.2.3+20250102
// prefix numbers "-" prerelease "+" build     example: semver.1.2.3-rc.1+20250102
//
// --- Differences from Semver ---
//
// 1. Allow one, two or three leading numbers.
//    example: 1 -> 1.0.0, 1.2 -> 1.2.0
//
// 2. Numbers have no size limit.
//    example: 69938113471411635120691317071569414.452.368
//
// 3. Leading zeros are allowed and kept, but ignored when comparing.
//    example: 1.02.3 == 1.2.3
//
// 4. A leading prefix without digits is stripped. A prefix of only "-" is an error.
//
// 5. Anything after patch and before "-" or "+" is ignored.
//    example: 1.2.3.4-rc.1 -> 1.2.3-rc.1
//
// --- Grammar ---
//
// <version> = <prefix> <core>
//           | <prefix> <core> "-" <pre_release>
//           | <prefix> <core> "+" <build>
//           | <prefix> <core> "-" <pre_release> "+" <build>
//
// <prefix> = "" | <non_digits>   (but never exactly "-")
//
// <core> = <digits>
//        | <digits> "." <digits>
//        | <digits> "." <digits> "." <digits>
//
// <pre_release> = <identifier> | <identifier> "." <pre_release>
//
// <build> = <identifier> | <identifier> "." <build>
//
// <identifier> = <identifier_character> | <identifier_character> <identifier>
//
// <identifier_character> = <digit> | <letter> | "-"
//
// Only [0-9A-Za-z.+-] may appear anywhere in the input.

mod compare;
mod error;
mod number;
mod parse;

pub mod literal;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{Component, IdentifierError, Malformation, ParsingError, StyleError};
pub use number::{VersionFloat, VersionInteger, VersionNumber};
pub use parse::parse;

pub(crate) const DOT_DELIMITER: char = '.';
pub(crate) const PRERELEASE_DELIMITER: char = '-';
pub(crate) const BUILD_METADATA_DELIMITER: char = '+';

/// A parsed semantic version.
///
/// Numbers are kept as the digit strings they were written with, so `"001"` stays `"001"` but
/// is equal to `"1"`. A Version is never changed once built.
#[derive(Debug, Clone)]
pub struct Version {
    major: String,
    minor: String,
    patch: String,
    prerelease: Vec<String>,
    build_metadata: Vec<String>,
}

/// How much of a [Version] to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    /// `major.minor.patch`, such as "1.2.3"
    #[cfg_attr(feature = "serde", serde(alias = "short"))]
    Compact,
    /// compact plus pre-release, such as "1.2.3-rc.1"
    Comparable,
    /// comparable plus build metadata, such as "1.2.3-rc.1+sha.a0f21"
    #[default]
    Full,
}

impl std::str::FromStr for Style {
    type Err = StyleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" | "short" => Ok(Self::Compact),
            "comparable" => Ok(Self::Comparable),
            "full" => Ok(Self::Full),
            other => Err(StyleError(other.to_string())),
        }
    }
}

impl Version {

    /// Build a version from numbers and identifiers. Nothing is validated.
    pub fn new<P, B>(major: u64, minor: u64, patch: u64, prerelease: P, build_metadata: B) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self::from_components(
            major.to_string(),
            minor.to_string(),
            patch.to_string(),
            prerelease.into_iter().map(Into::into).collect(),
            build_metadata.into_iter().map(Into::into).collect(),
        )
    }

    /// A plain `major.minor.patch` version.
    pub fn release(major: u64, minor: u64, patch: u64) -> Self {
        Self::new(major, minor, patch, Vec::<String>::new(), Vec::<String>::new())
    }

    pub(crate) fn from_components(
        major: String,
        minor: String,
        patch: String,
        prerelease: Vec<String>,
        build_metadata: Vec<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease,
            build_metadata,
        }
    }

    /// Parse a version string. See [parse].
    pub fn parse(input: &str) -> Result<Self, ParsingError> {
        parse::parse(input)
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    pub fn prerelease(&self) -> &[String] {
        &self.prerelease
    }

    pub fn build_metadata(&self) -> &[String] {
        &self.build_metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Render this version in the given [Style].
    pub fn format(&self, style: Style) -> String {
        let mut s = self.major.clone();
        s.push(DOT_DELIMITER);
        s.push_str(&self.minor);
        s.push(DOT_DELIMITER);
        s.push_str(&self.patch);

        if matches!(style, Style::Comparable | Style::Full) && !self.prerelease.is_empty() {
            s.push(PRERELEASE_DELIMITER);
            s.push_str(&join_identifiers(&self.prerelease));
        }

        if matches!(style, Style::Full) && !self.build_metadata.is_empty() {
            s.push(BUILD_METADATA_DELIMITER);
            s.push_str(&join_identifiers(&self.build_metadata));
        }

        s
    }
}

fn join_identifiers(identifiers: &[String]) -> String {
    let mut buf = [0; 4];
    let dot: &str = DOT_DELIMITER.encode_utf8(&mut buf);
    identifiers.join(dot)
}

/// The zero version, `0.0.0`
impl Default for Version {
    fn default() -> Self {
        Self::release(0, 0, 0)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(Style::Full))
    }
}

impl std::str::FromStr for Version {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParsingError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = ParsingError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse::parse(&s)
    }
}

#[cfg(feature = "semver")]
impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        let split = |s: &str| -> Vec<String> {
            if s.is_empty() {
                Vec::new()
            } else {
                s.split(DOT_DELIMITER).map(String::from).collect()
            }
        };
        Self::from_components(
            v.major.to_string(),
            v.minor.to_string(),
            v.patch.to_string(),
            split(v.pre.as_str()),
            split(v.build.as_str()),
        )
    }
}
