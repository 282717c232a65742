//! Literal conveniences
//!
//! For call sites that write versions as literals and would rather get the zero version than
//! handle an error: `literal::version("1.2.3")`, `literal::version(4)`, `literal::version(1.5)`.
//!
//! [crate::parse] never does this substitution, only the functions here do.

use crate::{ParsingError, Version};

/// Anything that can be written as a version literal.
pub trait VersionLiteral {
    fn parse_literal(self) -> Result<Version, ParsingError>;
}

impl VersionLiteral for &str {
    fn parse_literal(self) -> Result<Version, ParsingError> {
        crate::parse(self)
    }
}

impl VersionLiteral for String {
    fn parse_literal(self) -> Result<Version, ParsingError> {
        crate::parse(&self)
    }
}

impl VersionLiteral for &String {
    fn parse_literal(self) -> Result<Version, ParsingError> {
        crate::parse(self)
    }
}

macro_rules! number_literal {
    ( $( $t:ty ),* ) => {
        $(
            impl VersionLiteral for $t {
                fn parse_literal(self) -> Result<Version, ParsingError> {
                    Version::parse_number(self)
                }
            }
        )*
    }
}

number_literal!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// Parse a literal, or the zero version `0.0.0` if it is not a valid version.
pub fn version<L: VersionLiteral>(value: L) -> Version {
    value.parse_literal().unwrap_or_default()
}

/// Like [version], but hands back the error next to the fallback.
pub fn version_or_zero<L: VersionLiteral>(value: L) -> (Version, Option<ParsingError>) {
    match value.parse_literal() {
        Ok(v) => (v, None),
        Err(e) => (Version::default(), Some(e)),
    }
}

#[cfg(test)]
mod test {

    use super::*;

    fn assert_zero(v: &Version) {
        assert_eq!(v.major(), "0");
        assert_eq!(v.minor(), "0");
        assert_eq!(v.patch(), "0");
        assert!(v.prerelease().is_empty());
        assert!(v.build_metadata().is_empty());
    }

    #[test]
    fn integer_literal() {
        let v = version(10);
        assert_eq!((v.major(), v.minor(), v.patch()), ("10", "0", "0"));
        assert_zero(&version(-10));
    }

    #[test]
    fn float_literal() {
        let v = version(10.346593);
        assert_eq!((v.major(), v.minor(), v.patch()), ("10", "346593", "0"));
        assert_zero(&version(-10.346593));
    }

    #[test]
    fn string_literal() {
        let v = version("69938113471411635120691317071569414.452.368-rc.alpha.11.log-test+sha.exp.5114f85.20190121.hyphen-test");
        assert_eq!(v.major(), "69938113471411635120691317071569414");
        assert_eq!(v.minor(), "452");
        assert_eq!(v.patch(), "368");
        assert_eq!(v.prerelease(), ["rc", "alpha", "11", "log-test"]);
        assert_eq!(v.build_metadata(), ["sha", "exp", "5114f85", "20190121", "hyphen-test"]);

        assert_zero(&version("0.a.0-pre+meta"));
        assert_zero(&version(String::from("")));

        let s = String::from("v2.1");
        assert_eq!(version(&s), Version::release(2, 1, 0));
    }

    #[test]
    fn fallback_keeps_the_error() {
        let (v, e) = version_or_zero("0.0.0-+meta");
        assert_zero(&v);
        assert!(e.is_some_and(|e| e.is_malformed()));

        let (v, e) = version_or_zero("1.2.3");
        assert_eq!(v, Version::release(1, 2, 3));
        assert!(e.is_none());
    }

    #[test]
    fn parse_does_not_fall_back() {
        assert!(crate::parse("0.a.0-pre+meta").is_err());
    }
}
