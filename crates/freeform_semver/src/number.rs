use crate::error::{Malformation, ParsingError};
use crate::parse::parse;
use crate::Version;

/// A primitive number that can be read as a version.
///
/// Integers become a major-only version, `5` -> `5.0.0`. Floats become major and minor, the
/// fractional digits kept as written, `1.5637881234` -> `1.5637881234.0`.
pub trait VersionNumber: std::fmt::Display + Copy {
    fn is_negative(&self) -> bool;
}

/// Marker for the integer primitives.
pub trait VersionInteger: VersionNumber {}

/// Marker for the floating point primitives.
pub trait VersionFloat: VersionNumber {}

macro_rules! unsigned_number {
    ( $( $t:ty ),* ) => {
        $(
            impl VersionNumber for $t {
                fn is_negative(&self) -> bool {
                    false
                }
            }
            impl VersionInteger for $t {}
        )*
    }
}

macro_rules! signed_number {
    ( $( $t:ty ),* ) => {
        $(
            impl VersionNumber for $t {
                fn is_negative(&self) -> bool {
                    *self < 0
                }
            }
            impl VersionInteger for $t {}
        )*
    }
}

macro_rules! float_number {
    ( $( $t:ty ),* ) => {
        $(
            impl VersionNumber for $t {
                // -0.0 too
                fn is_negative(&self) -> bool {
                    self.is_sign_negative()
                }
            }
            impl VersionFloat for $t {}
        )*
    }
}

unsigned_number!(u8, u16, u32, u64, u128, usize);
signed_number!(i8, i16, i32, i64, i128, isize);
float_number!(f32, f64);

impl Version {

    /// Parse the decimal rendering of a number. Negative numbers are malformed.
    pub fn parse_number<N: VersionNumber>(number: N) -> Result<Self, ParsingError> {
        let raw = number.to_string();
        if number.is_negative() {
            return Err(ParsingError::malformed(&raw, Malformation::NegativeNumber));
        }
        parse(&raw)
    }

    pub fn from_integer<I: VersionInteger>(value: I) -> Result<Self, ParsingError> {
        Self::parse_number(value)
    }

    pub fn from_float<F: VersionFloat>(value: F) -> Result<Self, ParsingError> {
        Self::parse_number(value)
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::Component;

    #[test]
    fn integers() {
        let v = Version::from_integer(1).unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), ("1", "0", "0"));
        assert!(v.prerelease().is_empty());
        assert!(v.build_metadata().is_empty());

        assert_eq!(Version::from_integer(10u8).unwrap(), Version::release(10, 0, 0));
        assert_eq!(Version::from_integer(0usize).unwrap(), Version::release(0, 0, 0));

        let v = Version::from_integer(u128::MAX).unwrap();
        assert_eq!(v.major(), "340282366920938463463374607431768211455");
    }

    #[test]
    fn negative_integers() {
        let e = Version::from_integer(-11).unwrap_err();
        assert_eq!(e, ParsingError::malformed("-11", Malformation::NegativeNumber));

        assert!(Version::from_integer(i64::MIN).unwrap_err().is_malformed());
    }

    #[test]
    fn floats() {
        let v = Version::from_float(1.5637881234).unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), ("1", "5637881234", "0"));

        let v = Version::from_float(10.346593f32).unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), ("10", "346593", "0"));

        // no fractional part, major only
        let v = Version::from_float(3.0).unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), ("3", "0", "0"));

        // leading zeros of the fraction are kept
        let v = Version::from_float(2.05).unwrap();
        assert_eq!(v.minor(), "05");
        assert_eq!(v, Version::release(2, 5, 0));
    }

    #[test]
    fn bad_floats() {
        assert!(Version::from_float(-10.346593).unwrap_err().is_malformed());
        assert!(Version::from_float(-0.0).unwrap_err().is_malformed());

        assert!(Version::from_float(f64::NAN).is_err());
        assert_eq!(
            Version::from_float(f64::INFINITY),
            Err(ParsingError::no_digits("inf", Component::Major)),
        );
    }

    #[test]
    fn any_number() {
        assert_eq!(Version::parse_number(7i16).unwrap(), Version::release(7, 0, 0));
        assert_eq!(Version::parse_number(1.25f64).unwrap(), Version::release(1, 25, 0));
    }
}
