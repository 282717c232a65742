use crate::error::{Component, IdentifierError, Malformation, ParsingError};
use crate::{Version, BUILD_METADATA_DELIMITER, DOT_DELIMITER, PRERELEASE_DELIMITER};

fn is_grammar_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == DOT_DELIMITER || c == PRERELEASE_DELIMITER || c == BUILD_METADATA_DELIMITER
}

// characters allowed in a pre-release or build segment, dots included
fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == DOT_DELIMITER || c == PRERELEASE_DELIMITER
}

fn is_extension_delimiter(c: char) -> bool {
    c == PRERELEASE_DELIMITER || c == BUILD_METADATA_DELIMITER
}

/// Parse a free-form version string.
///
/// A leading run of non-digits is stripped, missing minor and patch numbers default to "0".
/// Every failure is returned as a [ParsingError], never a partially filled [Version].
///
/// ```
/// let v = freeform_semver::parse("v1.2-rc.1+build.7").unwrap();
/// assert_eq!(v.to_string(), "1.2.0-rc.1+build.7");
/// ```
pub fn parse(input: &str) -> Result<Version, ParsingError> {

    validate(input)?;

    let digits = strip_prefix(input)?;

    // the numeric core ends at the first "-" or "+", the rest is the extra tail
    let (core, extra) = match digits.find(is_extension_delimiter) {
        Some(idx) => digits.split_at(idx),
        None => (digits, ""),
    };

    let (major, minor, patch) = scan_core(input, core)?;
    let (prerelease, build_metadata) = scan_extra(input, extra)?;

    Ok(Version::from_components(
        major.to_string(),
        minor.to_string(),
        patch.to_string(),
        prerelease,
        build_metadata,
    ))
}

fn validate(input: &str) -> Result<(), ParsingError> {
    if input.is_empty() {
        return Err(ParsingError::malformed(input, Malformation::Empty));
    }
    if let Some((index, ch)) = input.char_indices().find(|(_, c)| !is_grammar_char(*c)) {
        return Err(ParsingError::malformed(input, Malformation::InvalidCharacter { ch, index }));
    }
    Ok(())
}

// "semver.1.2.3" -> "1.2.3"
fn strip_prefix(input: &str) -> Result<&str, ParsingError> {
    let start = input.find(|c: char| c.is_ascii_digit()).unwrap_or(input.len());
    let (prefix, rest) = input.split_at(start);

    if prefix.len() == 1 && prefix.starts_with(PRERELEASE_DELIMITER) {
        return Err(ParsingError::malformed(input, Malformation::BareHyphenPrefix));
    }
    if rest.is_empty() {
        return Err(ParsingError::no_digits(input, Component::Major));
    }
    Ok(rest)
}

/// A cursor over the numeric core, which is plain ASCII once validated.
struct CoreScanner<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> CoreScanner<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.s.len()
    }

    fn remaining(&self) -> &'a str {
        &self.s[self.pos..]
    }

    fn eat(&mut self, c: char) -> bool {
        if self.remaining().starts_with(c) {
            self.pos += c.len_utf8();
            return true;
        }
        false
    }

    fn digits(&mut self) -> Option<&'a str> {
        let rest = self.remaining();
        let len = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.pos += len;
        Some(&rest[..len])
    }

    // a missing trailing component is "0", a present one must have digits
    fn next_component(&mut self, input: &str, component: Component) -> Result<&'a str, ParsingError> {
        if self.is_at_end() {
            return Ok("0");
        }
        self.eat(DOT_DELIMITER);
        self.digits().ok_or_else(|| ParsingError::no_digits(input, component))
    }
}

fn scan_core<'a>(input: &str, core: &'a str) -> Result<(&'a str, &'a str, &'a str), ParsingError> {

    let mut scanner = CoreScanner::new(core);

    let major = scanner.digits().ok_or_else(|| ParsingError::no_digits(input, Component::Major))?;
    let minor = scanner.next_component(input, Component::Minor)?;
    let patch = scanner.next_component(input, Component::Patch)?;

    // anything left after patch ("1.2.3.4", "1.2.3abc") is ignored

    Ok((major, minor, patch))
}

// split "rc.1+build" into ("rc.1", "+build")
fn take_segment(s: &str) -> (&str, &str) {
    let len = s.find(|c: char| !is_segment_char(c)).unwrap_or(s.len());
    s.split_at(len)
}

fn split_identifiers(segment: &str, component: Component) -> Result<Vec<String>, ParsingError> {
    segment
        .split(DOT_DELIMITER)
        .enumerate()
        .map(|(position, ident)| {
            if ident.is_empty() {
                Err(ParsingError::ComponentParseError {
                    component,
                    cause: IdentifierError::Empty { position },
                })
            } else {
                Ok(ident.to_string())
            }
        })
        .collect()
}

// extra is everything from the first "-" or "+" on, it must be fully accounted for by
// "-" <prerelease> followed by "+" <build>, each of them optional
fn scan_extra(input: &str, extra: &str) -> Result<(Vec<String>, Vec<String>), ParsingError> {

    let unconsumed = || ParsingError::malformed(input, Malformation::UnconsumedTail(extra.to_string()));

    let mut tail = extra;
    let mut prerelease = Vec::new();
    let mut build_metadata = Vec::new();

    if let Some(rest) = tail.strip_prefix(PRERELEASE_DELIMITER) {
        let (segment, rest) = take_segment(rest);
        if segment.is_empty() {
            return Err(unconsumed());
        }
        prerelease = split_identifiers(segment, Component::PrereleaseIdentifiers)?;
        tail = rest;
    }

    if let Some(rest) = tail.strip_prefix(BUILD_METADATA_DELIMITER) {
        let (segment, rest) = take_segment(rest);
        if segment.is_empty() {
            return Err(unconsumed());
        }
        build_metadata = split_identifiers(segment, Component::BuildMetadataIdentifiers)?;
        tail = rest;
    }

    if !tail.is_empty() {
        return Err(unconsumed());
    }

    Ok((prerelease, build_metadata))
}
