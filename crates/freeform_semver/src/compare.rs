// Version ordering
//
// 1. major, minor and patch are compared by magnitude, the first difference decides
// 2. a version without pre-release identifiers is GREATER than one with them
// 3. pre-release identifiers are compared pairwise:
//      numeric vs numeric          by magnitude
//      non-numeric vs non-numeric  ascii order
//      numeric vs non-numeric      numeric is LESS, whatever the value
// 4. when all compared pairs are equal, fewer identifiers is LESS
// 5. build metadata is ignored
//
// Numbers are digit strings of any length, so they are never parsed into integers:
// leading zeros are dropped, then a shorter string is smaller, then equal lengths compare ascii.

use crate::Version;
use std::cmp::Ordering;

fn eq_to_none(v: Ordering) -> Option<Ordering> {
    if matches!(v, Ordering::Equal) {
        return None;
    }
    Some(v)
}

/// one or more ascii digits
pub(crate) fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit strings by magnitude. "007" == "7", "10" > "9".
pub(crate) fn digits_cmp(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn identifier_cmp(left: &str, right: &str) -> Ordering {
    match (is_numeric(left), is_numeric(right)) {
        (true, true) => {
            // both numeric
            digits_cmp(left, right)
        }
        (true, false) => {
            // left is numeric, right is non-numeric
            // left < right
            Ordering::Less
        }
        (false, true) => {
            // left is non-numeric, right is numeric
            // left > right
            Ordering::Greater
        }
        (false, false) => {
            // both non-numeric
            left.cmp(right)
        }
    }
}

fn prerelease_cmp(left: &[String], right: &[String]) -> Ordering {

    // a release is greater than any pre-release of it
    match (left.is_empty(), right.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (l, r) in std::iter::zip(left, right) {
        if let Some(ret) = eq_to_none(identifier_cmp(l, r)) {
            return ret;
        }
    }

    // 1.0.0-alpha < 1.0.0-alpha.1
    left.len().cmp(&right.len())
}

pub(crate) fn version_cmp(left: &Version, right: &Version) -> Ordering {

    let cores = [
        (left.major(), right.major()),
        (left.minor(), right.minor()),
        (left.patch(), right.patch()),
    ];

    for (l, r) in cores {
        if let Some(ret) = eq_to_none(digits_cmp(l, r)) {
            return ret;
        }
    }

    prerelease_cmp(left.prerelease(), right.prerelease())
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        matches!(version_cmp(self, other), Ordering::Equal)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        version_cmp(self, other)
    }
}
