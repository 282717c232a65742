use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::Command;
use freeform_semver::Version;
use serde::Serialize;

pub fn parse_args() -> Command {
    Command::new("parse")
        .about("Show the parts of a version")
        .arg(arg!(<version> "Version to parse"))
        .arg(arg!(--json "output as json"))
}

pub fn compare_args() -> Command {
    Command::new("compare")
        .about("Compare two versions, prints <, = or >")
        .visible_alias("cmp")
        .arg(arg!(<left> "left version"))
        .arg(arg!(<right> "right version"))
}

#[derive(Debug, Serialize)]
struct Parts<'a> {
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    prerelease: &'a [String],
    build: &'a [String],
}

impl<'a> From<&'a Version> for Parts<'a> {
    fn from(v: &'a Version) -> Self {
        Self {
            major: v.major(),
            minor: v.minor(),
            patch: v.patch(),
            prerelease: v.prerelease(),
            build: v.build_metadata(),
        }
    }
}

pub fn to_json(v: &Version) -> Result<String> {
    Ok(serde_json::to_string(&Parts::from(v))?)
}

pub fn describe(v: &Version) -> String {
    format!(
        "major:      {}\nminor:      {}\npatch:      {}\nprerelease: {}\nbuild:      {}",
        v.major(),
        v.minor(),
        v.patch(),
        v.prerelease().join("."),
        v.build_metadata().join("."),
    )
}

pub fn compare(left: &str, right: &str) -> Result<std::cmp::Ordering> {
    let left = Version::parse(left).with_context(|| format!("left version {left:?}"))?;
    let right = Version::parse(right).with_context(|| format!("right version {right:?}"))?;
    Ok(left.cmp(&right))
}

pub fn parse_main(matches: &clap::ArgMatches) -> Result<()> {

    let input = matches.get_one::<String>("version").context("version expected")?;
    let v = Version::parse(input)?;

    if matches.get_flag("json") {
        println!("{}", to_json(&v)?);
    } else {
        println!("{}", describe(&v));
    }

    Ok(())
}

pub fn compare_main(matches: &clap::ArgMatches) -> Result<()> {

    let left = matches.get_one::<String>("left").context("left version expected")?;
    let right = matches.get_one::<String>("right").context("right version expected")?;

    let symbol = match compare(left, right)? {
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "=",
        std::cmp::Ordering::Greater => ">",
    };
    println!("{symbol}");

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn json() {
        let v = Version::parse("v1.2-rc.1+sha.5114f85").unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json(&v).unwrap()).unwrap();
        assert_eq!(json["major"], "1");
        assert_eq!(json["minor"], "2");
        assert_eq!(json["patch"], "0");
        assert_eq!(json["prerelease"], serde_json::json!(["rc", "1"]));
        assert_eq!(json["build"], serde_json::json!(["sha", "5114f85"]));
    }

    #[test]
    fn description() {
        let v = Version::parse("1.2.3-alpha.1").unwrap();
        let txt = describe(&v);
        assert!(txt.contains("patch:      3"));
        assert!(txt.contains("prerelease: alpha.1"));
    }

    #[test]
    fn comparisons() {
        assert_eq!(compare("1.0.0-alpha", "1.0.0").unwrap(), Ordering::Less);
        assert_eq!(compare("1.0.0+a", "1.0.0+b").unwrap(), Ordering::Equal);
        assert_eq!(compare("1.0.0-alpha.19b", "1.0.0-alpha.2").unwrap(), Ordering::Greater);

        let e = compare("1.0.0", "0.-100.3").unwrap_err();
        assert!(e.to_string().contains("right version"));
    }
}
