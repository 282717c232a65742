use anyhow::Context;
use anyhow::Result;
use clap::arg;
use clap::Command;
use freeform_semver::{Style, Version};

use crate::config::{Config, Order};

pub fn args() -> Command {
    Command::new("sort")
        .about("Sort versions")
        .long_about("Take a list of versions, sort and print them in descending order")
        .arg(arg!(versions: <version>... "Versions to sort"))
        .arg(arg!(--"skip-invalid" "Skip invalid versions"))
        .arg(arg!(--style <style> "Output style: compact, comparable or full"))
        .arg(arg!(--ascending "output in ascending order")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order (default)")
            .overrides_with("ascending")
        )
}

/// Parse, sort and dedup versions.
///
/// Invalid versions are an error unless `skip_invalid`, in which case they are dropped.
pub fn sort_versions<S: AsRef<str>>(inputs: &[S], order: Order, skip_invalid: bool) -> Result<Vec<Version>> {

    let mut versions = Vec::with_capacity(inputs.len());
    let mut errors = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        match Version::parse(input) {
            Ok(v) => versions.push(v),
            Err(e) if skip_invalid => {
                tracing::warn!("skipping invalid version {input:?}: {e}");
            }
            Err(e) => {
                tracing::error!("{e}");
                errors.push(e);
            }
        }
    }

    let count = errors.len();
    if let Some(first) = errors.into_iter().next() {
        return Err(anyhow::Error::new(first).context(format!("{count} invalid version(s)")));
    }

    versions.sort();
    versions.dedup();

    if order == Order::Descending {
        versions.reverse();
    }

    Ok(versions)
}

pub fn main(matches: &clap::ArgMatches, config: &Config) -> Result<()> {

    let inputs: Vec<&String> = matches.get_many::<String>("versions").context("version expected")?.collect();
    let skip_invalid = matches.get_flag("skip-invalid") || config.skip_invalid;

    let order = if matches.get_flag("ascending") {
        Order::Ascending
    } else if matches.get_flag("descending") {
        Order::Descending
    } else {
        config.order
    };

    let style = match matches.get_one::<String>("style") {
        Some(s) => s.parse::<Style>()?,
        None => config.style,
    };

    for v in sort_versions(&inputs, order, skip_invalid)? {
        println!("{}", v.format(style));
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(versions: &[Version]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn descending() {
        let sorted = sort_versions(&["1.0.0", "1.0.0-rc.1", "v2", "0.9.1"], Order::Descending, false).unwrap();
        assert_eq!(strings(&sorted), ["2.0.0", "1.0.0", "1.0.0-rc.1", "0.9.1"]);
    }

    #[test]
    fn ascending() {
        let sorted = sort_versions(&["1.0.0-beta.11", "1.0.0-beta.2", "1.0.0-beta"], Order::Ascending, false).unwrap();
        assert_eq!(strings(&sorted), ["1.0.0-beta", "1.0.0-beta.2", "1.0.0-beta.11"]);
    }

    #[test]
    fn dedup_by_value() {
        let sorted = sort_versions(&["1.2.3", "v1.2.3", "1.02.3+build"], Order::Ascending, false).unwrap();
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].to_string(), "1.2.3");
    }

    #[test]
    fn invalid() {
        assert!(sort_versions(&["1.2.3", "0.0.0-+meta"], Order::Ascending, false).is_err());

        let sorted = sort_versions(&["1.2.3", "0.0.0-+meta", "lorem ipsum"], Order::Ascending, true).unwrap();
        assert_eq!(strings(&sorted), ["1.2.3"]);
    }

    #[test]
    fn error_names_the_stage() {
        let e = sort_versions(&["0.0.0-+meta", "1.2.3", "0.a.0"], Order::Ascending, false).unwrap_err();
        let msg = format!("{e:#}");
        assert!(msg.starts_with("2 invalid version(s)"), "{msg}");
        assert!(msg.contains("malformed version \"0.0.0-+meta\": unconsumed tail \"-+meta\""), "{msg}");
    }

    #[test]
    fn extra_core_components() {
        let sorted = sort_versions(&["1.2.3.4", "1.2.3", "1.2.4abc"], Order::Descending, false).unwrap();
        assert_eq!(strings(&sorted), ["1.2.4", "1.2.3"]);
    }
}
