//! Reads the version string out of a package manifest (Cargo.toml).

use anyhow::Context;
use anyhow::Result;
use camino::Utf8Path;
use clap::arg;
use clap::Command;
use freeform_semver::{literal, Style, Version};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ManifestToml {
    package: Option<PackageToml>,
    workspace: Option<WorkspaceToml>,
}

#[derive(Debug, Deserialize)]
struct WorkspaceToml {
    package: Option<PackageToml>,
}

#[derive(Debug, Deserialize)]
struct PackageToml {
    // a string, or a table such as { workspace = true }
    version: Option<toml::Value>,
}

impl PackageToml {
    fn version_str(&self) -> Option<&str> {
        self.version.as_ref().and_then(|v| v.as_str())
    }
}

/// The raw version string of a manifest.
///
/// `package.version` wins, `workspace.package.version` is used when the package inherits it or
/// the manifest is a virtual workspace.
pub fn version_from_str(contents: &str) -> Result<String> {

    let toml = toml::from_str::<ManifestToml>(contents).context("failed to parse manifest")?;

    let package = toml.package.as_ref().and_then(PackageToml::version_str);
    let workspace = toml.workspace
        .as_ref()
        .and_then(|w| w.package.as_ref())
        .and_then(PackageToml::version_str);

    package
        .or(workspace)
        .map(String::from)
        .context("manifest has no version")
}

pub fn read_version_string(path: &Utf8Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    version_from_str(&contents).with_context(|| format!("in manifest {path}"))
}

/// Read and parse the manifest version.
///
/// With `lenient`, a version that does not parse becomes the zero version.
pub fn read_version(path: &Utf8Path, lenient: bool) -> Result<Version> {

    let raw = read_version_string(path)?;
    tracing::debug!("manifest {path} has version {raw:?}");

    if lenient {
        let (v, err) = literal::version_or_zero(raw.as_str());
        if let Some(err) = err {
            tracing::warn!("{path}: {err}, using {v}");
        }
        return Ok(v);
    }

    Version::parse(&raw).with_context(|| format!("invalid version in {path}"))
}

pub fn args() -> Command {
    Command::new("manifest")
        .about("Print the version of a Cargo.toml")
        .arg(arg!(<path> "path to the manifest"))
        .arg(arg!(--lenient "use 0.0.0 when the version is not valid"))
        .arg(arg!(--style <style> "Output style: compact, comparable or full"))
}

pub fn main(matches: &clap::ArgMatches, style: Style) -> Result<()> {

    let path = matches.get_one::<String>("path").context("path expected")?;
    let lenient = matches.get_flag("lenient");

    let style = match matches.get_one::<String>("style") {
        Some(s) => s.parse::<Style>()?,
        None => style,
    };

    let v = read_version(Utf8Path::new(path), lenient)?;
    println!("{}", v.format(style));

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn package_version() {
        let txt = r#"
            [package]
            name = "thing"
            version = "0.2.1-beta"
        "#;
        assert_eq!(version_from_str(txt).unwrap(), "0.2.1-beta");
    }

    #[test]
    fn workspace_version() {
        let txt = r#"
            [package]
            name = "thing"
            version = { workspace = true }

            [workspace.package]
            version = "1.4.0"
        "#;
        assert_eq!(version_from_str(txt).unwrap(), "1.4.0");

        let txt = r#"
            [workspace]
            members = ["a"]

            [workspace.package]
            version = "2.0.0+abc"
        "#;
        assert_eq!(version_from_str(txt).unwrap(), "2.0.0+abc");
    }

    #[test]
    fn no_version() {
        assert!(version_from_str("[package]\nname = \"thing\"\n").is_err());
        assert!(version_from_str("this is not toml").is_err());
    }

    fn manifest(version: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[package]\nname = \"thing\"\nversion = \"{version}\"").unwrap();
        file
    }

    #[test]
    fn read() {
        let file = manifest("v1.2.3-rc.1");
        let path = Utf8Path::from_path(file.path()).unwrap();
        let v = read_version(path, false).unwrap();
        assert_eq!(v.to_string(), "1.2.3-rc.1");
    }

    #[test]
    fn lenient() {
        let file = manifest("0.0.0-+meta");
        let path = Utf8Path::from_path(file.path()).unwrap();

        assert!(read_version(path, false).is_err());

        let v = read_version(path, true).unwrap();
        assert_eq!(v, Version::default());
    }
}
