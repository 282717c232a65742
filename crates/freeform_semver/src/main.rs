
use freeform_semver::*;

fn main() {

    let mut versions = Vec::new();

    for arg in std::env::args().skip(1) {
        match parse(&arg) {
            Ok(v) => versions.push(v),
            Err(e) => eprintln!("skipping {arg}: {e}"),
        }
    }

    versions.sort();
    versions.dedup();

    for v in versions {
        println!("{v}");
    }
}
