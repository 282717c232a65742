use anyhow::Result;
use clap::arg;
use clap::Command;

pub mod config;
pub mod inspect;
pub mod manifest;
pub mod sort;

pub use config::Config;

pub fn get_cli() -> Command {
    build_cli(Command::new("semtool"))
}

pub fn build_cli(cmd: clap::Command) -> clap::Command {
    cmd.version(clap::crate_version!())
        .about("semtool : parse, compare and sort free-form semantic versions")
        .arg(arg!(-c --config <file> "use a specific config file"))
        .subcommand_required(true)
        .subcommand(sort::args())
        .subcommand(inspect::parse_args())
        .subcommand(inspect::compare_args())
        .subcommand(manifest::args())
}

pub fn main_cli(matches: &clap::ArgMatches, config: &Config) -> Result<()> {

    match matches.subcommand() {

        Some(("sort", matches)) => {
            return sort::main(matches, config);
        }

        Some(("parse", matches)) => {
            return inspect::parse_main(matches);
        }

        Some(("compare", matches)) => {
            return inspect::compare_main(matches);
        }

        Some(("manifest", matches)) => {
            return manifest::main(matches, config.style);
        }

        _ =>  {
            anyhow::bail!("no subcmd");
        }
    }
}
