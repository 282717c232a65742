use anyhow::Result;
use camino::Utf8Path;
use semtool::Config;

fn main() -> Result<()> {

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("SEMTOOL_LOG"))
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let matches = semtool::get_cli().get_matches_from(wild::args());

    let config_file = matches.get_one::<String>("config").map(Utf8Path::new);
    let config = Config::load(config_file)?;
    tracing::trace!("config {config:?}");

    semtool::main_cli(&matches, &config)
}
