use clap::Parser;

use termpost::args::Args;
use termpost::config::Config;
use termpost::logging::init_tracing;
use termpost::ui::runtime;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    Ok(runtime::run(config)?)
}
