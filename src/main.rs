use log::{debug, error};
use std::env;

use opengraph::{OpenGraph, OpenGraphConfig};

const USAGE: &str = "Usage: opengraph <URL> [--fallback] [--debug]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let url = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .ok_or(USAGE)?;

    let mut config = OpenGraphConfig::load()?;
    for flag in args.iter().filter(|arg| arg.starts_with("--")) {
        match flag.as_str() {
            "--fallback" => config.use_fallback_mode = true,
            "--debug" => config.debug = true,
            other => return Err(format!("Unknown flag {other}\n{USAGE}").into()),
        }
    }
    debug!("{:?}", config);

    let og = OpenGraph::builder().config(config).build()?;
    match og.load_url(url).await {
        Ok(object) => {
            println!("{}", object.to_json()?);
            Ok(())
        }
        Err(e) => {
            error!("Failed to extract Open Graph data from {}: {}", url, e);
            Err(e.into())
        }
    }
}
