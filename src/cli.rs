use std::{env, path::PathBuf};

use anyhow::{Result, anyhow};

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub config_path: PathBuf,
    /// Run a single text event with this prompt and exit instead of serving
    /// stdin lines.
    pub once: Option<String>,
}

pub fn options_from_args() -> Result<CliOptions> {
    let mut args = env::args().skip(1);
    let mut config_path = None;
    let mut once = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                config_path = Some(PathBuf::from(value));
            }
            "--once" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --once"))?;
                once = Some(value);
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {other}. usage: quorum [--config <path>] [--once <prompt>]"
                ));
            }
        }
    }

    Ok(CliOptions {
        config_path: config_path.unwrap_or_else(|| PathBuf::from("./quorum.jsonc")),
        once,
    })
}
