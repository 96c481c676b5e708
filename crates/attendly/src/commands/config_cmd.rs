//! Config subcommand handlers.

use dialoguer::{Confirm, Input};

use attendly_config::{self as config_file, Config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let path = config_file::config_path();
            eprintln!("attendly: configuration wizard");
            eprintln!("Config path: {}\n", path.display());

            let base_url: String = Input::new()
                .with_prompt("Backend base URL")
                .default("http://localhost:8000".into())
                .interact_text()
                .map_err(util::prompt_err)?;

            // Validate before writing; a bad URL in the file fails every
            // later invocation.
            base_url
                .parse::<url::Url>()
                .map_err(|e| CliError::Validation {
                    field: "base_url".into(),
                    reason: e.to_string(),
                })?;

            let insecure = Confirm::new()
                .with_prompt("Accept self-signed TLS certificates?")
                .default(false)
                .interact()
                .map_err(util::prompt_err)?;

            let timeout_secs: u64 = Input::new()
                .with_prompt("Request timeout (seconds)")
                .default(Config::default().timeout_secs)
                .interact_text()
                .map_err(util::prompt_err)?;

            let config = Config {
                base_url: Some(base_url),
                timeout_secs,
                insecure,
                ..Config::default()
            };
            config_file::save_config(&config)?;

            if !global.quiet {
                eprintln!("\nConfig written to {}", path.display());
            }
            Ok(())
        }

        // ── Show: the resolved configuration ────────────────────────
        ConfigCommand::Show => {
            let config = config_file::load_config()?;
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::Validation {
                field: "config".into(),
                reason: e.to_string(),
            })?;
            Renderer::new(global).emit(rendered.trim_end());
            Ok(())
        }

        ConfigCommand::Path => {
            Renderer::new(global).emit(&config_file::config_path().display().to_string());
            Ok(())
        }
    }
}
