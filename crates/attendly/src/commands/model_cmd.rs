//! Recognition-model command handlers.

use owo_colors::OwoColorize;

use attendly_core::{Console, ModelState, RouteId};

use crate::cli::{GlobalOpts, ModelArgs, ModelCommand};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

pub async fn handle(
    console: &Console,
    args: ModelArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;
    util::require_route(&session, RouteId::ModelManager)?;

    match args.command {
        ModelCommand::Start => {
            let message = console.start_model().await?;
            if !global.quiet {
                eprintln!("{message}");
            }
            Ok(())
        }

        ModelCommand::Stop => {
            let message = console.stop_model().await?;
            if !global.quiet {
                eprintln!("{message}");
            }
            Ok(())
        }

        ModelCommand::Status => {
            let status = console.model_status().await?;
            let out = Renderer::new(global);
            let rendered = if out.color() {
                match status {
                    ModelState::Running => "running".green().to_string(),
                    ModelState::Stopped => "stopped".red().to_string(),
                    ModelState::Unknown => "unknown".yellow().to_string(),
                }
            } else {
                status.to_string()
            };
            out.emit(&rendered);
            Ok(())
        }

        ModelCommand::Embeddings => {
            // Re-embedding every enrolled face can take a while on a
            // large roster; make sure it's intentional.
            if !util::confirm("Regenerate embeddings for all employees?", global.yes)? {
                return Ok(());
            }
            let lines = console.generate_embeddings().await?;
            if !global.quiet {
                for line in lines {
                    eprintln!("{line}");
                }
            }
            Ok(())
        }
    }
}
