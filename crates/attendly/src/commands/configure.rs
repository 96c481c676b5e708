//! Camera-configuration command handlers (superuser section).

use attendly_core::{CameraConfig, Console, CoreError, RouteId};

use crate::cli::{Camera, ConfigureArgs, ConfigureCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

fn detail(config: &CameraConfig) -> String {
    let show = |s: &str| if s.is_empty() { "(not set)" } else { s }.to_owned();
    format!(
        "entrance: {}\nexit:     {}",
        show(&config.camera_enter),
        show(&config.camera_exit)
    )
}

pub async fn handle(
    console: &Console,
    args: ConfigureArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;
    util::require_route(&session, RouteId::Configure)?;

    match args.command {
        ConfigureCommand::Show => {
            let config = console.fetch_configuration().await?;
            Renderer::new(global).single(&config, detail, |c| {
                format!("{}\n{}", c.camera_enter, c.camera_exit)
            });
            Ok(())
        }

        ConfigureCommand::Set { enter, exit } => {
            if enter.is_none() && exit.is_none() {
                return Err(CliError::Validation {
                    field: "set".into(),
                    reason: "provide --enter and/or --exit".into(),
                });
            }
            // Partial updates keep the other camera's saved URL.
            let current = console.fetch_configuration().await?;
            let config = CameraConfig {
                camera_enter: enter.unwrap_or(current.camera_enter),
                camera_exit: exit.unwrap_or(current.camera_exit),
            };
            console.save_configuration(&config).await?;
            if !global.quiet {
                eprintln!("Configuration saved");
            }
            Ok(())
        }

        ConfigureCommand::Preview { camera } => {
            let config = console.fetch_configuration().await?;
            let source = match camera {
                Camera::Enter => config.camera_enter,
                Camera::Exit => config.camera_exit,
            };
            if source.is_empty() {
                return Err(CliError::Validation {
                    field: "camera".into(),
                    reason: "no stream URL saved for that camera".into(),
                });
            }
            let url = console
                .api()
                .stream_url(&source)
                .map_err(CoreError::from)?;
            Renderer::new(global).emit(url.as_str());
            Ok(())
        }
    }
}
