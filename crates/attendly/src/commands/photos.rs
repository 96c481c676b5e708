//! Reference-photo command handlers.
//!
//! Photos are addressed by filename in delete calls, but the listing
//! returns full URLs; the filename is the last path segment.

use tabled::Tabled;

use attendly_core::{Console, RouteId};

use crate::cli::{GlobalOpts, PhotosArgs, PhotosCommand};
use crate::error::CliError;
use crate::output::Renderer;

use super::util;

#[derive(Tabled)]
struct PhotoRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "URL")]
    url: String,
}

fn file_name_of(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_owned()
}

pub async fn handle(
    console: &Console,
    args: PhotosArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let session = util::establish_session(console).await?;
    util::require_route(&session, RouteId::Employees)?;

    match args.command {
        PhotosCommand::List { empid } => {
            let urls = console.fetch_photos(&empid).await?;
            Renderer::new(global).list(
                &urls,
                |u| PhotoRow {
                    file: file_name_of(u),
                    url: u.clone(),
                },
                |u| file_name_of(u),
            );
            Ok(())
        }

        PhotosCommand::Add { empid, file } => {
            let upload = util::read_photo(&file)?;
            let url = console.add_photo(&empid, upload).await?;
            if !global.quiet {
                eprintln!("Photo uploaded: {url}");
            }
            Ok(())
        }

        PhotosCommand::Delete { empid, file_name } => {
            if !util::confirm(
                &format!("Delete photo '{file_name}' for employee '{empid}'?"),
                global.yes,
            )? {
                return Ok(());
            }
            console.delete_photo(&empid, &file_name).await?;
            if !global.quiet {
                eprintln!("Photo {file_name} deleted");
            }
            Ok(())
        }
    }
}
