//! Print the OpenAPI document as JSON.

use std::io::{self, Write};

use color_eyre::eyre::Result;
use user_directory::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    let document = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}")?;
    Ok(())
}
