pub mod app;
pub mod cli;
pub mod context;
pub mod dump;
pub mod error;
pub mod exiftool;
pub mod profile;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
