//! Command-line interface for the Lastmile engine's offline tooling.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod render;
#[cfg(test)]
mod tests;

pub use error::CliError;

pub(crate) const ARG_RENDER_PLAN: &str = "plan";
pub(crate) const ARG_RENDER_OSRM_BASE_URL: &str = "osrm-base-url";
pub(crate) const ARG_RENDER_KM_PER_LITRE: &str = "km-per-litre";
pub(crate) const ARG_RENDER_PRICE_PER_LITRE: &str = "price-per-litre";
pub(crate) const ENV_RENDER_PLAN: &str = "LASTMILE_CMDS_RENDER_PLAN_PATH";

/// Run the Lastmile CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration merging, or
/// the requested command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Render(args) => render::run_render(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "lastmile",
    about = "Offline delivery-route visualisation utilities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a delivery plan into markers, bounds, and a routing request.
    Render(render::RenderArgs),
}
