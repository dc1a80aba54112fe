mod commands;
mod error;
mod logging;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Pixel format conversion and block compression for raw image buffers
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Convert(commands::convert::ConvertCmd),
    Info(commands::info::InfoCmd),
    Formats(commands::formats::FormatsCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    logging::init_logging();

    match cli.command {
        Commands::Convert(cmd) => {
            commands::convert::handle_convert_command(cmd)?;
        }
        Commands::Info(cmd) => {
            commands::info::handle_info_command(cmd);
        }
        Commands::Formats(cmd) => {
            commands::formats::handle_formats_command(cmd);
        }
    }

    Ok(())
}
