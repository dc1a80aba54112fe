use argh::FromArgs;
use pixel_codec_common::{describe, PixelFormat};

#[derive(FromArgs, Debug)]
/// List the names of all known pixel formats
#[argh(subcommand, name = "formats")]
pub struct FormatsCmd {
    /// only list block compressed formats
    #[argh(switch)]
    pub compressed: bool,
}

/// Names of every format, skipping `undefined`, optionally only compressed ones.
pub fn format_names(compressed_only: bool) -> Vec<&'static str> {
    PixelFormat::all_values()
        .iter()
        .filter(|format| **format != PixelFormat::Undefined)
        .filter(|format| !compressed_only || describe(**format).is_compressed())
        .map(|format| format.name())
        .collect()
}

pub fn handle_formats_command(cmd: FormatsCmd) {
    for name in format_names(cmd.compressed) {
        println!("{name}");
    }
}
