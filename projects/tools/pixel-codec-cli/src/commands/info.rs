use crate::util::parse_format;
use argh::FromArgs;
use core::fmt::Write;
use pixel_codec_common::{describe, PixelFormat};

#[derive(FromArgs, Debug)]
/// Print the descriptor of a pixel format
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// format name, such as rgba32 or bc1_rgb
    #[argh(positional, from_str_fn(parse_format))]
    pub format: PixelFormat,
}

/// Renders every property of `format`'s descriptor, one per line.
pub fn describe_format(format: PixelFormat) -> String {
    let descriptor = describe(format);
    let mut out = String::new();
    let unit = if descriptor.is_compressed() {
        format!("bytes per {}x{} block", descriptor.block_extent.0, descriptor.block_extent.1)
    } else {
        String::from("bytes per pixel")
    };

    let flags = [
        ("alpha", descriptor.has_alpha()),
        ("compressed", descriptor.is_compressed()),
        ("float", descriptor.is_floating_point()),
        ("srgb", descriptor.is_srgb()),
        ("depth/stencil", descriptor.is_depth_or_stencil()),
        ("colour", descriptor.is_colour()),
        ("packed", descriptor.is_packed()),
    ]
    .iter()
    .filter(|(_, set)| *set)
    .map(|(name, _)| *name)
    .collect::<Vec<_>>()
    .join(", ");

    let _ = writeln!(out, "name:       {}", descriptor.name);
    let _ = writeln!(out, "format:     {:?} ({})", format, format as u32);
    let _ = writeln!(out, "size:       {} {unit}", descriptor.byte_size);
    let _ = writeln!(out, "components: {}", descriptor.components_count());
    let _ = writeln!(out, "numeric:    {:?}", descriptor.numeric);
    let _ = writeln!(out, "flags:      {flags}");
    for field in descriptor.fields {
        let _ = writeln!(
            out,
            "field:      {} bits {}..{}",
            field.component,
            field.offset,
            field.offset + field.width as u16
        );
    }
    out
}

pub fn handle_info_command(cmd: InfoCmd) {
    print!("{}", describe_format(cmd.format));
}
