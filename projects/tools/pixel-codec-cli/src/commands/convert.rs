use crate::error::CliError;
use crate::util::{parse_format, Backend, PartialBlocks, Quality};
use argh::FromArgs;
use bytesize::ByteSize;
use pixel_codec_api::{ConvertOptions, ConvertOptionsBuilder, ImageLayout, PixelBufferView, PxBuffer};
use pixel_codec_common::PixelFormat;
use std::{fs, path::PathBuf, time::Instant};
use tracing::info;

#[derive(FromArgs, Debug)]
/// Convert a raw pixel buffer from one format to another
#[argh(subcommand, name = "convert")]
pub struct ConvertCmd {
    /// input file holding tightly packed pixels or blocks
    #[argh(option)]
    pub input: PathBuf,

    /// output file
    #[argh(option)]
    pub output: PathBuf,

    /// width of the first level in pixels
    #[argh(option)]
    pub width: u32,

    /// height of the first level in pixels
    #[argh(option)]
    pub height: u32,

    /// format of the input, by name (see `formats`)
    #[argh(option, from_str_fn(parse_format))]
    pub from: PixelFormat,

    /// format of the output, by name (see `formats`)
    #[argh(option, from_str_fn(parse_format))]
    pub to: PixelFormat,

    /// number of array layers in the input [default: 1]
    #[argh(option, default = "1")]
    pub layers: u32,

    /// number of mip levels in the input [default: 1]
    #[argh(option, default = "1")]
    pub levels: u32,

    /// endpoint search used for BC1/BC3 output (inset, refined) [default: inset]
    #[argh(option)]
    pub backend: Option<Backend>,

    /// refinement effort (fastest, normal, best) [default: normal]
    #[argh(option)]
    pub quality: Option<Quality>,

    /// images not divisible into 4x4 blocks (pad, reject) [default: pad]
    #[argh(option)]
    pub partial_blocks: Option<PartialBlocks>,

    /// generate a full mip chain before compressing a single level input
    #[argh(switch)]
    pub generate_mips: bool,
}

impl ConvertCmd {
    fn options(&self) -> ConvertOptions {
        let mut builder = ConvertOptionsBuilder::new().generate_mips(self.generate_mips);
        if let Some(backend) = self.backend {
            builder = builder.compression_backend(backend.into());
        }
        if let Some(quality) = self.quality {
            builder = builder.quality_level(quality.into());
        }
        if let Some(policy) = self.partial_blocks {
            builder = builder.partial_blocks(policy.into());
        }
        builder.build()
    }

    fn source_layout(&self) -> ImageLayout {
        ImageLayout::new(self.from, self.width, self.height)
            .with_layers(self.layers)
            .with_levels(self.levels)
    }
}

/// Sizes of one finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub bytes_read: usize,
    pub bytes_written: usize,
    pub levels: u32,
}

/// Reads the input, converts it and writes the output.
pub fn run_convert(cmd: &ConvertCmd) -> Result<ConvertSummary, CliError> {
    let src_layout = cmd.source_layout();
    let input = fs::read(&cmd.input)?;
    let needed = src_layout.total_size();
    if input.len() < needed {
        return Err(CliError::InputTooSmall {
            path: cmd.input.display().to_string(),
            needed,
            actual: input.len(),
        });
    }

    let src = PixelBufferView::new(src_layout, &input)?;
    let target = ImageLayout {
        format: cmd.to,
        align: 0,
        ..src_layout
    };
    let buffer = PxBuffer::from_view(&cmd.options(), target, &src)?;
    fs::write(&cmd.output, buffer.data())?;

    Ok(ConvertSummary {
        bytes_read: needed,
        bytes_written: buffer.data().len(),
        levels: buffer.layout().levels,
    })
}

pub fn handle_convert_command(cmd: ConvertCmd) -> Result<(), CliError> {
    let start = Instant::now();
    let summary = run_convert(&cmd)?;
    info!(
        from = cmd.from.name(),
        to = cmd.to.name(),
        read = %ByteSize(summary.bytes_read as u64),
        written = %ByteSize(summary.bytes_written as u64),
        levels = summary.levels,
        "Converted {}",
        cmd.input.display()
    );
    println!("Convert completed in {:.2?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixel_codec_api::ConvertError;
    use tempfile::tempdir;

    fn command(dir: &std::path::Path, from: PixelFormat, to: PixelFormat, size: (u32, u32)) -> ConvertCmd {
        ConvertCmd {
            input: dir.join("input.raw"),
            output: dir.join("output.raw"),
            width: size.0,
            height: size.1,
            from,
            to,
            layers: 1,
            levels: 1,
            backend: None,
            quality: None,
            partial_blocks: None,
            generate_mips: false,
        }
    }

    #[test]
    fn converts_files() {
        let dir = tempdir().unwrap();
        let cmd = command(dir.path(), PixelFormat::R8G8B8A8Unorm, PixelFormat::B8G8R8A8Unorm, (2, 1));
        fs::write(&cmd.input, [1u8, 2, 3, 4, 5, 6, 7, 8]).unwrap();

        let summary = run_convert(&cmd).unwrap();
        assert_eq!(summary.bytes_written, 8);
        assert_eq!(fs::read(&cmd.output).unwrap(), [3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn compresses_with_generated_mips() {
        let dir = tempdir().unwrap();
        let mut cmd = command(dir.path(), PixelFormat::R8G8B8A8Unorm, PixelFormat::Bc3UnormBlock, (8, 8));
        cmd.generate_mips = true;
        cmd.backend = Some(Backend::Refined);
        fs::write(&cmd.input, [200u8; 256]).unwrap();

        let summary = run_convert(&cmd).unwrap();
        assert_eq!(summary.levels, 4);
        // 4 blocks for 8x8, then one block for each smaller level.
        assert_eq!(fs::read(&cmd.output).unwrap().len(), 7 * 16);
    }

    #[test]
    fn short_input_is_reported() {
        let dir = tempdir().unwrap();
        let cmd = command(dir.path(), PixelFormat::R8G8B8A8Unorm, PixelFormat::R8Unorm, (4, 4));
        fs::write(&cmd.input, [0u8; 10]).unwrap();

        let error = run_convert(&cmd).unwrap_err();
        assert!(matches!(error, CliError::InputTooSmall { needed: 64, actual: 10, .. }));
        assert!(!cmd.output.exists());
    }

    #[test]
    fn partial_blocks_can_be_rejected() {
        let dir = tempdir().unwrap();
        let mut cmd = command(dir.path(), PixelFormat::R8G8B8A8Unorm, PixelFormat::Bc1RgbUnormBlock, (6, 4));
        cmd.partial_blocks = Some(PartialBlocks::Reject);
        fs::write(&cmd.input, [0u8; 96]).unwrap();

        let error = run_convert(&cmd).unwrap_err();
        assert!(matches!(
            error,
            CliError::Convert(ConvertError::PartialBlock { width: 6, height: 4 })
        ));
    }
}
