use pixel_codec_api::ConvertError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error("Input file {path} is too small: need {needed} bytes, but only {actual} bytes available.")]
    InputTooSmall {
        path: String,
        needed: usize,
        actual: usize,
    },
}
