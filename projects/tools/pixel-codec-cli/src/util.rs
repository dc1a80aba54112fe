use pixel_codec_api::{CompressionBackend, PartialBlockPolicy, QualityLevel};
use pixel_codec_common::PixelFormat;
use std::str::FromStr;

/// Parses a format by its short name, for `from_str_fn`.
pub fn parse_format(name: &str) -> Result<PixelFormat, String> {
    PixelFormat::from_name(&name.to_lowercase())
        .map_err(|_| format!("Unknown pixel format: {name}. Run `pixel-codec formats` for a list."))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Inset,
    Refined,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inset" => Ok(Backend::Inset),
            "refined" => Ok(Backend::Refined),
            _ => Err(format!(
                "Invalid backend: {s}. Valid backends are: inset, refined"
            )),
        }
    }
}

impl From<Backend> for CompressionBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Inset => CompressionBackend::Inset,
            Backend::Refined => CompressionBackend::Refined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Fastest,
    Normal,
    Best,
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fastest" => Ok(Quality::Fastest),
            "normal" => Ok(Quality::Normal),
            "best" => Ok(Quality::Best),
            _ => Err(format!(
                "Invalid quality: {s}. Valid levels are: fastest, normal, best"
            )),
        }
    }
}

impl From<Quality> for QualityLevel {
    fn from(quality: Quality) -> Self {
        match quality {
            Quality::Fastest => QualityLevel::Fastest,
            Quality::Normal => QualityLevel::Normal,
            Quality::Best => QualityLevel::Best,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartialBlocks {
    Pad,
    Reject,
}

impl FromStr for PartialBlocks {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pad" => Ok(PartialBlocks::Pad),
            "reject" => Ok(PartialBlocks::Reject),
            _ => Err(format!(
                "Invalid partial block policy: {s}. Valid policies are: pad, reject"
            )),
        }
    }
}

impl From<PartialBlocks> for PartialBlockPolicy {
    fn from(policy: PartialBlocks) -> Self {
        match policy {
            PartialBlocks::Pad => PartialBlockPolicy::Pad,
            PartialBlocks::Reject => PartialBlockPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("rgba32", PixelFormat::R8G8B8A8Unorm)]
    #[case("BGRA32", PixelFormat::B8G8R8A8Unorm)]
    #[case("argb32", PixelFormat::R8G8B8A8Unorm)]
    #[case("bc3_rgba", PixelFormat::Bc3UnormBlock)]
    fn parses_format_names(#[case] name: &str, #[case] expected: PixelFormat) {
        assert_eq!(parse_format(name), Ok(expected));
    }

    #[test]
    fn unknown_format_names_are_reported() {
        let error = parse_format("rgba33").unwrap_err();
        assert!(error.contains("rgba33"));
    }

    #[rstest]
    #[case("inset", CompressionBackend::Inset)]
    #[case("Refined", CompressionBackend::Refined)]
    fn parses_backends(#[case] s: &str, #[case] expected: CompressionBackend) {
        assert_eq!(CompressionBackend::from(s.parse::<Backend>().unwrap()), expected);
    }

    #[rstest]
    #[case("fastest", QualityLevel::Fastest)]
    #[case("normal", QualityLevel::Normal)]
    #[case("BEST", QualityLevel::Best)]
    fn parses_quality(#[case] s: &str, #[case] expected: QualityLevel) {
        assert_eq!(QualityLevel::from(s.parse::<Quality>().unwrap()), expected);
    }

    #[test]
    fn parses_partial_block_policies() {
        assert_eq!(PartialBlockPolicy::from("pad".parse::<PartialBlocks>().unwrap()), PartialBlockPolicy::Pad);
        assert_eq!(PartialBlockPolicy::from("reject".parse::<PartialBlocks>().unwrap()), PartialBlockPolicy::Reject);
        assert!("clip".parse::<PartialBlocks>().is_err());
        assert!("fast".parse::<Quality>().is_err());
        assert!("exhaustive".parse::<Backend>().is_err());
    }
}
