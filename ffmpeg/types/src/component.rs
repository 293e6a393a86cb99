/*!
    Types describing the components registered in FFmpeg
    (formats, devices, protocols and codecs).
*/

use std::collections::BTreeMap;
use std::fmt;

/**
    Registered components keyed by short name, mapping to the long
    (human-readable) name. Components without a long name map to `""`.
*/
pub type ComponentMap = BTreeMap<String, String>;

/**
    Media type of a codec.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/**
    Whether a codec consumes or produces compressed data.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CodecDirection {
    Decoder,
    Encoder,
}

impl fmt::Display for CodecDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decoder => f.write_str("decoder"),
            Self::Encoder => f.write_str("encoder"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(MediaKind::Video.to_string(), "video");
        assert_eq!(CodecDirection::Encoder.to_string(), "encoder");
    }
}
