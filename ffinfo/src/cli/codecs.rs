use anyhow::Result;
use clap::{ArgGroup, Parser};

use ffmpeg_utils::{CodecDirection, MediaKind};

use crate::output::Output;

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("direction").required(true).args(["decoders", "encoders"])))]
#[command(group(ArgGroup::new("kind").required(true).args(["audio", "video"])))]
pub struct CodecsCommand {
    /// List decoders
    #[arg(long)]
    pub decoders: bool,

    /// List encoders
    #[arg(long)]
    pub encoders: bool,

    /// Audio codecs only
    #[arg(long)]
    pub audio: bool,

    /// Video codecs only
    #[arg(long)]
    pub video: bool,
}

impl CodecsCommand {
    fn direction(&self) -> CodecDirection {
        if self.decoders {
            CodecDirection::Decoder
        } else {
            CodecDirection::Encoder
        }
    }

    fn kind(&self) -> MediaKind {
        if self.audio {
            MediaKind::Audio
        } else {
            MediaKind::Video
        }
    }

    pub fn run(self, output: Output) -> Result<()> {
        let (direction, kind) = (self.direction(), self.kind());
        let title = format!("{kind} {direction}s");
        output.components(&title, &ffmpeg_utils::codecs(direction, kind)?)
    }
}
