use anyhow::Result;
use clap::{ArgGroup, Parser};

use crate::output::Output;

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("kind").required(true).args(["demuxers", "muxers"])))]
pub struct FormatsCommand {
    /// List input formats
    #[arg(long)]
    pub demuxers: bool,

    /// List output formats
    #[arg(long)]
    pub muxers: bool,
}

impl FormatsCommand {
    pub fn run(self, output: Output) -> Result<()> {
        if self.demuxers {
            output.components("Demuxers", &ffmpeg_utils::demuxers()?)
        } else {
            output.components("Muxers", &ffmpeg_utils::muxers()?)
        }
    }
}
