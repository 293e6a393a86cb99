use anyhow::Result;
use clap::{ArgGroup, Parser};

use crate::output::Output;

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("direction").required(true).args(["input", "output"])))]
pub struct ProtocolsCommand {
    /// List protocols that can be read from
    #[arg(long)]
    pub input: bool,

    /// List protocols that can be written to
    #[arg(long)]
    pub output: bool,
}

impl ProtocolsCommand {
    pub fn run(self, output: Output) -> Result<()> {
        if self.input {
            output.components("Input protocols", &ffmpeg_utils::input_protocols()?)
        } else {
            output.components("Output protocols", &ffmpeg_utils::output_protocols()?)
        }
    }
}
