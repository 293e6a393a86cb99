use anyhow::Result;
use clap::{ArgGroup, Parser};

use crate::output::Output;

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("direction").required(true).args(["input", "output"])))]
pub struct DevicesCommand {
    /// List capture devices
    #[arg(long)]
    pub input: bool,

    /// List playback devices
    #[arg(long)]
    pub output: bool,
}

impl DevicesCommand {
    pub fn run(self, output: Output) -> Result<()> {
        if self.input {
            output.components("Input devices", &ffmpeg_utils::input_devices()?)
        } else {
            output.components("Output devices", &ffmpeg_utils::output_devices()?)
        }
    }
}
