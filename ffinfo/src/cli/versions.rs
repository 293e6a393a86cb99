use anyhow::{Result, anyhow};
use clap::Parser;

use ffmpeg_utils::Runtime;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct VersionsCommand {
    /// Only show this library (e.g. "libavcodec")
    pub library: Option<String>,
}

impl VersionsCommand {
    pub fn run(self, runtime: &Runtime, output: Output) -> Result<()> {
        let versions = runtime.versions();

        if let Some(name) = self.library {
            let version = versions
                .get_by_name(&name)
                .ok_or_else(|| anyhow!("unknown library '{name}'"))?;
            if output.is_json() {
                return output.json(&version);
            }
            println!("{version}");
            return Ok(());
        }

        if output.is_json() {
            return output.json(&versions);
        }

        for (library, version) in versions.iter() {
            println!("{:<12} {}", library.name(), version);
        }
        Ok(())
    }
}
