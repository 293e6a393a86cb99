use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct BuildCommand;

#[derive(Serialize)]
struct BuildReport {
    license: &'static str,
    configuration: &'static str,
}

impl BuildCommand {
    pub fn run(self, output: Output) -> Result<()> {
        let report = BuildReport {
            license: ffmpeg_utils::license()?,
            configuration: ffmpeg_utils::build_config()?,
        };
        if output.is_json() {
            return output.json(&report);
        }

        println!("license: {}", report.license);
        println!("configuration:");
        for flag in report.configuration.split_whitespace() {
            println!("  {flag}");
        }
        Ok(())
    }
}
