use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use ffmpeg_utils::{LogLevel, Runtime};

use crate::output::Output;

#[derive(Parser, Debug)]
pub struct LogLevelCommand {
    /// Level to set before printing (name such as "warning", or an integer)
    #[arg(long, allow_hyphen_values = true)]
    pub set: Option<LogLevel>,
}

#[derive(Serialize)]
struct LevelReport {
    level: LogLevel,
    name: Option<&'static str>,
}

impl LogLevelCommand {
    pub fn run(self, runtime: &mut Runtime, output: Output) -> Result<()> {
        if let Some(level) = self.set {
            runtime.set_log_level(level);
        }

        let level = runtime.log_level();
        if output.is_json() {
            return output.json(&LevelReport {
                level,
                name: level.name(),
            });
        }

        match level.name() {
            Some(name) => println!("{} ({})", level.as_raw(), name),
            None => println!("{}", level.as_raw()),
        }
        Ok(())
    }
}
