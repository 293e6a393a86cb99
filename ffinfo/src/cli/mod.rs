use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use ffmpeg_utils::{LogLevel, Runtime};

use crate::output::Output;

mod build;
mod codecs;
mod devices;
mod formats;
mod log_level;
mod protocols;
mod versions;

pub use build::BuildCommand;
pub use codecs::CodecsCommand;
pub use devices::DevicesCommand;
pub use formats::FormatsCommand;
pub use log_level::LogLevelCommand;
pub use protocols::ProtocolsCommand;
pub use versions::VersionsCommand;

#[derive(Parser, Debug)]
#[command(name = "ffinfo")]
#[command(about = "Inspect the FFmpeg libraries this binary is linked against")]
#[command(version)]
pub struct Args {
    /// FFmpeg log level to apply first (name such as "error", or an integer)
    #[arg(
        long,
        global = true,
        allow_hyphen_values = true,
        env = "FFINFO_FFMPEG_LOG_LEVEL"
    )]
    pub ffmpeg_log_level: Option<LogLevel>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the versions of the FFmpeg libraries
    Versions(VersionsCommand),
    /// Show (and optionally change) the FFmpeg log level
    LogLevel(LogLevelCommand),
    /// Show the FFmpeg build configuration and license
    Build(BuildCommand),
    /// List muxers or demuxers
    Formats(FormatsCommand),
    /// List input or output devices
    Devices(DevicesCommand),
    /// List input or output protocols
    Protocols(ProtocolsCommand),
    /// List decoders or encoders
    Codecs(CodecsCommand),
}

impl Args {
    pub fn run(self) -> Result<()> {
        let mut runtime = Runtime::acquire()?;
        if let Some(level) = self.ffmpeg_log_level {
            info!(%level, "applying ffmpeg log level");
            runtime.set_log_level(level);
        }

        let output = Output::new(self.json);
        match self.command {
            Command::Versions(cmd) => cmd.run(&runtime, output),
            Command::LogLevel(cmd) => cmd.run(&mut runtime, output),
            Command::Build(cmd) => cmd.run(output),
            Command::Formats(cmd) => cmd.run(output),
            Command::Devices(cmd) => cmd.run(output),
            Command::Protocols(cmd) => cmd.run(output),
            Command::Codecs(cmd) => cmd.run(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_negative_levels() {
        let args = Args::try_parse_from(["ffinfo", "log-level", "--set", "-100"]).unwrap();
        match args.command {
            Command::LogLevel(cmd) => assert_eq!(cmd.set, Some(LogLevel::from_raw(-100))),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let args =
            Args::try_parse_from(["ffinfo", "versions", "--json", "--ffmpeg-log-level", "quiet"])
                .unwrap();
        assert!(args.json);
        assert_eq!(args.ffmpeg_log_level, Some(LogLevel::QUIET));
    }

    #[test]
    fn versions_accepts_a_library_filter() {
        let args = Args::try_parse_from(["ffinfo", "versions", "libavcodec"]).unwrap();
        match args.command {
            Command::Versions(cmd) => assert_eq!(cmd.library.as_deref(), Some("libavcodec")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_level_name() {
        assert!(Args::try_parse_from(["ffinfo", "log-level", "--set", "loud"]).is_err());
    }

    #[test]
    fn listing_commands_require_a_selection() {
        assert!(Args::try_parse_from(["ffinfo", "formats"]).is_err());
        assert!(Args::try_parse_from(["ffinfo", "formats", "--muxers", "--demuxers"]).is_err());
        assert!(Args::try_parse_from(["ffinfo", "codecs", "--decoders"]).is_err());
        assert!(Args::try_parse_from(["ffinfo", "codecs", "--decoders", "--video"]).is_ok());
    }
}
