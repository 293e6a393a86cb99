/*!
    FFmpeg log levels.
*/

use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/**
    Verbosity threshold for FFmpeg's diagnostic output.

    FFmpeg treats the level as a plain integer: messages whose severity value is
    less than or equal to the current level are printed. The named constants
    mirror the `AV_LOG_*` values, but any `i32` is a valid level and is passed
    through to FFmpeg unchanged.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LogLevel(i32);

impl LogLevel {
    /// Print no output.
    pub const QUIET: Self = Self(-8);
    /// Something went really wrong and the process will crash now.
    pub const PANIC: Self = Self(0);
    /// Something went wrong and recovery is not possible.
    pub const FATAL: Self = Self(8);
    /// Something went wrong and cannot losslessly be recovered.
    pub const ERROR: Self = Self(16);
    /// Something somehow does not look correct.
    pub const WARNING: Self = Self(24);
    /// Standard information (FFmpeg's default).
    pub const INFO: Self = Self(32);
    /// Detailed information.
    pub const VERBOSE: Self = Self(40);
    /// Stuff which is only useful for libav* developers.
    pub const DEBUG: Self = Self(48);
    /// Extremely verbose debugging.
    pub const TRACE: Self = Self(56);

    const NAMED: [(&'static str, Self); 9] = [
        ("quiet", Self::QUIET),
        ("panic", Self::PANIC),
        ("fatal", Self::FATAL),
        ("error", Self::ERROR),
        ("warning", Self::WARNING),
        ("info", Self::INFO),
        ("verbose", Self::VERBOSE),
        ("debug", Self::DEBUG),
        ("trace", Self::TRACE),
    ];

    pub const fn from_raw(level: i32) -> Self {
        Self(level)
    }

    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /**
        Returns the FFmpeg name of this level, if it is one of the named levels.
    */
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, level)| *level == self)
            .map(|(name, _)| *name)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl From<i32> for LogLevel {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

impl From<LogLevel> for i32 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ParseError;

    /**
        Parses either a level name (`"warning"`, case-insensitive) or an integer.
    */
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<i32>() {
            return Ok(Self(raw));
        }
        Self::NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, level)| *level)
            .ok_or_else(|| ParseError::new("log level", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_levels_match_ffmpeg() {
        assert_eq!(LogLevel::QUIET.as_raw(), -8);
        assert_eq!(LogLevel::FATAL.as_raw(), 8);
        assert_eq!(LogLevel::INFO.as_raw(), 32);
        assert_eq!(LogLevel::TRACE.as_raw(), 56);
        assert_eq!(LogLevel::default(), LogLevel::INFO);
    }

    #[test]
    fn display_uses_names_when_available() {
        assert_eq!(LogLevel::WARNING.to_string(), "warning");
        assert_eq!(LogLevel::from_raw(8).to_string(), "fatal");
        assert_eq!(LogLevel::from_raw(-100).to_string(), "-100");
        assert_eq!(LogLevel::from_raw(33).name(), None);
    }

    #[test]
    fn parse_names_and_integers() {
        assert_eq!("Debug".parse::<LogLevel>(), Ok(LogLevel::DEBUG));
        assert_eq!(" quiet ".parse::<LogLevel>(), Ok(LogLevel::QUIET));
        assert_eq!("99".parse::<LogLevel>(), Ok(LogLevel::from_raw(99)));
        assert_eq!("-100".parse::<LogLevel>(), Ok(LogLevel::from_raw(-100)));

        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level 'loud'");
    }

    #[test]
    fn ordering_follows_verbosity() {
        assert!(LogLevel::QUIET < LogLevel::ERROR);
        assert!(LogLevel::INFO < LogLevel::TRACE);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&LogLevel::ERROR).unwrap(), "16");
    }
}
