/*!
    FFmpeg log level access.

    Writes go through [`Runtime::set_log_level`](crate::Runtime::set_log_level);
    this module only offers a handle-free read.
*/

use ffmpeg_next::ffi;
use tracing::debug;

use ffmpeg_types::{LogLevel, Result};

use crate::runtime::ensure_initialized;

/**
    Returns the current FFmpeg log level without taking the runtime handle.

    The value may change right after it is read if another thread holds the
    [`Runtime`](crate::Runtime).
*/
pub fn level() -> Result<LogLevel> {
    ensure_initialized()?;
    Ok(read_level())
}

pub(crate) fn read_level() -> LogLevel {
    // SAFETY: av_log_get_level only reads a global int.
    LogLevel::from_raw(unsafe { ffi::av_log_get_level() })
}

pub(crate) fn write_level(level: LogLevel) {
    let previous = read_level();
    // SAFETY: av_log_set_level only stores a global int.
    unsafe { ffi::av_log_set_level(level.as_raw()) };
    debug!(%previous, %level, "ffmpeg log level changed");
}
