/*!
    The process-wide FFmpeg runtime handle.
*/

use std::sync::OnceLock;

use parking_lot::{Mutex, MutexGuard, const_mutex};
use tracing::{debug, warn};

use ffmpeg_types::{Error, LogLevel, Result, Versions};

/// Outcome of the one-time `ffmpeg_next::init` call.
static INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Held by the single live `Runtime`.
static OWNER: Mutex<()> = const_mutex(());

/**
    Initialize FFmpeg once per process.

    A failed initialization is remembered and reported to every caller.
*/
pub(crate) fn ensure_initialized() -> Result<()> {
    init_once(&INIT, ffmpeg_next::init)
}

/**
    Run `init` the first time `cell` is consulted and replay its outcome on
    every call after that.
*/
fn init_once(
    cell: &OnceLock<Result<(), String>>,
    init: impl FnOnce() -> std::result::Result<(), ffmpeg_next::Error>,
) -> Result<()> {
    cell.get_or_init(|| match init() {
        Ok(()) => {
            debug!(
                avutil = %ffmpeg_types::LibraryVersion::from_packed(ffmpeg_next::util::version()),
                "ffmpeg initialized"
            );
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "ffmpeg failed to initialize");
            Err(e.to_string())
        }
    })
    .clone()
    .map_err(Error::unavailable)
}

/**
    Exclusive handle to FFmpeg's mutable process-wide state.

    At most one `Runtime` is alive at a time: [`Runtime::acquire`] blocks until
    the current holder drops its handle. Changes made through the handle
    outlive it; dropping a `Runtime` does not restore the previous log level.

    The handle is bound to the thread that acquired it.
*/
pub struct Runtime {
    _owner: MutexGuard<'static, ()>,
}

impl Runtime {
    /**
        Initialize FFmpeg if needed and take ownership of its global state,
        waiting for any other holder to release it.
    */
    pub fn acquire() -> Result<Self> {
        ensure_initialized()?;
        Ok(Self {
            _owner: OWNER.lock(),
        })
    }

    /**
        Like [`Runtime::acquire`], but returns `Ok(None)` instead of waiting
        when another handle is alive.
    */
    pub fn try_acquire() -> Result<Option<Self>> {
        ensure_initialized()?;
        Ok(OWNER.try_lock().map(|owner| Self { _owner: owner }))
    }

    /**
        Returns the current FFmpeg log level.
    */
    pub fn log_level(&self) -> LogLevel {
        crate::log::read_level()
    }

    /**
        Set the FFmpeg log level.

        The value reaches FFmpeg unchanged. FFmpeg stores it verbatim without
        clamping, so any `i32` reads back exactly through [`Runtime::log_level`].
    */
    pub fn set_log_level(&mut self, level: impl Into<LogLevel>) {
        crate::log::write_level(level.into());
    }

    /**
        Returns the compiled versions of the FFmpeg libraries.
    */
    pub fn versions(&self) -> Versions {
        crate::version::read_versions()
    }
}
