/*!
    Process-wide FFmpeg runtime accessors for the ffmpeg crate ecosystem.

    FFmpeg keeps a small amount of global state for the whole process: the log
    level, the set of registered formats, codecs, devices and protocols, and
    the compiled-in version and build metadata of each library. This crate
    exposes that state through typed accessors.

    # Log level

    The log level is mutable global state, so it is reached through a
    [`Runtime`] handle. Only one handle exists at a time, which keeps a
    set-then-get pair consistent even when several threads touch FFmpeg.

    ```ignore
    use ffmpeg_utils::{LogLevel, Runtime};

    let mut runtime = Runtime::acquire()?;
    runtime.set_log_level(LogLevel::ERROR);
    assert_eq!(runtime.log_level(), LogLevel::ERROR);
    ```

    # Versions and build information

    ```ignore
    let versions = ffmpeg_utils::versions()?;
    for (library, version) in versions.iter() {
        println!("{library}: {version}");
    }
    println!("{}", ffmpeg_utils::build_config()?);
    ```

    # Registry listings

    ```ignore
    use ffmpeg_utils::MediaKind;

    let demuxers = ffmpeg_utils::demuxers()?;
    let audio_decoders = ffmpeg_utils::decoders(MediaKind::Audio)?;
    ```

    # Requirements

    Builds against FFmpeg 5.0 or newer. The device listings rely on the
    `const` signatures of the `av_*_device_next` iterators introduced there.

    # Errors

    Every entry point first makes sure FFmpeg is initialized. If that fails the
    call returns [`Error::Unavailable`], and so does every later call.
*/

pub use ffmpeg_types::{
    CodecDirection, ComponentMap, Error, Library, LibraryVersion, LogLevel, MediaKind, Result,
    Versions,
};

pub mod log;
mod registry;
mod runtime;
mod version;

pub use registry::{
    codecs, decoders, demuxers, encoders, input_devices, input_protocols, muxers,
    output_devices, output_protocols,
};
pub use runtime::Runtime;
pub use version::{build_config, license, versions};
