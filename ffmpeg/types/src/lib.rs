/*!
    Shared types for the ffmpeg crate ecosystem.

    This crate defines the vocabulary that crosses crate boundaries: log levels,
    library versions and component listings. It has no dependency on FFmpeg, so
    consumers can name these types without pulling in FFmpeg bindings.
*/

mod component;
mod error;
mod level;
mod version;

pub use component::{CodecDirection, ComponentMap, MediaKind};
pub use error::{Error, ParseError, Result};
pub use level::LogLevel;
pub use version::{Library, LibraryVersion, Versions};
