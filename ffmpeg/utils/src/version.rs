/*!
    Library versions and build metadata.
*/

use ffmpeg_types::{Library, LibraryVersion, Result, Versions};

use crate::runtime::ensure_initialized;

/**
    Returns the compiled versions of libavutil, libavcodec, libavformat,
    libavfilter and libavdevice.

    Queried fresh on every call.
*/
pub fn versions() -> Result<Versions> {
    ensure_initialized()?;
    Ok(read_versions())
}

/**
    Returns the `./configure` flags libavutil was built with.
*/
pub fn build_config() -> Result<&'static str> {
    ensure_initialized()?;
    Ok(ffmpeg_next::util::configuration())
}

/**
    Returns the license libavutil was built under (e.g. `"LGPL version 2.1 or later"`).
*/
pub fn license() -> Result<&'static str> {
    ensure_initialized()?;
    Ok(ffmpeg_next::util::license())
}

pub(crate) fn read_versions() -> Versions {
    Versions::from_fn(|library| {
        let packed = match library {
            Library::Avutil => ffmpeg_next::util::version(),
            Library::Avcodec => ffmpeg_next::codec::version(),
            Library::Avformat => ffmpeg_next::format::version(),
            Library::Avfilter => ffmpeg_next::filter::version(),
            Library::Avdevice => ffmpeg_next::device::version(),
        };
        LibraryVersion::from_packed(packed)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::Runtime;

    #[test]
    fn get_versions_does_not_fail() {
        assert!(versions().is_ok());
    }

    #[test]
    fn version_keys() {
        let versions = versions().unwrap();
        let names: BTreeSet<_> = versions.names().collect();
        assert_eq!(
            names,
            BTreeSet::from([
                "libavutil",
                "libavcodec",
                "libavformat",
                "libavfilter",
                "libavdevice",
            ])
        );
    }

    #[test]
    fn versions_are_populated() {
        let versions = versions().unwrap();
        for (library, version) in versions.iter() {
            assert!(version.major > 0, "{library} reported {version}");
        }
    }

    #[test]
    fn runtime_reports_same_versions() {
        let runtime = Runtime::acquire().unwrap();
        assert_eq!(runtime.versions(), versions().unwrap());
    }

    #[test]
    fn build_metadata() {
        assert!(build_config().is_ok());
        assert!(!license().unwrap().is_empty());
    }
}
