/*!
    FFmpeg library identifiers and their compiled versions.
*/

use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/**
    The FFmpeg libraries whose versions are reported.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Library {
    /// Utility functions (libavutil)
    Avutil,
    /// Encoders and decoders (libavcodec)
    Avcodec,
    /// Muxers, demuxers and I/O protocols (libavformat)
    Avformat,
    /// Filter graphs (libavfilter)
    Avfilter,
    /// Capture and playback devices (libavdevice)
    Avdevice,
}

impl Library {
    /// Every library, in reporting order.
    pub const ALL: [Self; 5] = [
        Self::Avutil,
        Self::Avcodec,
        Self::Avformat,
        Self::Avfilter,
        Self::Avdevice,
    ];

    /**
        Returns the shared-object name of the library, e.g. `"libavutil"`.
    */
    pub const fn name(self) -> &'static str {
        match self {
            Self::Avutil => "libavutil",
            Self::Avcodec => "libavcodec",
            Self::Avformat => "libavformat",
            Self::Avfilter => "libavfilter",
            Self::Avdevice => "libavdevice",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Library {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lib| lib.name() == s)
            .ok_or_else(|| ParseError::new("library", s))
    }
}

/**
    A library version as reported by FFmpeg's `*_version()` functions.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LibraryVersion {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl LibraryVersion {
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /**
        Decode FFmpeg's packed `AV_VERSION_INT` representation
        (`major << 16 | minor << 8 | micro`).
    */
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            major: packed >> 16,
            minor: (packed >> 8) & 0xff,
            micro: packed & 0xff,
        }
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/**
    Versions of all five FFmpeg libraries.

    Always holds exactly one entry per [`Library`].
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Versions {
    entries: [LibraryVersion; 5],
}

impl Versions {
    /**
        Build the record by querying `version_of` once per library.
    */
    pub fn from_fn(mut version_of: impl FnMut(Library) -> LibraryVersion) -> Self {
        Self {
            entries: Library::ALL.map(&mut version_of),
        }
    }

    pub fn get(&self, library: Library) -> LibraryVersion {
        self.entries[library.index()]
    }

    /**
        Look up a version by library name (e.g. `"libavcodec"`).
    */
    pub fn get_by_name(&self, name: &str) -> Option<LibraryVersion> {
        name.parse::<Library>().ok().map(|lib| self.get(lib))
    }

    /**
        Returns the library names, in reporting order.
    */
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        Library::ALL.into_iter().map(Library::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Library, LibraryVersion)> + '_ {
        Library::ALL.into_iter().zip(self.entries.iter().copied())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Versions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Library::ALL.len()))?;
        for (library, version) in self.iter() {
            map.serialize_entry(library.name(), &version)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn sample() -> Versions {
        Versions::from_fn(|lib| LibraryVersion::new(60 + lib as u32, 3, 100))
    }

    #[test]
    fn library_names_round_trip() {
        for lib in Library::ALL {
            assert_eq!(lib.name().parse::<Library>(), Ok(lib));
        }
        assert!("libswscale".parse::<Library>().is_err());
        assert_eq!(Library::Avfilter.to_string(), "libavfilter");
    }

    #[test]
    fn unpacks_av_version_int() {
        // AV_VERSION_INT(59, 39, 100)
        let packed = (59 << 16) | (39 << 8) | 100;
        let version = LibraryVersion::from_packed(packed);
        assert_eq!(version, LibraryVersion::new(59, 39, 100));
        assert_eq!(version.to_string(), "59.39.100");
    }

    #[test]
    fn versions_order_numerically() {
        assert!(LibraryVersion::new(58, 134, 100) < LibraryVersion::new(59, 0, 100));
        assert!(LibraryVersion::new(60, 3, 100) < LibraryVersion::new(60, 31, 100));
    }

    #[test]
    fn versions_hold_exactly_five_keys() {
        let versions = sample();
        let names: BTreeSet<_> = versions.names().collect();
        let expected: BTreeSet<_> = [
            "libavutil",
            "libavcodec",
            "libavformat",
            "libavfilter",
            "libavdevice",
        ]
        .into_iter()
        .collect();
        assert_eq!(names, expected);
        assert_eq!(versions.iter().count(), 5);
    }

    #[test]
    fn versions_lookup() {
        let versions = sample();
        assert_eq!(versions.get(Library::Avutil), LibraryVersion::new(60, 3, 100));
        assert_eq!(
            versions.get_by_name("libavdevice"),
            Some(LibraryVersion::new(64, 3, 100))
        );
        assert_eq!(versions.get_by_name("libpostproc"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_name_map() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["libavcodec"]["major"], 61);
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
