/*!
    Listings of the formats, devices, protocols and codecs registered in FFmpeg.
*/

use std::ffi::{CStr, c_char, c_void};
use std::ptr;

use ffmpeg_next::ffi;
use tracing::trace;

use ffmpeg_types::{CodecDirection, ComponentMap, MediaKind, Result};

use crate::runtime::ensure_initialized;

/**
    Registry entries that carry a short and a long name.
*/
trait Described {
    fn name(&self) -> *const c_char;
    fn long_name(&self) -> *const c_char;
}

impl Described for ffi::AVInputFormat {
    fn name(&self) -> *const c_char {
        self.name
    }

    fn long_name(&self) -> *const c_char {
        self.long_name
    }
}

impl Described for ffi::AVOutputFormat {
    fn name(&self) -> *const c_char {
        self.name
    }

    fn long_name(&self) -> *const c_char {
        self.long_name
    }
}

impl Described for ffi::AVCodec {
    fn name(&self) -> *const c_char {
        self.name
    }

    fn long_name(&self) -> *const c_char {
        self.long_name
    }
}

/**
    Copy a C string owned by FFmpeg; null becomes `""`.

    # Safety

    `ptr` must be null or point to a NUL-terminated string.
*/
unsafe fn owned(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }
}

/**
    # Safety

    `entry` must be non-null and point to a registry entry FFmpeg keeps alive
    for the life of the process.
*/
unsafe fn insert<T: Described>(map: &mut ComponentMap, entry: *const T) {
    let entry = unsafe { &*entry };
    let (name, long_name) = unsafe { (owned(entry.name()), owned(entry.long_name())) };
    map.insert(name, long_name);
}

/**
    Walk one of FFmpeg's `*_device_next` linked lists.
*/
fn walk_devices<T: Described>(
    map: &mut ComponentMap,
    next: unsafe extern "C" fn(*const T) -> *const T,
) {
    let mut device: *const T = ptr::null();
    loop {
        // SAFETY: next accepts null to start and a previously returned entry
        // to continue.
        device = unsafe { next(device) };
        if device.is_null() {
            break;
        }
        // SAFETY: device entries are static.
        unsafe { insert(map, device) };
    }
}

/**
    Returns the demuxers (input formats) FFmpeg was built with.
*/
pub fn demuxers() -> Result<ComponentMap> {
    ensure_initialized()?;

    let mut map = ComponentMap::new();
    let mut opaque: *mut c_void = ptr::null_mut();
    loop {
        // SAFETY: opaque starts null and is only touched by FFmpeg.
        let format = unsafe { ffi::av_demuxer_iterate(&mut opaque) };
        if format.is_null() {
            break;
        }
        // SAFETY: demuxers are static.
        unsafe { insert(&mut map, format) };
    }

    trace!(count = map.len(), "listed demuxers");
    Ok(map)
}

/**
    Returns the muxers (output formats) FFmpeg was built with.
*/
pub fn muxers() -> Result<ComponentMap> {
    ensure_initialized()?;

    let mut map = ComponentMap::new();
    let mut opaque: *mut c_void = ptr::null_mut();
    loop {
        // SAFETY: opaque starts null and is only touched by FFmpeg.
        let format = unsafe { ffi::av_muxer_iterate(&mut opaque) };
        if format.is_null() {
            break;
        }
        // SAFETY: muxers are static.
        unsafe { insert(&mut map, format) };
    }

    trace!(count = map.len(), "listed muxers");
    Ok(map)
}

/**
    Returns the audio and video capture devices available through libavdevice.
*/
pub fn input_devices() -> Result<ComponentMap> {
    ensure_initialized()?;

    let mut map = ComponentMap::new();
    walk_devices(&mut map, ffi::av_input_audio_device_next);
    walk_devices(&mut map, ffi::av_input_video_device_next);

    trace!(count = map.len(), "listed input devices");
    Ok(map)
}

/**
    Returns the audio and video output devices available through libavdevice.
*/
pub fn output_devices() -> Result<ComponentMap> {
    ensure_initialized()?;

    let mut map = ComponentMap::new();
    walk_devices(&mut map, ffi::av_output_audio_device_next);
    walk_devices(&mut map, ffi::av_output_video_device_next);

    trace!(count = map.len(), "listed output devices");
    Ok(map)
}

fn protocols(output: bool) -> Result<ComponentMap> {
    ensure_initialized()?;

    let mut map = ComponentMap::new();
    let mut opaque: *mut c_void = ptr::null_mut();
    loop {
        // SAFETY: opaque starts null and is only touched by FFmpeg.
        let name = unsafe { ffi::avio_enum_protocols(&mut opaque, output.into()) };
        if name.is_null() {
            break;
        }
        // SAFETY: protocol names are static strings.
        map.insert(unsafe { owned(name) }, String::new());
    }

    trace!(count = map.len(), output, "listed protocols");
    Ok(map)
}

/**
    Returns the protocols FFmpeg can read from. Long names are empty.
*/
pub fn input_protocols() -> Result<ComponentMap> {
    protocols(false)
}

/**
    Returns the protocols FFmpeg can write to. Long names are empty.
*/
pub fn output_protocols() -> Result<ComponentMap> {
    protocols(true)
}

/**
    Returns the codecs of the given direction and media kind.
*/
pub fn codecs(direction: CodecDirection, kind: MediaKind) -> Result<ComponentMap> {
    ensure_initialized()?;

    let media_type = match kind {
        MediaKind::Audio => ffi::AVMediaType::AVMEDIA_TYPE_AUDIO,
        MediaKind::Video => ffi::AVMediaType::AVMEDIA_TYPE_VIDEO,
    };

    let mut map = ComponentMap::new();
    let mut opaque: *mut c_void = ptr::null_mut();
    loop {
        // SAFETY: opaque starts null and is only touched by FFmpeg.
        let codec = unsafe { ffi::av_codec_iterate(&mut opaque) };
        if codec.is_null() {
            break;
        }

        // SAFETY: codecs are static and non-null here.
        let matches = unsafe {
            let wanted = match direction {
                CodecDirection::Decoder => ffi::av_codec_is_decoder(codec),
                CodecDirection::Encoder => ffi::av_codec_is_encoder(codec),
            };
            wanted != 0 && (*codec).type_ == media_type
        };
        if matches {
            // SAFETY: as above.
            unsafe { insert(&mut map, codec) };
        }
    }

    trace!(count = map.len(), %direction, %kind, "listed codecs");
    Ok(map)
}

/**
    Returns the decoders for the given media kind.
*/
pub fn decoders(kind: MediaKind) -> Result<ComponentMap> {
    codecs(CodecDirection::Decoder, kind)
}

/**
    Returns the encoders for the given media kind.
*/
pub fn encoders(kind: MediaKind) -> Result<ComponentMap> {
    codecs(CodecDirection::Encoder, kind)
}
