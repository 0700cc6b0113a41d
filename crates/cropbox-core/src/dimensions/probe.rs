//! Header-only size probing with EXIF orientation handling.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{DimensionError, Dimensions};

/// Something that can discover the natural size of the image behind a URI.
pub trait SizeProbe {
    /// Probe `uri` for its pixel size.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::Unavailable`] if the resource cannot be read.
    fn probe(&self, uri: &str) -> Result<Dimensions, DimensionError>;
}

/// Probes local files, given as plain paths or `file://` URIs.
///
/// Only the image header is decoded. EXIF orientations that transpose the
/// image (5 to 8) report swapped dimensions, so the result matches what is
/// displayed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileProbe;

impl SizeProbe for FileProbe {
    fn probe(&self, uri: &str) -> Result<Dimensions, DimensionError> {
        let unavailable = |reason: String| DimensionError::Unavailable {
            uri: uri.to_string(),
            reason,
        };

        let path = local_path(uri).ok_or_else(|| unavailable("unsupported URI scheme".to_string()))?;
        let file = File::open(path).map_err(|e| unavailable(e.to_string()))?;

        read_dimensions(BufReader::new(file)).map_err(unavailable)
    }
}

/// Probe an encoded image held in memory.
///
/// # Errors
///
/// Returns [`DimensionError::Unavailable`] if the bytes are not a
/// recognised image format.
pub fn probe_bytes(bytes: &[u8]) -> Result<Dimensions, DimensionError> {
    read_dimensions(Cursor::new(bytes)).map_err(|reason| DimensionError::Unavailable {
        uri: "<memory>".to_string(),
        reason,
    })
}

fn local_path(uri: &str) -> Option<&Path> {
    match uri.split_once("://") {
        Some(("file", rest)) => Some(Path::new(rest)),
        Some(_) => None,
        None => Some(Path::new(uri)),
    }
}

fn read_dimensions<R: BufRead + Seek>(mut reader: R) -> Result<Dimensions, String> {
    let transposed = transposes_dimensions(&mut reader);
    reader.seek(SeekFrom::Start(0)).map_err(|e| e.to_string())?;

    let (width, height) = ImageReader::new(reader)
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())?;

    let dims = Dimensions::new(width, height);
    Ok(if transposed { dims.swapped() } else { dims })
}

/// Whether the EXIF orientation swaps width and height.
///
/// Missing or unreadable EXIF data counts as the normal orientation.
fn transposes_dimensions<R: BufRead + Seek>(reader: &mut R) -> bool {
    let Ok(exif) = Reader::new().read_from_container(reader) else {
        return false;
    };
    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .is_some_and(|orientation| (5..=8).contains(&orientation))
}
