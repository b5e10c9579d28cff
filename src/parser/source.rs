//! Opening plain and compressed text sources

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::{Error, Result};

/// A way of opening a file as a stream of lines
pub trait Source: Send + Sync {
    /// Open the file for line-by-line reading
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>>;

    /// Check if this source handles the given compression flag
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Uncompressed text
pub struct PlainSource;

impl Source for PlainSource {
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "" | "txt")
    }
}

/// Gzip-compressed text
pub struct GzipSource;

impl Source for GzipSource {
    fn open(&self, path: &Path) -> Result<Box<dyn BufRead>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "gz" | "gzip")
    }
}

/// Lines of a reader with invalid UTF-8 replaced by U+FFFD.
///
/// Line endings (`\n` or `\r\n`) are stripped.
pub(crate) struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

pub(crate) fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Picks a source from an explicit compression flag
pub struct SourceFactory {
    sources: Vec<Box<dyn Source>>,
}

impl Default for SourceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceFactory {
    pub fn new() -> Self {
        Self {
            sources: vec![Box::new(PlainSource), Box::new(GzipSource)],
        }
    }

    /// Get the source for a compression flag; the file content is never inspected
    pub fn get_source(&self, ext: &str) -> Result<&dyn Source> {
        for source in &self.sources {
            if source.supports_extension(ext) {
                return Ok(source.as_ref());
            }
        }

        Err(Error::UnsupportedCompression(ext.to_string()))
    }

    /// Open a file with the source matching `ext`
    pub fn open(&self, path: &Path, ext: &str) -> Result<Box<dyn BufRead>> {
        let source = self.get_source(ext)?;
        log::debug!("opening {} (compression {:?})", path.display(), ext);
        source.open(path)
    }
}
