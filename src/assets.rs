//! Static assets and page templates.
//!
//! Assets (icons, images) are streamed to the client in bounded chunks so a
//! large file never has to sit in memory. Templates are small HTML pages
//! loaded once at startup and rendered by substituting a single token.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::AssetError;

/// Default size of one streamed chunk
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// A lazily read asset body.
pub struct AssetStream {
    name: String,
    reader: Box<dyn AsyncRead + Send + Unpin>,
    chunk_size: usize,
}

impl AssetStream {
    pub fn new(
        name: impl Into<String>,
        reader: impl AsyncRead + Send + Unpin + 'static,
        chunk_size: usize,
    ) -> Self {
        Self {
            name: name.into(),
            reader: Box::new(reader),
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the next chunk, at most `chunk_size` bytes. `None` at end of file.
    pub async fn next_chunk(&mut self) -> io::Result<Option<Bytes>> {
        let mut buf = BytesMut::zeroed(self.chunk_size);
        let n = self.reader.read(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        buf.truncate(n);
        Ok(Some(buf.freeze()))
    }
}

/// Something that can hand out static assets by name.
pub trait AssetSource: Send + Sync {
    fn open_stream(&self, name: &str, chunk_size: usize) -> Result<AssetStream, AssetError>;
}

/// Something that can load page templates by name.
pub trait TemplateSource {
    fn load(&self, name: &str) -> Result<Template, AssetError>;
}

/// A page with a placeholder token in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    text: String,
}

impl Template {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the first occurrence of `token` with `value`.
    ///
    /// A template without the token renders unchanged.
    pub fn render(&self, token: &str, value: &str) -> String {
        if token.is_empty() {
            return self.text.clone();
        }
        self.text.replacen(token, value, 1)
    }
}

/// Assets and templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_error(name: &str, err: io::Error) -> AssetError {
        if err.kind() == io::ErrorKind::NotFound {
            AssetError::Missing(name.to_string())
        } else {
            AssetError::Io {
                name: name.to_string(),
                source: err,
            }
        }
    }
}

impl AssetSource for DirAssets {
    fn open_stream(&self, name: &str, chunk_size: usize) -> Result<AssetStream, AssetError> {
        let file = std::fs::File::open(self.root.join(name))
            .map_err(|e| Self::read_error(name, e))?;

        let meta = file.metadata().map_err(|e| Self::read_error(name, e))?;
        if !meta.is_file() {
            return Err(Self::read_error(
                name,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        Ok(AssetStream::new(
            name,
            tokio::fs::File::from_std(file),
            chunk_size,
        ))
    }
}

impl TemplateSource for DirAssets {
    fn load(&self, name: &str) -> Result<Template, AssetError> {
        let raw = std::fs::read(self.root.join(name))
            .map_err(|e| Self::read_error(name, e))?;
        let text = String::from_utf8(raw).map_err(|_| AssetError::NotText(name.to_string()))?;
        Ok(Template::new(name, text))
    }
}

/// Assets held in memory, e.g. compiled in with `include_bytes!`.
#[derive(Debug, Clone, Default)]
pub struct StaticAssets {
    files: HashMap<String, Bytes>,
}

impl StaticAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        self.files.insert(name.into(), contents.into());
        self
    }
}

impl AssetSource for StaticAssets {
    fn open_stream(&self, name: &str, chunk_size: usize) -> Result<AssetStream, AssetError> {
        let contents = self
            .files
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::Missing(name.to_string()))?;

        Ok(AssetStream::new(name, io::Cursor::new(contents), chunk_size))
    }
}

impl TemplateSource for StaticAssets {
    fn load(&self, name: &str) -> Result<Template, AssetError> {
        let contents = self
            .files
            .get(name)
            .ok_or_else(|| AssetError::Missing(name.to_string()))?;
        let text = std::str::from_utf8(contents).map_err(|_| AssetError::NotText(name.to_string()))?;
        Ok(Template::new(name, text))
    }
}
