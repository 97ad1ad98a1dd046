use std::fmt;
use std::io::{self, Read};

/// Owned byte-stream handle exchanged with filesystem providers
pub type ByteStream = Box<dyn Read + Send>;

/// StreamResource - opaque carrier for one byte-stream handle
///
/// Callers of the backup filesystem port never see the provider's stream
/// type; they receive and hand over a `StreamResource` instead. The wrapped
/// handle is fixed at construction. Reading through the resource consumes
/// the underlying stream, so a resource is usually read once.
pub struct StreamResource {
    stream: ByteStream,
}

impl StreamResource {
    pub fn new(stream: ByteStream) -> Self {
        Self { stream }
    }

    /// Wraps any owned reader, boxing it
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::new(Box::new(reader))
    }

    /// Returns the underlying stream handle for reading
    pub fn resource_mut(&mut self) -> &mut (dyn Read + Send) {
        self.stream.as_mut()
    }

    /// Unwraps the resource, handing the stream back to the caller
    pub fn into_inner(self) -> ByteStream {
        self.stream
    }
}

impl Read for StreamResource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl fmt::Debug for StreamResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamResource").finish_non_exhaustive()
    }
}
