use bytes::Bytes;

/// Raw audio received from a caller, held only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: Bytes,
    media_type: Option<String>,
}

impl AudioPayload {
    pub fn new(data: impl Into<Bytes>, media_type: Option<String>) -> Self {
        Self {
            data: data.into(),
            media_type,
        }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Contiguous slices of at most `chunk_size` bytes, in offset order.
    ///
    /// Slices share the payload's buffer; nothing is copied.
    pub fn chunks(&self, chunk_size: usize) -> impl ExactSizeIterator<Item = Bytes> + '_ {
        let chunk_size = chunk_size.max(1);
        let count = self.data.len().div_ceil(chunk_size);
        (0..count).map(move |i| {
            let start = i * chunk_size;
            let end = (start + chunk_size).min(self.data.len());
            self.data.slice(start..end)
        })
    }
}
