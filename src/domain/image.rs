/// Raw image bytes together with the URL they were downloaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub source: String,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    pub fn new(source: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            source: source.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
