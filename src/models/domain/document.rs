use serde::Serialize;

/// Raw bytes of one uploaded PDF. Lives for a single request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    bytes: Vec<u8>,
}

impl Document {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Page texts of a document joined in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for page in pages {
            text.push_str(page.as_ref());
        }
        Self(text)
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExtractedText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for ExtractedText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
