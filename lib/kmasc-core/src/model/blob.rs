#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blob {
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

impl Blob {
    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("application/pdf"))
            || self.content.starts_with(b"%PDF")
    }
}
