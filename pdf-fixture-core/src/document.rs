use crate::objects::{Dictionary, Object};
use chrono::{DateTime, Utc};

/// Metadata for a PDF document, written as the trailer's `/Info` dictionary.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
    /// Date and time the document was last modified
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            author: None,
            subject: None,
            creator: Some("pdf_fixture".to_string()),
            producer: Some(format!("pdf_fixture v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(now),
            modification_date: Some(now),
        }
    }
}

impl DocumentMetadata {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Pin both dates, so repeated runs produce byte-identical files.
    pub fn with_fixed_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self.modification_date = Some(date);
        self
    }

    pub(crate) fn to_info_dictionary(&self) -> Dictionary {
        let mut info = Dictionary::new();
        let text_entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                info.set(key, Object::String(value.clone()));
            }
        }
        if let Some(date) = self.creation_date {
            info.set("CreationDate", Object::String(format_pdf_date(date)));
        }
        if let Some(date) = self.modification_date {
            info.set("ModDate", Object::String(format_pdf_date(date)));
        }
        info
    }
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSSOHH'mm)
pub(crate) fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");

    // For UTC, the offset is always +00'00
    format!("{formatted}+00'00")
}
