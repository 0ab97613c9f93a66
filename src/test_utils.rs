#[cfg(test)]
pub mod fixtures {
    use lopdf::{
        content::{Content, Operation},
        dictionary, Document, Object, ObjectId, Stream,
    };

    /// Builds an in-memory PDF with one page per entry. `None` produces a
    /// page with no text layer, like a scanned image.
    pub fn pdf_with_pages(pages: &[Option<&str>]) -> Vec<u8> {
        save(document_with_pages(pages))
    }

    /// A one-page PDF carrying a Standard security handler (R2) whose `/O`
    /// and `/U` entries match no password, the empty one included.
    pub fn encrypted_pdf() -> Vec<u8> {
        let mut doc = document_with_pages(&[Some("Locked content")]);
        let encrypt_id = doc.add_object(dictionary! {
            "Filter" => "Standard",
            "V" => 1,
            "R" => 2,
            "O" => Object::string_literal(vec![0x4f_u8; 32]),
            "U" => Object::string_literal(vec![0x55_u8; 32]),
            "P" => -4,
        });
        doc.trailer.set("Encrypt", encrypt_id);
        doc.trailer.set(
            "ID",
            vec![
                Object::string_literal(vec![0x01_u8; 16]),
                Object::string_literal(vec![0x01_u8; 16]),
            ],
        );
        save(doc)
    }

    fn document_with_pages(pages: &[Option<&str>]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let page_ids: Vec<ObjectId> = pages
            .iter()
            .map(|text| {
                let operations = match text {
                    Some(text) => vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![72.into(), 720.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                    None => Vec::new(),
                };
                let content = Content { operations };
                let content_id = doc.add_object(Stream::new(
                    dictionary! {},
                    content.encode().expect("content should encode"),
                ));
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                    "Resources" => resources_id,
                })
            })
            .collect();

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn save(mut doc: Document) -> Vec<u8> {
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("pdf should serialize");
        bytes
    }

    /// Text of exactly `len` ASCII characters.
    pub fn text_of_len(len: usize) -> String {
        "Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
            .chars()
            .cycle()
            .take(len)
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_pdf_has_header() {
        let bytes = pdf_with_pages(&[Some("hello")]);
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_fixtures_encrypted_pdf_declares_encryption() {
        let bytes = encrypted_pdf();
        let haystack = String::from_utf8_lossy(&bytes);
        assert!(haystack.contains("/Encrypt"));
    }

    #[test]
    fn test_fixtures_text_of_len() {
        assert_eq!(text_of_len(0), "");
        assert_eq!(text_of_len(101).chars().count(), 101);
        assert!(text_of_len(500).starts_with("Lorem ipsum"));
    }
}
