use async_trait::async_trait;

use crate::application::ports::{ExtractorError, TextExtractor};

/// Treats the upload as UTF-8 text, skipping any invalid byte sequences.
/// Never fails: a fully binary upload simply yields whatever valid UTF-8
/// fragments it contains, possibly nothing.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract_text(&self, data: &[u8], _filename: &str) -> Result<String, ExtractorError> {
        Ok(decode_utf8_skipping_invalid(data))
    }
}

fn decode_utf8_skipping_invalid(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    let mut rest = data;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                return out;
            }
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                out.push_str(std::str::from_utf8(&rest[..valid_up_to]).unwrap_or_default());
                // error_len is None only at an incomplete trailing sequence
                let skip = e.error_len().unwrap_or(rest.len() - valid_up_to);
                rest = &rest[valid_up_to + skip..];
            }
        }
    }
}
