mod composite_text_extractor;
mod pdf_text_extractor;
mod plain_text_extractor;

pub use composite_text_extractor::CompositeTextExtractor;
pub use pdf_text_extractor::PdfTextExtractor;
pub use plain_text_extractor::PlainTextExtractor;
