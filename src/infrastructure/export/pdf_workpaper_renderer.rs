use std::path::PathBuf;

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::application::ports::{RenderError, WorkpaperRenderer};
use crate::domain::WorkpaperDraft;

use super::layout::{self, Page};

/// Writes the laid-out workpaper to a single fixed path with lopdf,
/// overwriting the previous export. Document assembly is CPU-bound and runs
/// off the async runtime.
pub struct PdfWorkpaperRenderer {
    output_path: PathBuf,
}

impl PdfWorkpaperRenderer {
    pub fn new(output_path: PathBuf) -> Result<Self, RenderError> {
        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { output_path })
    }
}

#[async_trait]
impl WorkpaperRenderer for PdfWorkpaperRenderer {
    #[tracing::instrument(skip(self, draft), fields(control_name = %draft.control_name))]
    async fn render(&self, draft: &WorkpaperDraft) -> Result<PathBuf, RenderError> {
        let draft = draft.clone();
        let path = self.output_path.clone();

        let written = tokio::task::spawn_blocking(move || {
            let pages = layout::lay_out_workpaper(&draft);
            let mut document = build_document(&pages)
                .map_err(|e| RenderError::RenderFailed(e.to_string()))?;
            document
                .save(&path)
                .map_err(|e| RenderError::WriteFailed(e.to_string()))?;
            Ok::<PathBuf, RenderError>(path)
        })
        .await
        .map_err(|e| RenderError::RenderFailed(format!("task join error: {e}")))??;

        tracing::info!(path = %written.display(), "Workpaper PDF exported");

        Ok(written)
    }
}

/// Assembles a Helvetica-only document, one uncompressed content stream per
/// page. Layout `y` runs downward from the page top, so it is flipped here.
fn build_document(pages: &[Page]) -> Result<Document, lopdf::Error> {
    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();

    let font_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = document.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids: Vec<Object> = Vec::with_capacity(pages.len());

    for page in pages {
        let mut operations = Vec::new();
        for line in &page.lines {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec!["F1".into(), line.font_size.into()],
            ));
            operations.push(Operation::new(
                "Td",
                vec![line.x.into(), (layout::PAGE_HEIGHT - line.y).into()],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(line.text.as_str())],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id =
            document.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                layout::PAGE_WIDTH.into(),
                layout::PAGE_HEIGHT.into(),
            ],
        }),
    );

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    Ok(document)
}
