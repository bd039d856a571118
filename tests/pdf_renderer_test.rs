use fieldwork::application::ports::WorkpaperRenderer;
use fieldwork::domain::WorkpaperDraft;
use fieldwork::infrastructure::export::PdfWorkpaperRenderer;

fn draft() -> WorkpaperDraft {
    WorkpaperDraft {
        control_name: "AP-01".to_string(),
        control_description: "Invoices above the approval threshold require sign-off."
            .to_string(),
        suggestion: "Select a sample of invoices and inspect the approval evidence."
            .to_string(),
    }
}

#[tokio::test]
async fn given_draft_when_rendered_then_writes_pdf_at_configured_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("workpaper.pdf");
    let renderer = PdfWorkpaperRenderer::new(output.clone()).unwrap();

    let written = renderer.render(&draft()).await.unwrap();

    assert_eq!(written, output);
    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn given_second_render_when_written_then_previous_export_is_overwritten() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("workpaper.pdf");
    let renderer = PdfWorkpaperRenderer::new(output.clone()).unwrap();

    renderer.render(&draft()).await.unwrap();
    let first_len = std::fs::metadata(&output).unwrap().len();

    let mut longer = draft();
    longer.suggestion = longer.suggestion.repeat(20);
    renderer.render(&longer).await.unwrap();
    let second_len = std::fs::metadata(&output).unwrap().len();

    assert!(second_len > first_len);
}

#[tokio::test]
async fn given_missing_parent_dir_when_constructed_then_it_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = dir.path().join("nested").join("workpaper.pdf");

    let renderer = PdfWorkpaperRenderer::new(output.clone()).unwrap();
    renderer.render(&draft()).await.unwrap();

    assert!(output.exists());
}
