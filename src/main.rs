use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use fieldwork::application::ports::TextExtractor;
use fieldwork::application::services::{IngestionService, SuggestionService, WorkpaperStore};
use fieldwork::domain::SourceFormat;
use fieldwork::infrastructure::export::PdfWorkpaperRenderer;
use fieldwork::infrastructure::observability::{TracingConfig, init_tracing};
use fieldwork::infrastructure::persistence::JsonWorkpaperRepository;
use fieldwork::infrastructure::text_processing::{
    CompositeTextExtractor, PdfTextExtractor, PlainTextExtractor,
};
use fieldwork::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.port);

    let repository = Arc::new(JsonWorkpaperRepository::new(settings.archive_path())?);
    let store = Arc::new(WorkpaperStore::load(repository).await);

    let text_extractor = Arc::new(CompositeTextExtractor::new(vec![
        (
            SourceFormat::Pdf,
            Arc::new(PdfTextExtractor::new()) as Arc<dyn TextExtractor>,
        ),
        (
            SourceFormat::Text,
            Arc::new(PlainTextExtractor) as Arc<dyn TextExtractor>,
        ),
    ]));

    let ingestion_service = Arc::new(IngestionService::new(text_extractor, Arc::clone(&store)));
    let suggestion_service = Arc::new(SuggestionService::new(Arc::clone(&store)));
    let renderer = Arc::new(PdfWorkpaperRenderer::new(settings.export_path())?);

    let state = AppState {
        ingestion_service,
        suggestion_service,
        renderer,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.host.parse()?, settings.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
