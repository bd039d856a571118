mod export;
mod generate;
mod health;
mod upload;

use serde::Serialize;

pub use export::export_handler;
pub use generate::generate_handler;
pub use health::health_handler;
pub use upload::upload_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
