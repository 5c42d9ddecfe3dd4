// Re-export modules
pub mod config;
pub mod error;
pub mod fetchers;
pub mod generator;
pub mod parsers;
pub mod results;
pub mod server;
pub mod summarizer;
pub mod template;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScriptConfig;
pub use error::ScriptError;
pub use generator::ScriptGenerator;
pub use parsers::PageContent;
pub use results::{ScriptRequest, ScriptResult};

/// Generate scripts with the default configuration (plain HTTP fetching)
pub async fn generate(request: &ScriptRequest) -> Result<ScriptResult, ScriptError> {
    ScriptGenerator::from_config(&ScriptConfig::default())?
        .generate(request)
        .await
}
