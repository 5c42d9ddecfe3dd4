use crate::config::{ScriptConfig, TemplateDefaults};
use crate::error::ScriptError;
use crate::fetchers::{Fetcher, PageFetcher};
use crate::parsers::text::{normalize, usable_pasted_text};
use crate::parsers::{SourceText, html};
use crate::results::{ScriptRequest, ScriptResult};
use crate::summarizer::{LONG_SCRIPT_WORDS, SHORT_SCRIPT_WORDS, summarize};
use crate::template::{self, ScriptFields};
use crate::utils::non_blank;

/// Turns a request into a pair of explainer scripts
///
/// Holds no per-request state, so one instance can serve any number of
/// requests concurrently.
#[derive(Debug, Clone)]
pub struct ScriptGenerator<F = PageFetcher> {
    fetcher: F,
    defaults: TemplateDefaults,
}

impl ScriptGenerator<PageFetcher> {
    /// Create a generator with the fetcher and defaults from the configuration
    pub fn from_config(config: &ScriptConfig) -> Result<Self, ScriptError> {
        let fetcher = PageFetcher::from_config(&config.fetcher)?;
        Ok(Self::new(fetcher, config.defaults.clone()))
    }
}

impl<F: Fetcher> ScriptGenerator<F> {
    pub fn new(fetcher: F, defaults: TemplateDefaults) -> Self {
        Self { fetcher, defaults }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Generate both scripts for the request
    pub async fn generate(&self, request: &ScriptRequest) -> Result<ScriptResult, ScriptError> {
        let source = self.resolve_source(request).await?;
        Ok(self.render(request, &source))
    }

    /// Pick the text to work from: long enough pasted text wins, otherwise the
    /// URL is fetched and its HTML extracted
    pub async fn resolve_source(&self, request: &ScriptRequest) -> Result<SourceText, ScriptError> {
        if let Some(text) = usable_pasted_text(request.pasted_text.as_deref()) {
            ::log::info!("Using {} characters of pasted text", text.chars().count());
            return Ok(SourceText::Pasted(text.to_string()));
        }

        match request.url() {
            Some(url) => {
                let html = self.fetcher.fetch(url.trim()).await?;
                Ok(SourceText::Page(html::extract(&html)))
            }
            None => {
                ::log::debug!("Request has neither usable pasted text nor a URL");
                Err(ScriptError::missing_input())
            }
        }
    }

    /// Summarize the source and fill both templates
    pub fn render(&self, request: &ScriptRequest, source: &SourceText) -> ScriptResult {
        let company_name = request.company_name().map(str::trim);
        let blob = normalize(&source.blob(company_name));
        if blob.is_empty() {
            ::log::warn!("Source produced no text, scripts will have empty summaries");
        }

        let long_summary = summarize(&blob, LONG_SCRIPT_WORDS);
        let short_summary = summarize(&blob, SHORT_SCRIPT_WORDS);

        let name = company_name
            .or_else(|| source.derived_name())
            .unwrap_or(self.defaults.company_name.as_str());

        let fields = ScriptFields::resolve(
            name,
            non_blank(request.audience.as_deref()).map(str::trim),
            non_blank(request.goal.as_deref()).map(str::trim),
            non_blank(request.tone.as_deref()).map(str::trim),
            non_blank(request.cta.as_deref()).map(str::trim),
            &self.defaults,
        );

        template::render(&fields, &long_summary, &short_summary)
    }
}
