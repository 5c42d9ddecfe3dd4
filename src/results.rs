use serde::{Deserialize, Serialize};

use crate::utils::non_blank;

/// Inputs for one script generation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRequest {
    /// Website to pull copy from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Copy pasted by the user, used instead of the URL when long enough
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pasted_text: Option<String>,

    /// Company or product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Target audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// What the viewer should do next
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,

    /// Narrator tone label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    /// Closing call-to-action sentence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
}

impl ScriptRequest {
    /// Request built from pasted copy
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            pasted_text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Request built from a website URL
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Company name, if one was supplied and is not blank
    pub fn company_name(&self) -> Option<&str> {
        non_blank(self.company_name.as_deref())
    }

    /// URL, if one was supplied and is not blank
    pub fn url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }
}

/// The two generated scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptResult {
    /// ~60 second script
    pub script60: String,

    /// ~30 second script
    pub script30: String,
}

impl ScriptResult {
    pub fn new(script60: String, script30: String) -> Self {
        Self { script60, script30 }
    }
}
