use crate::config::TemplateDefaults;
use crate::results::ScriptResult;
use crate::utils::strip_whitespace;

/// Resolved values substituted into both scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFields {
    pub name: String,
    pub audience: String,
    pub goal: String,
    pub tone: String,
    pub cta: String,
}

impl ScriptFields {
    /// Fills every missing field from the defaults
    ///
    /// The default call-to-action is built from the name with its whitespace
    /// removed, e.g. "Acme Rockets" becomes "Visit AcmeRockets.com to learn more."
    pub fn resolve(
        name: &str,
        audience: Option<&str>,
        goal: Option<&str>,
        tone: Option<&str>,
        cta: Option<&str>,
        defaults: &TemplateDefaults,
    ) -> Self {
        let goal = goal.unwrap_or(defaults.goal.as_str()).to_string();
        let cta = match cta {
            Some(cta) => cta.to_string(),
            None => format!("Visit {}.com to {}.", strip_whitespace(name), goal),
        };

        Self {
            name: name.to_string(),
            audience: audience.unwrap_or(defaults.audience.as_str()).to_string(),
            goal,
            tone: tone.unwrap_or(defaults.tone.as_str()).to_string(),
            cta,
        }
    }
}

/// Builds the ~60 second script around the long summary
pub fn script60(fields: &ScriptFields, summary: &str) -> String {
    format!(
        "Narrator ({tone}):\n\
         Meet {name}. Here's the problem we solve for {audience}: {summary}\n\
         With {name}, you get a simple way to cut the noise, move faster, and get results. \
         Here's how it works: step one, we understand your needs; step two, we deliver a tailored solution; \
         step three, you launch with confidence. Real teams use us to save time and hit their goals—without babysitting vendors.\n\
         Ready to see it in action? {cta}",
        tone = fields.tone,
        name = fields.name,
        audience = fields.audience,
        summary = summary,
        cta = fields.cta,
    )
}

/// Builds the ~30 second script around the short summary
pub fn script30(fields: &ScriptFields, summary: &str) -> String {
    format!(
        "Narrator ({tone}):\n\
         {name} helps {audience} solve this fast: {summary}\n\
         Try it now—{cta}",
        tone = fields.tone,
        name = fields.name,
        audience = fields.audience,
        summary = summary,
        cta = fields.cta,
    )
}

/// Renders both scripts
pub fn render(fields: &ScriptFields, long_summary: &str, short_summary: &str) -> ScriptResult {
    ScriptResult::new(
        script60(fields, long_summary),
        script30(fields, short_summary),
    )
}
