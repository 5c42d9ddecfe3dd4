pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

/// Content pulled out of a web page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    /// Text of the first `<title>` element
    pub title: String,

    /// `content` attribute of `<meta name="description">`
    pub meta_description: String,

    /// Text of the first `<h1>` element
    pub first_heading: String,

    /// Qualifying paragraph texts in document order
    pub paragraphs: Vec<String>,
}

impl PageContent {
    /// Paragraphs joined with single spaces
    pub fn body(&self) -> String {
        self.paragraphs.join(" ")
    }

    /// Name derived from the page: first heading, then title
    pub fn derived_name(&self) -> Option<&str> {
        [self.first_heading.as_str(), self.title.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }

    /// Flattens the page into a single text blob.
    ///
    /// The blob starts with the company name when given (otherwise the heading
    /// or title), followed by the meta description and the body. Empty parts are
    /// dropped and the rest joined with ". ".
    pub fn to_blob(&self, company_name: Option<&str>) -> String {
        let lead = company_name.or_else(|| self.derived_name()).unwrap_or("");
        let body = self.body();

        [lead, self.meta_description.as_str(), body.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(". ")
    }
}

/// Where the text for a request came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    /// User supplied copy, used verbatim after trimming
    Pasted(String),
    /// Content extracted from a fetched page
    Page(PageContent),
}

impl SourceText {
    /// The text blob to summarize
    pub fn blob(&self, company_name: Option<&str>) -> String {
        match self {
            SourceText::Pasted(text) => text.clone(),
            SourceText::Page(page) => page.to_blob(company_name),
        }
    }

    /// Name derived from the source, if any
    pub fn derived_name(&self) -> Option<&str> {
        match self {
            SourceText::Pasted(_) => None,
            SourceText::Page(page) => page.derived_name(),
        }
    }
}
