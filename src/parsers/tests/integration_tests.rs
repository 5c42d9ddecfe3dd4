use crate::parsers::{PageContent, SourceText, html};

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title>Acme | Home</title>
        <meta name="description" content="Shipping software for small teams">
    </head><body>
        <h1>Acme Rockets</h1>
        <p>We ship your orders the same day, with tracking your customers will love.</p>
        <p>Connect your store in minutes and stop copying addresses by hand.</p>
    </body></html>"#;

    #[test]
    fn test_blob_from_page() {
        let page = html::extract(PAGE);
        assert_eq!(
            page.to_blob(None),
            "Acme Rockets. Shipping software for small teams. \
             We ship your orders the same day, with tracking your customers will love. \
             Connect your store in minutes and stop copying addresses by hand."
        );
    }

    #[test]
    fn test_company_name_leads_blob() {
        let page = html::extract(PAGE);
        assert!(page.to_blob(Some("Acme Inc")).starts_with("Acme Inc. Shipping software"));
    }

    #[test]
    fn test_title_used_when_no_heading() {
        let page = PageContent {
            title: "Acme | Home".to_string(),
            ..PageContent::default()
        };
        assert_eq!(page.derived_name(), Some("Acme | Home"));
        assert_eq!(page.to_blob(None), "Acme | Home");
    }

    #[test]
    fn test_missing_description_and_heading() {
        let page = html::extract(
            "<html><body><p>Only a paragraph here, but it is long enough to count.</p></body></html>",
        );
        assert_eq!(page.derived_name(), None);
        assert_eq!(
            page.to_blob(None),
            "Only a paragraph here, but it is long enough to count."
        );
    }

    #[test]
    fn test_empty_page_gives_empty_blob() {
        let page = html::extract("");
        assert_eq!(page.to_blob(None), "");
    }

    #[test]
    fn test_source_text() {
        let pasted = SourceText::Pasted("Pasted copy.".to_string());
        assert_eq!(pasted.blob(Some("Acme")), "Pasted copy.");
        assert_eq!(pasted.derived_name(), None);

        let page = SourceText::Page(html::extract(PAGE));
        assert_eq!(page.derived_name(), Some("Acme Rockets"));
        assert!(page.blob(None).starts_with("Acme Rockets. "));
    }
}
