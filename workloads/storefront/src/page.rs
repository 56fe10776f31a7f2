//! Page shell around the two view sections.

use storefront_views::render::escape_html;

/// Assemble the full document from the rendered catalog and recommendations.
pub fn render_page(catalog_html: &str, recommendations_html: &str, request_id: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>The movie store</title>
    <style>{styles}</style>
</head>
<body>
    <header class="site-header">
        <nav class="navbar"><a class="navbar-brand" href="/">The movie store</a></nav>
    </header>
    <main class="store-container">
        <h3>Rate some movies!</h3>
        {catalog}
        <h3>Your Recommendations</h3>
        {recommendations}
        <p class="request-info">Request ID: {request_id}</p>
    </main>
</body>
</html>"#,
        styles = STORE_STYLES,
        catalog = catalog_html,
        recommendations = recommendations_html,
        request_id = escape_html(request_id),
    )
}

/// Minimal error page for rejected requests.
pub fn render_error_page(status: u16, message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{status} | The movie store</title></head>
<body><h3>{status}</h3><p>{message}</p><p><a href="/">Back to the store</a></p></body>
</html>"#,
        message = escape_html(message),
    )
}

const STORE_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 0; background: #f5f5f5; }
.site-header { background: #343a40; color: white; padding: 1rem 2rem; }
.navbar-brand { color: white; text-decoration: none; font-size: 1.25rem; }
.store-container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.request-info { font-size: 0.75rem; color: #666; }

/* Sections */
.carousel { display: flex; gap: 1rem; overflow-x: auto; padding: 1rem 0; }
.catalog-entry, .recommendations .product { background: white; border-radius: 8px; padding: 1rem; min-width: 220px; }
.product pre { white-space: pre-wrap; margin: 0 0 0.5rem 0; font-family: inherit; }
.product-name { font-weight: bold; }
.product-desc { color: #555; }

/* Stars */
.rating { display: flex; gap: 0.25rem; }
.star { background: none; border: none; font-size: 1.5rem; color: #ccc; cursor: pointer; padding: 0; }
.star--on { color: #ff9800; }
.rating:hover .star { color: #ff9800; }
.rating .star:hover ~ .star { color: #ccc; }

/* Loading/Fallback States */
.placeholder, .empty { color: #888; }
.section--fallback { opacity: 0.7; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout() {
        let html = render_page("<section>cat</section>", "<section>recs</section>", "req-1");
        assert!(html.contains("The movie store"));

        let rate = html.find("Rate some movies!").unwrap();
        let catalog = html.find("cat</section>").unwrap();
        let recs_heading = html.find("Your Recommendations").unwrap();
        let recs = html.find("recs</section>").unwrap();
        assert!(rate < catalog && catalog < recs_heading && recs_heading < recs);
        assert!(html.contains("Request ID: req-1"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = render_error_page(400, "bad <form>");
        assert!(html.contains("<h3>400</h3>"));
        assert!(html.contains("bad &lt;form&gt;"));

        let quoted = render_error_page(400, r#"rating "9" & up"#);
        assert!(quoted.contains("rating &quot;9&quot; &amp; up"));
    }
}
