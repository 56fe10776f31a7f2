//! HTML section renderers.

use storefront_api::{ProductId, Rating};

use crate::LoadState;

/// Markup shown while a view's first fetch is outstanding (or failed).
pub fn render_placeholder() -> String {
    r#"<div class="placeholder"><h5>loading...</h5></div>"#.to_string()
}

/// Markup for a section whose listing loaded with no items.
pub fn render_empty() -> String {
    r#"<div class="empty"><h5>nothing here yet</h5></div>"#.to_string()
}

/// A read-only product cell.
pub fn render_product_cell(id: ProductId, name: &str, description: &str) -> String {
    format!(
        r#"<div class="product" data-product-id="{id}">
        <pre class="product-name">{name}</pre>
        <pre class="product-desc">{desc}</pre>
    </div>"#,
        id = id,
        name = escape_html(name),
        desc = escape_html(description)
    )
}

/// Five star buttons posting the chosen value for one product.
///
/// `selection` 0 renders all stars empty.
pub fn render_stars_form(product_id: ProductId, selection: u8) -> String {
    let buttons: String = (Rating::MIN..=Rating::MAX)
        .map(|value| {
            let (class, glyph) = if value <= selection {
                ("star star--on", "★")
            } else {
                ("star", "☆")
            };
            format!(
                r#"<button type="submit" name="rating" value="{value}" class="{class}" aria-label="{value} star">{glyph}</button>"#,
            )
        })
        .collect();

    format!(
        r#"<form class="rating" method="post" action="/ratings" data-product-id="{id}" data-rating="{selection}">
        <input type="hidden" name="product_id" value="{id}">
        {buttons}
    </form>"#,
        id = product_id,
    )
}

/// Wrap a view's load state in a named section.
///
/// Anything short of `Loaded` renders the placeholder; `Failed` adds a
/// fallback modifier class so the failure is visible in markup only.
/// An empty `Loaded` list renders the empty notice, not the placeholder.
pub fn render_section<T>(
    name: &str,
    state: &LoadState<T>,
    render_item: impl Fn(&T) -> String,
) -> String {
    let (modifier, body) = match state {
        LoadState::Loaded(items) if items.is_empty() => ("", render_empty()),
        LoadState::Loaded(items) => ("", items.iter().map(render_item).collect::<String>()),
        LoadState::Failed(_) => (" section--fallback", render_placeholder()),
        LoadState::Unloaded | LoadState::Loading => ("", render_placeholder()),
    };

    format!(
        r#"<section class="{name}{modifier}" data-section="{name}" data-state="{state}">
    <div class="carousel">
        {body}
    </div>
</section>"#,
        state = state.name(),
    )
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
