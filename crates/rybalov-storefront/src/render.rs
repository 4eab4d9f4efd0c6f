//! Full-page rendering of a storefront session.

use rybalov_commerce::catalog;
use rybalov_commerce::learn::tutorials;

use crate::content::{BRAND, FEATURES, FOOTER, HERO};
use crate::sections::*;
use crate::session::Storefront;
use crate::shell::{HeadContent, Shell};

const STOREFRONT_STYLES: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: linear-gradient(135deg, #F5F5DC, #E8F4E8, #D5E8E0); color: #1f2d2a; }
.site-header { position: sticky; top: 0; display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; background: #1d4d4f; color: #fff; }
.site-nav { display: flex; gap: 1.5rem; }
.nav-link { background: none; border: 0; color: inherit; font-weight: 600; cursor: pointer; }
.nav-link--active { color: #f2b84b; border-bottom: 2px solid #f2b84b; }
.cart-button { position: relative; background: #f2b84b; border: 0; border-radius: 6px; padding: .5rem; }
.cart-badge { position: absolute; top: -.5rem; right: -.5rem; min-width: 1.5rem; border-radius: 999px; background: #d64545; color: #fff; font-size: .75rem; }
.cart-sheet { position: fixed; top: 0; right: 0; width: min(32rem, 100%); height: 100%; overflow-y: auto; padding: 1.5rem; background: #fff; box-shadow: -4px 0 16px rgba(0,0,0,.15); }
.cart-line { display: flex; justify-content: space-between; padding: 1rem 0; border-bottom: 1px solid #eee; }
.cart-summary { display: flex; justify-content: space-between; font-weight: 700; margin: 1rem 0; }
.hero { padding: 5rem 1rem; text-align: center; }
.section-title { text-align: center; color: #1d4d4f; }
.product-grid, .features-grid, .tutorial-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; padding: 0 2rem 3rem; }
.product-card, .feature-card, .tutorial-card { background: #fff; border-radius: 8px; padding: 1.5rem; box-shadow: 0 2px 8px rgba(0,0,0,.08); }
.badge { display: inline-block; padding: .1rem .5rem; border-radius: 999px; font-size: .75rem; background: #1d4d4f; color: #fff; }
.badge--secondary { background: #f2b84b; color: #1f2d2a; }
.badge--outline { background: none; border: 1px solid currentColor; color: inherit; }
.tabs { display: flex; justify-content: center; gap: .5rem; margin-bottom: 2rem; }
.tab--active { font-weight: 700; }
.site-footer { background: #1d4d4f; color: #fff; text-align: center; padding: 2rem; }
"#;

/// Page-level rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title.
    pub title: String,
    /// External stylesheet; when set, the built-in styles are not inlined.
    pub stylesheet: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: BRAND.to_string(),
            stylesheet: None,
        }
    }
}

/// Render the main content block for the active section.
pub fn render_content(store: &Storefront) -> String {
    if store.active_section().shows_tutorials() {
        render_tutorials(store.tutorial_tab(), tutorials())
    } else {
        let mut html = render_hero(&HERO);
        html.push_str(&render_products(catalog::products()));
        html.push_str(&render_features(&FEATURES));
        html
    }
}

/// Render the complete HTML document for the session's current state.
pub fn render_page(store: &Storefront, options: &RenderOptions) -> String {
    let head = HeadContent::new(&options.title)
        .with_meta("viewport", "width=device-width, initial-scale=1");
    let head = match &options.stylesheet {
        Some(href) => head.with_stylesheet(href),
        None => head.with_style(STOREFRONT_STYLES),
    };

    let shell = Shell::new(head).with_body_start(format!(
        "<body class=\"storefront\" data-active-section=\"{}\">\n",
        store.active_section().slug()
    ));

    let mut html = shell.render_opening();
    html.push_str(&render_header(
        store.active_section(),
        store.cart().total_items(),
    ));
    if store.is_cart_open() {
        html.push_str(&render_cart_sheet(store.cart()));
    }
    html.push_str("<main>\n");
    html.push_str(&render_content(store));
    html.push_str("</main>\n");
    html.push_str(&render_footer(FOOTER));
    html.push_str(&shell.render_closing());
    html
}
