//! Site header: brand, navigation and the cart button.

use super::html_escape;
use crate::content::BRAND;
use crate::section::Section;

/// Render the header. The cart badge only appears when `total_items > 0`.
pub fn render_header(active: Section, total_items: u64) -> String {
    let nav_html: String = Section::ALL
        .iter()
        .map(|section| {
            let (class, current) = if *section == active {
                ("nav-link nav-link--active", r#" aria-current="page""#)
            } else {
                ("nav-link", "")
            };
            format!(
                r#"<button type="button" class="{}" data-action="nav" data-target="{}"{}>{}</button>"#,
                class,
                section.slug(),
                current,
                html_escape(section.label())
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let badge = if total_items > 0 {
        format!(r#"<span class="cart-badge">{}</span>"#, total_items)
    } else {
        String::new()
    };

    format!(
        r#"<header class="site-header" data-section="header">
    <div class="brand">
        <span class="icon" data-icon="Fish"></span>
        <h1>{brand}</h1>
    </div>
    <nav class="site-nav">
            {nav}
    </nav>
    <button type="button" class="cart-button" data-action="open-cart" aria-label="Корзина">
        <span class="icon" data-icon="ShoppingCart"></span>{badge}
    </button>
</header>
"#,
        brand = html_escape(BRAND),
        nav = nav_html,
        badge = badge
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_hidden_when_empty() {
        let html = render_header(Section::Home, 0);
        assert!(!html.contains("cart-badge"));
    }

    #[test]
    fn test_badge_shows_total_items() {
        let html = render_header(Section::Home, 5);
        assert!(html.contains(r#"<span class="cart-badge">5</span>"#));
    }

    #[test]
    fn test_active_section_marked() {
        let html = render_header(Section::Techniques, 0);
        assert_eq!(html.matches("aria-current").count(), 1);
        assert!(html.contains(
            r#"class="nav-link nav-link--active" data-action="nav" data-target="techniques" aria-current="page">Техники"#
        ));
        for section in Section::ALL {
            assert!(html.contains(section.label()));
        }
    }
}
