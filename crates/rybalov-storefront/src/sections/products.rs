//! Popular products grid.

use rybalov_commerce::catalog::Product;

use super::html_escape;
use crate::content::{ADD_TO_CART, PRODUCTS_HEADING};

/// Render the products grid.
pub fn render_products(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="products" data-section="products">
    <h3 class="section-title">{}</h3>
    <div class="product-grid">
        {}
    </div>
</section>
"#,
        html_escape(PRODUCTS_HEADING),
        cards
    )
}

fn render_product_card(product: &Product) -> String {
    let media = if product.has_image() {
        format!(
            r#"<img src="{}" alt="{}">"#,
            html_escape(product.image),
            html_escape(product.name)
        )
    } else {
        r#"<span class="icon" data-icon="Fish"></span>"#.to_string()
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
            <div class="product-media">{media}</div>
            <div class="product-info">
                <span class="badge badge--secondary">{category}</span>
                <h4 class="product-name">{name}</h4>
                <p class="price">{price}</p>
            </div>
            <button type="button" class="btn" data-action="add" data-product-id="{id}">
                <span class="icon" data-icon="ShoppingCart"></span>{add}
            </button>
        </article>
        "#,
        id = product.id,
        media = media,
        category = html_escape(product.category),
        name = html_escape(product.name),
        price = html_escape(&product.price.display()),
        add = html_escape(ADD_TO_CART)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rybalov_commerce::catalog;

    #[test]
    fn test_one_card_per_product() {
        let html = render_products(catalog::products());
        assert_eq!(html.matches("class=\"product-card\"").count(), 6);
        assert_eq!(html.matches("В корзину").count(), 6);
        assert!(html.contains("<p class=\"price\">4500 \u{20bd}</p>"));
        assert!(html.contains(r#"data-action="add" data-product-id="6""#));
    }

    #[test]
    fn test_placeholder_without_image() {
        let html = render_products(&catalog::products()[..1]);
        assert!(html.contains(r#"data-icon="Fish""#));
        assert!(!html.contains("<img"));
    }
}
