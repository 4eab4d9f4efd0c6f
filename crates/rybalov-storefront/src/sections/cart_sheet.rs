//! Cart sheet: lines with quantity controls, total and checkout.

use rybalov_commerce::cart::{Cart, CartLine};

use super::html_escape;
use crate::content::{CART_EMPTY, CART_TITLE, CART_TOTAL, CHECKOUT};

/// Render the cart sheet.
pub fn render_cart_sheet(cart: &Cart) -> String {
    let body = if cart.is_empty() {
        format!(
            r#"<div class="cart-empty">
        <span class="icon" data-icon="ShoppingBag"></span>
        <p>{}</p>
    </div>"#,
            html_escape(CART_EMPTY)
        )
    } else {
        let lines: String = cart.lines().iter().map(render_cart_line).collect();
        format!(
            r#"{lines}<div class="cart-summary">
        <span>{label}</span>
        <span class="cart-total">{total}</span>
    </div>
    <button type="button" class="checkout" data-action="checkout">{checkout}</button>"#,
            lines = lines,
            label = html_escape(CART_TOTAL),
            total = html_escape(&cart.total_price().display()),
            checkout = html_escape(CHECKOUT)
        )
    };

    format!(
        r#"<aside class="cart-sheet" data-section="cart">
    <h2>{title}</h2>
    {body}
</aside>
"#,
        title = html_escape(CART_TITLE),
        body = body
    )
}

fn render_cart_line(line: &CartLine) -> String {
    let id = line.product.id;
    format!(
        r#"<div class="cart-line" data-product-id="{id}">
        <div class="cart-line-info">
            <h4>{name}</h4>
            <p class="cart-line-price">{price}</p>
        </div>
        <div class="cart-line-controls">
            <button type="button" data-action="dec" data-product-id="{id}" aria-label="Minus">&minus;</button>
            <span class="cart-line-qty">{quantity}</span>
            <button type="button" data-action="inc" data-product-id="{id}" aria-label="Plus">+</button>
            <button type="button" class="destructive" data-action="remove" data-product-id="{id}" aria-label="Trash2"></button>
        </div>
    </div>
    "#,
        id = id,
        name = html_escape(line.product.name),
        price = html_escape(&line.product.price.display()),
        quantity = line.quantity
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rybalov_commerce::catalog;
    use rybalov_commerce::ProductId;

    #[test]
    fn test_empty_cart() {
        let html = render_cart_sheet(&Cart::new());
        assert!(html.contains("Корзина пуста"));
        assert!(!html.contains("data-action=\"checkout\""));
    }

    #[test]
    fn test_cart_lines_and_total() {
        let mut cart = Cart::new();
        let rod = *catalog::find(ProductId::new(1)).unwrap();
        cart.add(rod);
        cart.add(rod);

        let html = render_cart_sheet(&cart);
        assert!(!html.contains("Корзина пуста"));
        assert!(html.contains("Спиннинг Shimano Catana"));
        assert!(html.contains(r#"<span class="cart-line-qty">2</span>"#));
        assert!(html.contains("<span class=\"cart-total\">9000 \u{20bd}</span>"));
        assert!(html.contains("Оформить заказ"));
        assert_eq!(html.matches(r#"data-action="inc""#).count(), 1);
    }
}
