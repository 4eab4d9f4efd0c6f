//! Interactive shopping session.

use anyhow::Result;
use dialoguer::{Confirm, Select};
use rybalov_commerce::catalog;
use rybalov_commerce::learn::TutorialFilter;
use rybalov_storefront::{Event, Section, Storefront};

use super::ShopArgs;
use crate::context::Context;
use crate::output::price;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Navigate,
    SelectTab,
    AddProduct,
    Increase,
    Decrease,
    Remove,
    ToggleCart,
    Checkout,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::Navigate => "Перейти в раздел",
            MenuAction::SelectTab => "Выбрать вкладку обучения",
            MenuAction::AddProduct => "Добавить товар",
            MenuAction::Increase => "Увеличить количество",
            MenuAction::Decrease => "Уменьшить количество",
            MenuAction::Remove => "Удалить из корзины",
            MenuAction::ToggleCart => "Открыть/закрыть корзину",
            MenuAction::Checkout => "Оформить заказ",
            MenuAction::Quit => "Выйти",
        }
    }
}

/// Actions offered for the current state; line edits only when the cart has lines.
fn available_actions(store: &Storefront) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::Navigate];
    if store.active_section().shows_tutorials() {
        actions.push(MenuAction::SelectTab);
    }
    actions.push(MenuAction::AddProduct);
    if !store.cart().is_empty() {
        actions.extend([MenuAction::Increase, MenuAction::Decrease, MenuAction::Remove]);
    }
    actions.extend([MenuAction::ToggleCart, MenuAction::Checkout, MenuAction::Quit]);
    actions
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    if args.open_cart {
        store.handle(Event::OpenCart);
    }

    ctx.output.header(&ctx.config.store.title);
    ctx.output.kv("Session", store.session_id().as_str());

    loop {
        print_status(&store, ctx);

        let actions = available_actions(&store);
        let labels: Vec<&str> = actions.iter().map(MenuAction::label).collect();
        let choice = Select::new()
            .with_prompt("Что сделать?")
            .items(&labels)
            .default(0)
            .interact()?;

        let event = match actions[choice] {
            MenuAction::Quit => {
                if store.cart().is_empty()
                    || Confirm::new()
                        .with_prompt("В корзине остались товары. Выйти?")
                        .default(false)
                        .interact()?
                {
                    break;
                }
                continue;
            }
            MenuAction::Navigate => {
                let labels: Vec<&str> = Section::ALL.iter().map(|s| s.label()).collect();
                let current = Section::ALL
                    .iter()
                    .position(|s| *s == store.active_section())
                    .unwrap_or(0);
                let idx = Select::new()
                    .with_prompt("Раздел")
                    .items(&labels)
                    .default(current)
                    .interact()?;
                Event::Navigate(Section::ALL[idx])
            }
            MenuAction::SelectTab => {
                let labels: Vec<&str> = TutorialFilter::ALL.iter().map(|f| f.label()).collect();
                let idx = Select::new()
                    .with_prompt("Вкладка")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                Event::SelectTutorialTab(TutorialFilter::ALL[idx])
            }
            MenuAction::AddProduct => {
                let products = catalog::products();
                let labels: Vec<String> = products
                    .iter()
                    .map(|p| format!("{} · {}", p.name, p.price))
                    .collect();
                let idx = Select::new()
                    .with_prompt("Товар")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                Event::AddToCart(products[idx].id)
            }
            action @ (MenuAction::Increase | MenuAction::Decrease | MenuAction::Remove) => {
                let lines = store.cart().lines();
                let labels: Vec<String> = lines
                    .iter()
                    .map(|l| format!("{} ×{}", l.product.name, l.quantity))
                    .collect();
                let idx = Select::new()
                    .with_prompt("Позиция")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let id = lines[idx].product.id;
                match action {
                    MenuAction::Increase => Event::ChangeQuantity { id, delta: 1 },
                    MenuAction::Decrease => Event::ChangeQuantity { id, delta: -1 },
                    _ => Event::RemoveFromCart(id),
                }
            }
            MenuAction::ToggleCart if store.is_cart_open() => Event::CloseCart,
            MenuAction::ToggleCart => Event::OpenCart,
            MenuAction::Checkout => Event::Checkout,
        };

        let outcome = store.handle(event);
        ctx.output.success(&outcome.describe());
    }

    ctx.output.info("До встречи на рыбалке!");
    Ok(())
}

fn print_status(store: &Storefront, ctx: &Context) {
    ctx.output.info("");
    ctx.output.kv("Раздел", store.active_section().label());
    if store.active_section().shows_tutorials() {
        let shown = store.visible_tutorials().len();
        ctx.output.kv(
            "Обучение",
            &format!("{} ({})", store.tutorial_tab().label(), shown),
        );
    }

    let cart = store.cart();
    ctx.output.kv(
        "Корзина",
        &format!("{} шт · {}", cart.total_items(), price(cart.total_price())),
    );
    if store.is_cart_open() {
        for line in cart.lines() {
            ctx.output.list_item(&format!(
                "{} ×{} = {}",
                line.product.name,
                line.quantity,
                line.subtotal()
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rybalov_commerce::ProductId;
    use rybalov_observability::{SessionId, StructuredLogger};

    fn storefront() -> Storefront {
        let (logger, _) = StructuredLogger::capturing(SessionId::from_string("shop"));
        Storefront::new(logger)
    }

    #[test]
    fn test_empty_cart_hides_line_actions() {
        let actions = available_actions(&storefront());
        assert!(!actions.contains(&MenuAction::Increase));
        assert!(!actions.contains(&MenuAction::Remove));
        assert!(!actions.contains(&MenuAction::SelectTab));
        assert_eq!(actions.last(), Some(&MenuAction::Quit));
    }

    #[test]
    fn test_line_actions_after_add() {
        let mut store = storefront();
        store.handle(Event::AddToCart(ProductId::new(3)));
        let actions = available_actions(&store);
        assert!(actions.contains(&MenuAction::Increase));
        assert!(actions.contains(&MenuAction::Decrease));
        assert!(actions.contains(&MenuAction::Remove));
    }

    #[test]
    fn test_tab_action_only_on_techniques() {
        let mut store = storefront();
        store.handle(Event::Navigate(Section::Techniques));
        assert!(available_actions(&store).contains(&MenuAction::SelectTab));
    }
}
