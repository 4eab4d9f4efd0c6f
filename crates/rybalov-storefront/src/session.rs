//! Storefront session state and the event handler.

use rybalov_commerce::cart::{Cart, CartChange};
use rybalov_commerce::catalog;
use rybalov_commerce::learn::{tutorials, Tutorial, TutorialFilter};
use rybalov_observability::{SessionId, StructuredLogger};
use serde::Serialize;

use crate::event::Event;
use crate::section::Section;

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Navigated { from: Section, to: Section },
    TabSelected { tab: TutorialFilter },
    Cart { change: CartChange },
    CartVisibility { open: bool },
    /// The event has no behavior behind it.
    Unsupported { event: &'static str },
}

impl Outcome {
    /// Short description used in logs and CLI output.
    pub fn describe(&self) -> String {
        match self {
            Outcome::Navigated { from, to } => format!("section {} -> {}", from, to),
            Outcome::TabSelected { tab } => format!("tab {}", tab),
            Outcome::Cart {
                change: CartChange::Inserted { id },
            } => format!("product {} added", id),
            Outcome::Cart {
                change: CartChange::Updated { id, quantity },
            } => format!("product {} quantity {}", id, quantity),
            Outcome::Cart {
                change: CartChange::Removed { id },
            } => format!("product {} removed", id),
            Outcome::Cart {
                change: CartChange::Unchanged,
            } => "cart unchanged".to_string(),
            Outcome::CartVisibility { open: true } => "cart opened".to_string(),
            Outcome::CartVisibility { open: false } => "cart closed".to_string(),
            Outcome::Unsupported { event } => format!("{} is not supported", event),
        }
    }
}

/// One user's storefront session.
///
/// Holds the view state (active section, tutorial tab, cart sheet) and the
/// cart. All changes go through [`Storefront::handle`].
#[derive(Debug, Clone)]
pub struct Storefront {
    active: Section,
    tab: TutorialFilter,
    cart_open: bool,
    cart: Cart,
    logger: StructuredLogger,
}

impl Storefront {
    /// Start a session on the home section with an empty cart.
    pub fn new(logger: StructuredLogger) -> Self {
        logger.info("session started");
        Self {
            active: Section::default(),
            tab: TutorialFilter::default(),
            cart_open: false,
            cart: Cart::new(),
            logger,
        }
    }

    /// Start with a different initial section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.active = section;
        self
    }

    /// Start with a different initial tutorial tab.
    pub fn with_tab(mut self, tab: TutorialFilter) -> Self {
        self.tab = tab;
        self
    }

    /// Handle one event and return what it did.
    pub fn handle(&mut self, event: Event) -> Outcome {
        let outcome = match event {
            Event::Navigate(to) => {
                let from = std::mem::replace(&mut self.active, to);
                Outcome::Navigated { from, to }
            }
            Event::SelectTutorialTab(tab) => {
                self.tab = tab;
                Outcome::TabSelected { tab }
            }
            Event::AddToCart(id) => {
                let change = match catalog::find(id) {
                    Some(product) => self.cart.add(*product),
                    None => CartChange::Unchanged,
                };
                Outcome::Cart { change }
            }
            Event::RemoveFromCart(id) => Outcome::Cart {
                change: self.cart.remove(id),
            },
            Event::ChangeQuantity { id, delta } => Outcome::Cart {
                change: self.cart.change_quantity(id, delta),
            },
            Event::OpenCart => {
                self.cart_open = true;
                Outcome::CartVisibility { open: true }
            }
            Event::CloseCart => {
                self.cart_open = false;
                Outcome::CartVisibility { open: false }
            }
            Event::Checkout => {
                self.logger
                    .warn_builder("checkout requested but not available")
                    .field_u64("total_items", self.cart.total_items())
                    .field_i64("total_price", self.cart.total_price().amount)
                    .emit();
                Outcome::Unsupported { event: "checkout" }
            }
        };

        self.logger
            .debug_builder("event handled")
            .field("event", event.to_string())
            .field("outcome", outcome.describe())
            .field("section", self.active.slug())
            .field_u64("total_items", self.cart.total_items())
            .field_i64("total_price", self.cart.total_price().amount)
            .emit();

        outcome
    }

    /// Handle events in order, returning each outcome.
    pub fn handle_all<I>(&mut self, events: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = Event>,
    {
        events.into_iter().map(|e| self.handle(e)).collect()
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn tutorial_tab(&self) -> TutorialFilter {
        self.tab
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn session_id(&self) -> &SessionId {
        self.logger.session_id()
    }

    /// Tutorials shown under the current tab.
    pub fn visible_tutorials(&self) -> Vec<&'static Tutorial> {
        self.tab.apply(tutorials())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rybalov_commerce::{Money, ProductId};
    use rybalov_observability::LogLevel;

    fn storefront() -> Storefront {
        let (logger, _) = StructuredLogger::capturing(SessionId::from_string("test"));
        Storefront::new(logger)
    }

    #[test]
    fn test_new_session_defaults() {
        let store = storefront();
        assert_eq!(store.active_section(), Section::Home);
        assert_eq!(store.tutorial_tab(), TutorialFilter::All);
        assert!(!store.is_cart_open());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_navigation_leaves_cart_alone() {
        let mut store = storefront();
        store.handle(Event::AddToCart(ProductId::new(4)));
        let cart_before = store.cart().clone();

        let outcome = store.handle(Event::Navigate(Section::Techniques));
        assert_eq!(
            outcome,
            Outcome::Navigated {
                from: Section::Home,
                to: Section::Techniques
            }
        );
        assert_eq!(store.cart(), &cart_before);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let mut store = storefront();
        let outcome = store.handle(Event::AddToCart(ProductId::new(404)));
        assert_eq!(
            outcome,
            Outcome::Cart {
                change: CartChange::Unchanged
            }
        );
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_cart_events() {
        let mut store = storefront();
        let id = ProductId::new(1);
        store.handle_all([
            Event::AddToCart(id),
            Event::AddToCart(id),
            Event::AddToCart(ProductId::new(2)),
            Event::ChangeQuantity {
                id: ProductId::new(2),
                delta: -1,
            },
        ]);

        assert_eq!(store.cart().quantity_of(id), 2);
        assert_eq!(store.cart().total_items(), 2);
        assert_eq!(store.cart().total_price(), Money::rub(9000));

        store.handle(Event::RemoveFromCart(id));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_tab_selection_filters_tutorials() {
        let mut store = storefront();
        store.handle(Event::SelectTutorialTab(TutorialFilter::Article));
        let ids: Vec<_> = store.visible_tutorials().iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![2, 4, 6]);
    }

    #[test]
    fn test_checkout_is_unsupported_and_logged() {
        let (logger, buffer) = StructuredLogger::capturing(SessionId::from_string("co"));
        let mut store = Storefront::new(logger);
        store.handle(Event::AddToCart(ProductId::new(3)));
        let cart_before = store.cart().clone();

        let outcome = store.handle(Event::Checkout);
        assert_eq!(outcome, Outcome::Unsupported { event: "checkout" });
        assert_eq!(store.cart(), &cart_before);

        let entries = buffer.borrow();
        let warning = entries
            .iter()
            .find(|e| e.level == LogLevel::Warn)
            .expect("checkout warning");
        assert_eq!(warning.field("total_price"), Some(&serde_json::json!(890)));
    }

    #[test]
    fn test_every_event_logged() {
        let (logger, buffer) = StructuredLogger::capturing(SessionId::from_string("log"));
        let mut store = Storefront::new(logger);
        store.handle_all([Event::OpenCart, Event::CloseCart]);

        let handled: Vec<_> = buffer
            .borrow()
            .iter()
            .filter(|e| e.message == "event handled")
            .map(|e| e.field("event").cloned())
            .collect();
        assert_eq!(
            handled,
            vec![
                Some(serde_json::json!("open")),
                Some(serde_json::json!("close"))
            ]
        );
        assert_eq!(store.session_id().as_str(), "log");
    }
}
