//! Apply an event script to a fresh session and summarize the result.

use anyhow::{Context as _, Result};
use rybalov_commerce::cart::CartTotals;
use rybalov_storefront::{render_page, Outcome, Storefront};
use serde::Serialize;

use super::{load_script, ReplayArgs};
use crate::context::Context;
use crate::output::{format_row, price};

/// Machine-readable replay result.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub session_id: String,
    pub events: usize,
    pub section: &'static str,
    pub tab: &'static str,
    pub cart_open: bool,
    pub totals: CartTotals,
    pub outcomes: Vec<Outcome>,
}

impl ReplayReport {
    fn new(store: &Storefront, outcomes: Vec<Outcome>) -> Self {
        Self {
            session_id: store.session_id().to_string(),
            events: outcomes.len(),
            section: store.active_section().slug(),
            tab: store.tutorial_tab().as_str(),
            cart_open: store.is_cart_open(),
            totals: store.cart().totals(),
            outcomes,
        }
    }
}

/// Run the replay command.
pub async fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let events = load_script(&path)?;

    let mut store = ctx.storefront()?;
    let mut outcomes = Vec::with_capacity(events.len());
    for event in events {
        let line = event.to_string();
        let outcome = store.handle(event);
        ctx.output
            .debug(&format!("{:<16} {}", line, outcome.describe()));
        outcomes.push(outcome);
    }

    if let Some(ref target) = args.render {
        let target = ctx.resolve_path(target);
        let html = render_page(&store, &ctx.config.render_options());
        tokio::fs::write(&target, html)
            .await
            .with_context(|| format!("Failed to write page: {}", target.display()))?;
        ctx.output.success(&format!("Wrote {}", target.display()));
    }

    let report = ReplayReport::new(&store, outcomes);

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    print_summary(&store, &report, ctx);
    Ok(())
}

fn print_summary(store: &Storefront, report: &ReplayReport, ctx: &Context) {
    ctx.output
        .header(&format!("Replayed {} event(s)", report.events));
    ctx.output.kv("Session", &report.session_id);
    ctx.output.kv("Section", store.active_section().label());
    ctx.output.kv("Tab", store.tutorial_tab().label());
    ctx.output
        .kv("Cart", if report.cart_open { "open" } else { "closed" });

    if store.cart().is_empty() {
        ctx.output.info("Корзина пуста");
        return;
    }

    let widths = [26, 6, 10];
    for line in store.cart().lines() {
        let qty = format!("×{}", line.quantity);
        let subtotal = line.subtotal().display();
        ctx.output
            .list_item(&format_row(&[line.product.name, &qty, &subtotal], &widths));
    }
    ctx.output
        .kv("Товаров", &report.totals.total_items.to_string());
    ctx.output.kv("Итого", &price(report.totals.total_price));
}
