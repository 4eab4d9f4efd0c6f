//! Render the storefront page to HTML.

use anyhow::{Context as _, Result};
use rybalov_storefront::{render_page, Event, Storefront};

use super::{load_script, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    if let Some(ref script) = args.script {
        let events = load_script(&ctx.resolve_path(script))?;
        ctx.output
            .debug(&format!("Applying {} event(s) from {}", events.len(), script));
        store.handle_all(events);
    }

    apply_overrides(&mut store, &args);

    let html = render_page(&store, &ctx.config.render_options());
    tracing::debug!(
        bytes = html.len(),
        section = store.active_section().slug(),
        "page rendered"
    );

    let target = args.output.as_ref().or(ctx.config.render.output.as_ref());
    match target {
        Some(path) => {
            let path = ctx.resolve_path(path);
            tokio::fs::write(&path, &html)
                .await
                .with_context(|| format!("Failed to write page: {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "output": path.display().to_string(),
                    "bytes": html.len(),
                    "section": store.active_section().slug(),
                    "total_items": store.cart().total_items(),
                }));
            } else {
                ctx.output.success(&format!("Wrote {}", path.display()));
                ctx.output.kv("Section", store.active_section().label());
                ctx.output
                    .kv("Items in cart", &store.cart().total_items().to_string());
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}

/// Command-line flags win over whatever the script left behind.
fn apply_overrides(store: &mut Storefront, args: &RenderArgs) {
    if let Some(section) = args.section {
        store.handle(Event::Navigate(section));
    }
    if let Some(tab) = args.tab {
        store.handle(Event::SelectTutorialTab(tab));
    }
    if args.open_cart {
        store.handle(Event::OpenCart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rybalov_commerce::learn::TutorialFilter;
    use rybalov_observability::{SessionId, StructuredLogger};
    use rybalov_storefront::Section;

    fn args() -> RenderArgs {
        RenderArgs {
            section: None,
            tab: None,
            open_cart: false,
            script: None,
            output: None,
        }
    }

    fn storefront() -> Storefront {
        let (logger, _) = StructuredLogger::capturing(SessionId::from_string("render-cmd"));
        Storefront::new(logger)
    }

    #[test]
    fn test_no_flags_leave_state_alone() {
        let mut store = storefront();
        store.handle(Event::Navigate(Section::Waters));
        apply_overrides(&mut store, &args());
        assert_eq!(store.active_section(), Section::Waters);
        assert!(!store.is_cart_open());
    }

    #[test]
    fn test_flags_override_script_state() {
        let mut store = storefront();
        store.handle(Event::Navigate(Section::Waters));

        let args = RenderArgs {
            section: Some(Section::Techniques),
            tab: Some(TutorialFilter::Video),
            open_cart: true,
            ..args()
        };
        apply_overrides(&mut store, &args);

        assert_eq!(store.active_section(), Section::Techniques);
        assert_eq!(store.tutorial_tab(), TutorialFilter::Video);
        assert!(store.is_cart_open());
    }
}
