//! The RybaLov storefront page.
//!
//! - `Storefront` - one session's view state and cart, driven by `Event`s
//! - `Section` - the navigation tabs
//! - `render_page` - shell plus header, cart sheet, content and footer
//!
//! Everything here is synchronous: each event produces the next state
//! before the following one is handled.

pub mod content;
mod error;
mod event;
mod render;
pub mod sections;
mod section;
mod session;
mod shell;

pub use error::StorefrontError;
pub use event::{parse_script, Event};
pub use render::{render_content, render_page, RenderOptions};
pub use section::Section;
pub use session::{Outcome, Storefront};
pub use shell::{HeadContent, Shell};
