//! Section renderers. Each returns one self-contained HTML fragment tagged
//! with `data-section`.

mod cart_sheet;
mod features;
mod footer;
mod header;
mod hero;
mod products;
mod tutorials;

pub use cart_sheet::*;
pub use features::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use products::*;
pub use tutorials::*;

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }
}
