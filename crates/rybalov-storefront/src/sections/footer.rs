//! Site footer.

use super::html_escape;

pub fn render_footer(text: &str) -> String {
    format!(
        r#"<footer class="site-footer" data-section="footer">
    <p>{}</p>
</footer>
"#,
        html_escape(text)
    )
}
