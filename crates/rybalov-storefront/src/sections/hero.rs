//! Hero banner.

use super::html_escape;
use crate::content::HeroContent;

/// Render the hero banner section.
pub fn render_hero(content: &HeroContent) -> String {
    let emblems: String = content
        .emblems
        .iter()
        .map(|e| format!("<span>{}</span>", html_escape(e)))
        .collect();

    format!(
        r#"<section class="hero" data-section="hero">
    <div class="hero-content">
        <h2 class="hero-headline">{}</h2>
        <p class="hero-subheadline">{}</p>
        <div class="hero-emblems">{}</div>
    </div>
</section>
"#,
        html_escape(content.headline),
        html_escape(content.subheadline),
        emblems
    )
}
