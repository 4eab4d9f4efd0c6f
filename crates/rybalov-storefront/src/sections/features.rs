//! "Why us" features section.

use super::html_escape;
use crate::content::{Feature, FEATURES_HEADING};

/// Render the features section.
pub fn render_features(features: &[Feature]) -> String {
    let cards: String = features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature-card">
            <span class="icon" data-icon="{}"></span>
            <h4 class="feature-title">{}</h4>
            <p class="feature-description">{}</p>
        </div>"#,
                html_escape(f.icon),
                html_escape(f.title),
                html_escape(f.text)
            )
        })
        .collect();

    format!(
        r#"<section class="features" data-section="features">
    <h3 class="section-title">{}</h3>
    <div class="features-grid">
        {}
    </div>
</section>
"#,
        html_escape(FEATURES_HEADING),
        cards
    )
}
