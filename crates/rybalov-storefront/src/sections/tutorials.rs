//! Tutorials block: heading, kind tabs and cards for the selected tab.

use rybalov_commerce::learn::{Tutorial, TutorialFilter, TutorialKind};

use super::html_escape;
use crate::content::{TUTORIALS_HEADING, TUTORIALS_SUBHEADING};

/// Render the tutorials section for the selected tab.
pub fn render_tutorials(tab: TutorialFilter, tutorials: &[Tutorial]) -> String {
    let tabs: String = TutorialFilter::ALL
        .iter()
        .map(|filter| {
            let selected = *filter == tab;
            format!(
                r#"<button type="button" role="tab" class="tab{}" data-action="tab" data-target="{}" aria-selected="{}">{}</button>"#,
                if selected { " tab--active" } else { "" },
                filter.as_str(),
                selected,
                html_escape(filter.label())
            )
        })
        .collect();

    let cards: String = tab
        .apply(tutorials)
        .into_iter()
        .map(render_tutorial_card)
        .collect();

    format!(
        r#"<section class="tutorials" data-section="tutorials" data-tab="{tab}">
    <h3 class="section-title">{heading}</h3>
    <p class="section-subtitle">{subheading}</p>
    <div class="tabs" role="tablist">{tabs}</div>
    <div class="tutorial-grid">
        {cards}
    </div>
</section>
"#,
        tab = tab.as_str(),
        heading = html_escape(TUTORIALS_HEADING),
        subheading = html_escape(TUTORIALS_SUBHEADING),
        tabs = tabs,
        cards = cards
    )
}

fn render_tutorial_card(tutorial: &Tutorial) -> String {
    let (badge_variant, kind_icon, action_icon, action) = match tutorial.kind {
        TutorialKind::Video { .. } => ("default", "Video", "Play", "Смотреть"),
        TutorialKind::Article { .. } => ("secondary", "BookOpen", "FileText", "Читать"),
    };

    format!(
        r#"<article class="tutorial-card" data-tutorial-id="{id}" data-kind="{kind}">
            <div class="tutorial-badges">
                <span class="badge badge--{variant}"><span class="icon" data-icon="{kind_icon}"></span>{length}</span>
                <span class="badge badge--outline">{difficulty}</span>
            </div>
            <h4 class="tutorial-title">{title}</h4>
            <p class="tutorial-description">{description}</p>
            <button type="button" class="btn btn--outline"><span class="icon" data-icon="{action_icon}"></span>{action}</button>
        </article>
        "#,
        id = tutorial.id,
        kind = tutorial.kind.as_str(),
        variant = badge_variant,
        kind_icon = kind_icon,
        length = html_escape(tutorial.kind.length_label()),
        difficulty = html_escape(tutorial.difficulty.label()),
        title = html_escape(tutorial.title),
        description = html_escape(tutorial.description),
        action_icon = action_icon,
        action = action
    )
}
