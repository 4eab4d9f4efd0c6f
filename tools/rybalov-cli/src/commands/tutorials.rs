//! List tutorials for a kind filter.

use anyhow::Result;
use rybalov_commerce::learn::tutorials;

use super::TutorialsArgs;
use crate::context::Context;
use crate::output::difficulty_badge;

/// Run the tutorials command.
pub async fn run(args: TutorialsArgs, ctx: &Context) -> Result<()> {
    let selected = args.kind.apply(tutorials());

    if ctx.output.is_json() {
        ctx.output.json(&selected);
        return Ok(());
    }

    ctx.output
        .header(&format!("Обучение рыбалке: {}", args.kind.label()));
    for tutorial in selected {
        ctx.output.list_item(&format!(
            "{} [{} · {}] {}",
            tutorial.title,
            tutorial.kind.as_str(),
            tutorial.kind.length_label(),
            difficulty_badge(tutorial.difficulty)
        ));
        ctx.output.debug(tutorial.description);
    }

    Ok(())
}
