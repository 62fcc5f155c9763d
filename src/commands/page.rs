//! Implementation of the `page` command.
//!
//! Renders the success layout with the configured labels, a random message
//! and the current local time.

use super::Settings;
use crate::error::Result;
use crate::page::success_substitutions;
use crate::response::ResponseEmitter;
use crate::template::{RandomSelector, Template, ValueSelector};
use chrono::{Local, NaiveDateTime};
use std::io::Write;

/// Execute the `page` command.
pub fn cmd_page<W: Write>(settings: &Settings, emitter: &mut ResponseEmitter<W>) -> Result<()> {
    let mut selector = RandomSelector::new();
    render_page(
        settings,
        &mut selector,
        Local::now().naive_local(),
        emitter,
    )
}

/// Load, fill and emit the layout.
///
/// The layout is fully rendered before the header is written, so a load
/// failure leaves the response stream untouched.
pub fn render_page<W: Write>(
    settings: &Settings,
    selector: &mut dyn ValueSelector,
    now: NaiveDateTime,
    emitter: &mut ResponseEmitter<W>,
) -> Result<()> {
    let template = Template::load(&settings.context.layout_path)?;
    let substitutions = success_substitutions(&settings.config.page, selector, now)?;
    let html = template.render(&substitutions);

    log::info!(
        "rendered {} ({} placeholders, {} bytes)",
        settings.context.layout_path.display(),
        substitutions.len(),
        html.len()
    );

    emitter.write_header(&settings.config.content_type)?;
    emitter.write_body(&html)?;
    Ok(())
}
