use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAnchorElement};

use folioboard_shared::session::EXPORT_FILE_NAME;
use folioboard_shared::DrawingSession;

use crate::dom::create_element;
use crate::drawing::Surface;
use crate::render::redraw;

/// Downloads the canvas as a PNG. The selection frame is left out of the
/// image and put back afterwards.
pub fn export_png(
    document: &Document,
    surface: &Surface,
    session: &DrawingSession,
) -> Result<(), JsValue> {
    redraw(&surface.ctx, session.engine(), false);
    let url = surface.canvas.to_data_url();
    redraw(&surface.ctx, session.engine(), true);
    let url = url?;

    let anchor: HtmlAnchorElement = create_element(document, "a", "")?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();
    log::info!(
        "exported {} objects as {EXPORT_FILE_NAME}",
        session.engine().len()
    );
    Ok(())
}
