use anyhow::Error;
use ratatui::layout::Rect;

/// Rectangle for the single-line entry prompt: three rows tall (one content
/// row inside its border), horizontally centered, clipped to the frame.
pub(crate) fn overlay_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(46).max(1);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let height = 3.min(area.height);
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_rect_stays_inside_the_frame() {
        for (width, height) in [(80u16, 24u16), (20, 6), (9, 3)] {
            let area = Rect::new(0, 0, width, height);
            let rect = overlay_rect(area);
            assert!(rect.right() <= area.right());
            assert!(rect.bottom() <= area.bottom());
            assert!(rect.width >= 1);
        }
    }
}
