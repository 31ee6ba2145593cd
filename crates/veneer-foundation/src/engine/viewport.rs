//! Viewport computation for the visible-items query.

use veneer_ui_graphics::{EdgeInsets, Rect};

/// Computes the rectangle, in content coordinates, relevant for visibility.
///
/// With a nested content view (zoom support) the host bounds are converted
/// into the content view's coordinate space: translated by the content view's
/// origin and divided by the zoom scale. The result is then inset by the
/// configured viewport insets — negative insets grow the rect, which is how a
/// prefetch margin is expressed.
pub(crate) fn visible_rect(
    bounds: Rect,
    content_view_frame: Option<Rect>,
    zoom_scale: f32,
    insets: EdgeInsets,
) -> Rect {
    let base = match content_view_frame {
        Some(frame) => Rect::new(
            (bounds.x - frame.x) / zoom_scale,
            (bounds.y - frame.y) / zoom_scale,
            bounds.width / zoom_scale,
            bounds.height / zoom_scale,
        ),
        None => bounds,
    };
    base.inset_by(insets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_bounds_pass_through() {
        let bounds = Rect::new(0.0, 120.0, 300.0, 600.0);
        assert_eq!(
            visible_rect(bounds, None, 1.0, EdgeInsets::default()),
            bounds
        );
    }

    #[test]
    fn test_prefetch_margin_grows_viewport() {
        let bounds = Rect::new(0.0, 100.0, 300.0, 600.0);
        let grown = visible_rect(bounds, None, 1.0, EdgeInsets::symmetric(0.0, -100.0));
        assert_eq!(grown, Rect::new(0.0, 0.0, 300.0, 800.0));
    }

    #[test]
    fn test_zoomed_content_view_conversion() {
        // Host scrolled to (100, 50), content view at origin, zoomed 2x:
        // the visible content rect is half the bounds at half the offset.
        let bounds = Rect::new(100.0, 50.0, 300.0, 600.0);
        let content = Rect::new(0.0, 0.0, 800.0, 1600.0);
        let converted = visible_rect(bounds, Some(content), 2.0, EdgeInsets::default());
        assert_eq!(converted, Rect::new(50.0, 25.0, 150.0, 300.0));
    }

    #[test]
    fn test_centered_content_view_offsets_viewport() {
        // Content view centered at x = 50 shifts the visible rect left.
        let bounds = Rect::new(0.0, 0.0, 300.0, 600.0);
        let content = Rect::new(50.0, 0.0, 200.0, 600.0);
        let converted = visible_rect(bounds, Some(content), 1.0, EdgeInsets::default());
        assert_eq!(converted, Rect::new(-50.0, 0.0, 300.0, 600.0));
    }
}
