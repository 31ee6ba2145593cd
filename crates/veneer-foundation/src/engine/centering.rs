//! Content-view frame maintenance for zoomable hosts.

use veneer_ui_graphics::{Rect, Size};

/// Computes the nested content view's frame for the given content size.
///
/// On an axis with centering enabled, content smaller than the host bounds is
/// centered; otherwise the content view sits at the origin.
pub(crate) fn content_view_frame(
    content_size: Size,
    host_size: Size,
    center_horizontally: bool,
    center_vertically: bool,
) -> Rect {
    let x = if center_horizontally && content_size.width < host_size.width {
        (host_size.width - content_size.width) / 2.0
    } else {
        0.0
    };
    let y = if center_vertically && content_size.height < host_size.height {
        (host_size.height - content_size.height) / 2.0
    } else {
        0.0
    };
    Rect::new(x, y, content_size.width, content_size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_smaller_content() {
        let frame = content_view_frame(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            true,
            true,
        );
        assert_eq!(frame, Rect::new(100.0, 100.0, 100.0, 100.0));
    }

    #[test]
    fn test_larger_content_sits_at_origin() {
        let frame = content_view_frame(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            true,
            true,
        );
        assert_eq!(frame, Rect::new(0.0, 0.0, 600.0, 600.0));
    }

    #[test]
    fn test_centering_is_per_axis() {
        let frame = content_view_frame(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            true,
            false,
        );
        assert_eq!(frame, Rect::new(100.0, 0.0, 100.0, 100.0));
    }
}
