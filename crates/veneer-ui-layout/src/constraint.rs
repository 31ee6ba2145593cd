//! Layout constraint passed into every component layout call.

use veneer_ui_graphics::Size;

/// Upper bounds for a layout pass. Either axis may be unbounded
/// (`f32::INFINITY`). Immutable, passed by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    pub max_size: Size,
}

impl Constraint {
    pub const UNBOUNDED: Constraint = Constraint {
        max_size: Size {
            width: f32::INFINITY,
            height: f32::INFINITY,
        },
    };

    pub fn new(max_size: Size) -> Self {
        Self { max_size }
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_size.width.is_finite()
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max_size.height.is_finite()
    }

    /// Clamps the provided size to fit within the constraint.
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max_size.width),
            size.height.min(self.max_size.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constrain_clamps_to_max() {
        let constraint = Constraint::new(Size::new(100.0, 50.0));
        assert_eq!(
            constraint.constrain(Size::new(200.0, 20.0)),
            Size::new(100.0, 20.0)
        );
    }

    #[test]
    fn test_unbounded_passes_through() {
        let size = Size::new(1e6, 1e6);
        assert_eq!(Constraint::UNBOUNDED.constrain(size), size);
        assert!(!Constraint::UNBOUNDED.has_bounded_width());
        assert!(!Constraint::UNBOUNDED.has_bounded_height());
    }
}
