//! Scrollable bounds derived from content and viewport geometry
//!
//! The scroll extent is re-measured at drag start and before every boundary
//! check rather than cached, because the container can resize between drags
//! (on-screen keyboard, rotation).

/// Raw measurements of the scrolled content and its viewport
///
/// Insets are the effective leading/trailing margins and padding of the
/// content. All values are pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentMetrics {
    /// Leading-edge inset (margin + padding)
    pub top_inset: f32,
    /// Trailing-edge inset (margin + padding)
    pub bottom_inset: f32,
    /// Full height of the content
    pub content_height: f32,
    /// Visible height of the container
    pub viewport_height: f32,
}

impl ContentMetrics {
    /// Total distance the content can scroll
    ///
    /// Content shorter than the viewport never scrolls. Non-finite
    /// measurements are treated as zero so a broken style value can never
    /// leak NaN into positions.
    pub fn scroll_extent(&self) -> f32 {
        let m = self.sanitized();
        if m.content_height < m.viewport_height {
            return 0.0;
        }
        (m.content_height - m.viewport_height + m.top_inset + m.bottom_inset).max(0.0)
    }

    /// Replace non-finite measurements with zero
    fn sanitized(&self) -> Self {
        let finite_or_zero = |v: f32, name: &'static str| {
            if v.is_finite() {
                v
            } else {
                tracing::warn!("non-finite {name} measurement, treating as 0");
                0.0
            }
        };
        Self {
            top_inset: finite_or_zero(self.top_inset, "top_inset"),
            bottom_inset: finite_or_zero(self.bottom_inset, "bottom_inset"),
            content_height: finite_or_zero(self.content_height, "content_height"),
            viewport_height: finite_or_zero(self.viewport_height, "viewport_height"),
        }
    }
}

/// Source of content/viewport measurements
///
/// Implemented by the host over whatever layout system it uses; the scroller
/// calls it whenever it needs fresh bounds.
pub trait GeometryProvider: Send + 'static {
    /// Measure the container and its content
    fn measure(&self) -> ContentMetrics;
}

/// Signed overflow of a position past the scrollable range
///
/// Valid resting positions lie in `[-extent, 0]` (closed at both ends):
/// - `pos > 0` returns `Some(pos)` — past the start edge by that much
/// - `pos < -extent` returns `Some(pos + extent)` — past the end edge
///   (negative amount)
/// - otherwise `None`
///
/// Every boundary decision in the scroller funnels through this predicate.
pub fn out_of_bounds(pos: f32, extent: f32) -> Option<f32> {
    if pos > 0.0 {
        Some(pos)
    } else if pos < -extent {
        Some(pos + extent)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_never_scrolls() {
        let metrics = ContentMetrics {
            top_inset: 10.0,
            bottom_inset: 10.0,
            content_height: 300.0,
            viewport_height: 600.0,
        };
        assert_eq!(metrics.scroll_extent(), 0.0);
    }

    #[test]
    fn extent_includes_insets() {
        let metrics = ContentMetrics {
            top_inset: 10.0,
            bottom_inset: 20.0,
            content_height: 1000.0,
            viewport_height: 600.0,
        };
        assert_eq!(metrics.scroll_extent(), 430.0);
    }

    #[test]
    fn extent_is_never_negative() {
        // Negative margins larger than the scrollable range
        let metrics = ContentMetrics {
            top_inset: -500.0,
            bottom_inset: 0.0,
            content_height: 700.0,
            viewport_height: 600.0,
        };
        assert_eq!(metrics.scroll_extent(), 0.0);

        for content in [0.0, 100.0, 599.0, 600.0, 601.0, 5000.0] {
            let metrics = ContentMetrics {
                content_height: content,
                viewport_height: 600.0,
                ..Default::default()
            };
            assert!(metrics.scroll_extent() >= 0.0, "content={content}");
        }
    }

    #[test]
    fn non_finite_measurements_treated_as_zero() {
        let metrics = ContentMetrics {
            top_inset: f32::NAN,
            bottom_inset: f32::INFINITY,
            content_height: 1000.0,
            viewport_height: 600.0,
        };
        assert_eq!(metrics.scroll_extent(), 400.0);

        let metrics = ContentMetrics {
            content_height: f32::NAN,
            viewport_height: 600.0,
            ..Default::default()
        };
        assert_eq!(metrics.scroll_extent(), 0.0);
    }

    #[test]
    fn in_bounds_positions_report_none() {
        let extent = 500.0;
        for pos in [0.0, -0.5, -250.0, -499.9, -500.0] {
            assert_eq!(out_of_bounds(pos, extent), None, "pos={pos}");
        }
    }

    #[test]
    fn overflow_sign_and_magnitude_match_direction() {
        let extent = 500.0;

        // Past the start edge: positive overflow equal to the distance out
        assert_eq!(out_of_bounds(25.0, extent), Some(25.0));
        assert_eq!(out_of_bounds(0.1, extent), Some(0.1));

        // Past the end edge: negative overflow
        assert_eq!(out_of_bounds(-525.0, extent), Some(-25.0));
        assert_eq!(out_of_bounds(-500.5, extent), Some(-0.5));
    }

    #[test]
    fn zero_extent_only_rests_at_zero() {
        assert_eq!(out_of_bounds(0.0, 0.0), None);
        assert_eq!(out_of_bounds(1.0, 0.0), Some(1.0));
        assert_eq!(out_of_bounds(-1.0, 0.0), Some(-1.0));
    }
}
