use glossa_types::{Point, Rect, Size};

/// Keep `[start, start + extent]` at least `margin` away from both ends of
/// `[0, available]`. Content larger than the room left is pinned to `margin`.
fn clamp_axis(start: f32, extent: f32, available: f32, margin: f32) -> f32 {
    let max = available - margin - extent;
    if max < margin {
        margin
    } else {
        start.clamp(margin, max)
    }
}

/// Place a tooltip above `anchor`, centered on it, inside the viewport.
///
/// When there is no room above, the tooltip flips below the anchor.
pub fn place(anchor: Rect, tooltip: Size, viewport: Size, margin: f32, gap: f32) -> Point {
    let left = anchor.center_x() - tooltip.width / 2.0;
    let mut top = anchor.top - gap - tooltip.height;

    if top < margin {
        let below = anchor.bottom() + gap;
        if below + tooltip.height <= viewport.height - margin {
            top = below;
        }
    }

    Point::new(
        clamp_axis(left, tooltip.width, viewport.width, margin),
        clamp_axis(top, tooltip.height, viewport.height, margin),
    )
}
