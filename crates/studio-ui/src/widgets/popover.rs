use studio_engine::coords::{Rect, Vec2};

/// Places a popover of `size` next to `anchor`, inside `bounds`.
///
/// Opens below the anchor when it fits, above when only that fits, and
/// otherwise on whichever side has more room. The result is shifted
/// horizontally to stay inside `bounds`.
pub fn place(anchor: Rect, size: Vec2, bounds: Rect, gap: f32) -> Rect {
    let below = anchor.max().y + gap;
    let above = anchor.origin.y - gap - size.y;
    let room_below = bounds.max().y - below;
    let room_above = above - bounds.origin.y;

    let y = if room_below >= size.y {
        below
    } else if room_above >= 0.0 || room_above + size.y > room_below {
        above.max(bounds.origin.y)
    } else {
        below
    };

    let max_x = (bounds.max().x - size.x).max(bounds.origin.x);
    let x = anchor.origin.x.clamp(bounds.origin.x, max_x);
    Rect::new(x, y, size.x, size.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect { origin: Vec2 { x: 0.0, y: 0.0 }, size: Vec2 { x: 800.0, y: 600.0 } };

    #[test]
    fn opens_below_when_room() {
        let anchor = Rect::new(100.0, 100.0, 40.0, 40.0);
        let r = place(anchor, Vec2::new(200.0, 150.0), BOUNDS, 8.0);
        assert_eq!(r, Rect::new(100.0, 148.0, 200.0, 150.0));
    }

    #[test]
    fn flips_above_near_bottom() {
        let anchor = Rect::new(100.0, 500.0, 40.0, 40.0);
        let r = place(anchor, Vec2::new(200.0, 150.0), BOUNDS, 8.0);
        assert_eq!(r.origin.y, 500.0 - 8.0 - 150.0);
    }

    #[test]
    fn clamps_to_right_edge() {
        let anchor = Rect::new(750.0, 100.0, 40.0, 40.0);
        let r = place(anchor, Vec2::new(200.0, 100.0), BOUNDS, 8.0);
        assert_eq!(r.origin.x, 600.0);
    }

    #[test]
    fn larger_than_bounds_pins_to_origin() {
        let anchor = Rect::new(10.0, 10.0, 10.0, 10.0);
        let r = place(anchor, Vec2::new(1000.0, 100.0), BOUNDS, 4.0);
        assert_eq!(r.origin.x, 0.0);
    }
}
