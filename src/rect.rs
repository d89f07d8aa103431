use glam::{const_vec2, vec2, Vec2};

/// A rectangle, as handed to the renderer for carets and selections.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[repr(C)]
pub struct Rect {
    /// The position of the top-left corner
    /// of this rectangle.
    pub pos: Vec2,
    /// The side lengths of this rectangle.
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(vec2(x, y), vec2(width, height))
    }

    pub fn offset(self, offset: Vec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    pub fn max(self) -> Vec2 {
        self.pos + self.size
    }

    pub fn contains(self, pos: Vec2) -> bool {
        pos.x >= self.pos.x
            && pos.y >= self.pos.y
            && pos.x < (self.pos.x + self.size.x)
            && pos.y < (self.pos.y + self.size.y)
    }
}

/// An axis-aligned bounding box accumulated from glyph quads.
///
/// Starts out as [`Bounds::EMPTY`], with `min` at +∞ and `max` at −∞,
/// so that the first point included always wins.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        min: const_vec2!([f32::INFINITY; 2]),
        max: const_vec2!([f32::NEG_INFINITY; 2]),
    };

    /// Grows the box to contain `point`.
    pub fn include(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Whether nothing has been included on either axis.
    pub fn is_empty(&self) -> bool {
        self.max.x == f32::NEG_INFINITY && self.max.y == f32::NEG_INFINITY
    }

    /// Width and height of the box, or zero along an axis that
    /// never received a point.
    pub fn size(&self) -> Vec2 {
        (self.max - self.min).max(Vec2::ZERO)
    }

    /// Converts to a rectangle. Axes that never received a point
    /// collapse to zero instead of carrying the infinite sentinel.
    pub fn to_rect(&self) -> Rect {
        let axis = |min: f32, max: f32| {
            if min <= max {
                (min, max - min)
            } else {
                (0., 0.)
            }
        };
        let (x, width) = axis(self.min.x, self.max.x);
        let (y, height) = axis(self.min.y, self.max.y);
        Rect::from_xywh(x, y, width, height)
    }
}
