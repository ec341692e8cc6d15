use glam::Vec2;

/// Axis-aligned screen rectangle with a top-left origin and Y growing
/// downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner in pixels.
    pub min: Vec2,
    /// Width and height in pixels.
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Create a rectangle anchored at the origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    /// Create a rectangle of `size` centered on `center`.
    #[must_use]
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size * 0.5, size)
    }

    /// Left edge.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Top-left corner.
    #[must_use]
    pub fn top_left(&self) -> Vec2 {
        self.min
    }

    /// Top-right corner.
    #[must_use]
    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Bottom-left corner.
    #[must_use]
    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.left(), self.bottom())
    }

    /// Corners in top-left, top-right, bottom-right, bottom-left order.
    #[must_use]
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// Whether the rectangle has a positive, finite area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0 && self.size.is_finite())
    }

    /// Half-open containment test: the left and top edges are inside, the
    /// right and bottom edges are not.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}
