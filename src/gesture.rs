#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// Mouse and touch are both reduced to one sample per event.
pub trait PointerSample {
    fn sample(&self) -> Option<Point>;
}

impl PointerSample for Point {
    fn sample(&self) -> Option<Point> {
        Some(*self)
    }
}

#[cfg(target_arch = "wasm32")]
impl PointerSample for web_sys::MouseEvent {
    fn sample(&self) -> Option<Point> {
        Some(Point::new(self.client_x() as f64, self.client_y() as f64))
    }
}

#[cfg(target_arch = "wasm32")]
impl PointerSample for web_sys::TouchEvent {
    fn sample(&self) -> Option<Point> {
        // Multi-touch is reduced to the first contact.
        self.touches()
            .get(0)
            .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureTracker {
    origin: Point,
    offset: Offset,
    active: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, point: Point) {
        self.origin = point;
        self.offset = Offset::ZERO;
        self.active = true;
    }

    pub fn move_to(&mut self, point: Point) -> bool {
        if !self.active {
            return false;
        }
        self.offset = Offset::new(point.x - self.origin.x, point.y - self.origin.y);
        true
    }

    pub fn end(&mut self) -> Offset {
        if !self.active {
            return Offset::ZERO;
        }
        self.active = false;
        self.offset
    }

    pub fn reset_offset(&mut self) {
        self.offset = Offset::ZERO;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
