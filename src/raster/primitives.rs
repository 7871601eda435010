//! Line and circle scan conversion
//!
//! Both algorithms are integer-only and produce coordinates; they never touch
//! a buffer themselves. Coordinates may fall outside any buffer, the
//! consumer decides what to do with them.

// ============================================================================
// Bresenham line
// ============================================================================

/// Points of the 8-connected line from `(x0, y0)` to `(x1, y1)`, both ends included
#[derive(Debug, Clone)]
pub struct Line {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl Line {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // x and y never leave the [start, end] box, so they fit back into i32
        let point = (self.x as i32, self.y as i32);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(point)
    }
}

// ============================================================================
// Midpoint circle
// ============================================================================

/// Midpoint circle outline, one step per item
///
/// Every item holds the eight octant reflections of the current step. Points
/// left of or above the origin come out negative. A radius of 0 yields
/// nothing, a radius of 1 yields the centre only.
#[derive(Debug, Clone)]
pub struct Circle {
    cx: i64,
    cy: i64,
    diameter: i64,
    x: i64,
    y: i64,
    tx: i64,
    ty: i64,
    error: i64,
}

impl Circle {
    pub fn new(cx: u32, cy: u32, radius: u32) -> Self {
        let diameter = radius as i64 * 2;
        let tx = 1;
        Self {
            cx: cx as i64,
            cy: cy as i64,
            diameter,
            x: radius as i64 - 1,
            y: 0,
            tx,
            ty: 1,
            error: tx - diameter,
        }
    }
}

impl Iterator for Circle {
    type Item = [(i64, i64); 8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.x < self.y {
            return None;
        }
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        let octants = [
            (cx + x, cy - y),
            (cx + x, cy + y),
            (cx - x, cy - y),
            (cx - x, cy + y),
            (cx + y, cy - x),
            (cx + y, cy + x),
            (cx - y, cy - x),
            (cx - y, cy + x),
        ];

        if self.error <= 0 {
            self.y += 1;
            self.error += self.ty;
            self.ty += 2;
        }
        // Not an else: both steps may fire in one iteration
        if self.error > 0 {
            self.x -= 1;
            self.tx += 2;
            self.error += self.tx - self.diameter;
        }
        Some(octants)
    }
}
