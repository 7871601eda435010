//! Triangle outline and scanline fill
//!
//! The fill walks the triangle one row at a time, interpolating the long
//! edge (top vertex to bottom vertex) against whichever short edge covers the
//! current row, and writes each row as one horizontal run.

use super::pixel_buffer::PixelBuffer;
use super::primitives::Line;

/// A vertex in buffer coordinates
pub type Vertex = (i32, i32);

/// Points of the three edges 0→1, 1→2, 2→0
pub fn outline(v0: Vertex, v1: Vertex, v2: Vertex) -> impl Iterator<Item = (i32, i32)> {
    Line::new(v0.0, v0.1, v1.0, v1.1)
        .chain(Line::new(v1.0, v1.1, v2.0, v2.1))
        .chain(Line::new(v2.0, v2.1, v0.0, v0.1))
}

/// One row of a filled triangle: columns `left..right` of row `y`, unclipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i64,
    pub left: i32,
    pub right: i32,
}

/// Row spans of a filled triangle, top to bottom
///
/// Rows run from the top vertex up to (not including) the bottom vertex and
/// each span excludes its right edge. A triangle whose vertices share one y
/// has no rows.
#[derive(Debug, Clone)]
pub struct Spans {
    v: [Vertex; 3],
    total_height: i64,
    i: i64,
}

impl Spans {
    pub fn new(v0: Vertex, v1: Vertex, v2: Vertex) -> Self {
        let mut v = [v0, v1, v2];
        if v[0].1 == v[1].1 && v[0].1 == v[2].1 {
            return Self {
                v,
                total_height: 0,
                i: 0,
            };
        }

        // Three compare-and-swaps leave y0 <= y1 <= y2
        if v[0].1 > v[1].1 {
            v.swap(0, 1);
        }
        if v[0].1 > v[2].1 {
            v.swap(0, 2);
        }
        if v[1].1 > v[2].1 {
            v.swap(1, 2);
        }

        Self {
            v,
            total_height: v[2].1 as i64 - v[0].1 as i64,
            i: 0,
        }
    }
}

impl Iterator for Spans {
    type Item = Span;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.total_height {
            return None;
        }
        let i = self.i;
        self.i += 1;

        let [(x0, y0), (x1, y1), (x2, y2)] = self.v;
        let (y0, y1, y2) = (y0 as i64, y1 as i64, y2 as i64);
        let upper_height = y1 - y0;
        let second_half = i > upper_height || y1 == y0;
        let segment_height = if second_half { y2 - y1 } else { upper_height };

        // segment_height is never 0 here: a flat top forces the second half,
        // and the second half only starts once rows remain below y1
        let alpha = i as f32 / self.total_height as f32;
        let beta = (i - if second_half { upper_height } else { 0 }) as f32 / segment_height as f32;

        let mut left = lerp(x0, x2, alpha);
        let mut right = if second_half {
            lerp(x1, x2, beta)
        } else {
            lerp(x0, x1, beta)
        };
        if left > right {
            std::mem::swap(&mut left, &mut right);
        }

        Some(Span {
            y: y0 + i,
            left,
            right,
        })
    }
}

/// Interpolate x along an edge, truncating toward zero
#[inline]
fn lerp(from: i32, to: i32, t: f32) -> i32 {
    (from as f32 + (to as i64 - from as i64) as f32 * t) as i32
}

/// Fill a triangle with a uniform colour
///
/// Rows outside the buffer are skipped whole. Within a row, columns left of
/// 0 are skipped and the run stops at the first column past the right edge,
/// which leaves one contiguous in-bounds range per row.
pub fn fill(buffer: &mut PixelBuffer, v0: Vertex, v1: Vertex, v2: Vertex, bgra: [u8; 4]) {
    let width = buffer.width() as i64;
    let height = buffer.height() as i64;

    for span in Spans::new(v0, v1, v2) {
        if span.y < 0 || span.y >= height {
            continue;
        }
        let start = (span.left as i64).max(0);
        let end = (span.right as i64).min(width);
        if start >= end {
            continue;
        }
        // Safety: 0 <= y < height and 0 <= start < end <= width
        unsafe {
            buffer.fill_span_unchecked(span.y as u32, start as u32, end as u32, bgra);
        }
    }
}
