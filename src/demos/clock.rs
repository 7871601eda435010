//! Analogue Clock
//!
//! Hour and minute markers on a ring around the window centre, with hour,
//! minute and second hands. Time comes from the local wall clock.

use std::f64::consts::PI;

use super::Demo;
use crate::raster::Canvas;

const HOUR_MARKER: (f64, f64) = (155.0, 170.0);
const MINUTE_MARKER: (f64, f64) = (165.0, 170.0);
const SECOND_HAND: f64 = 160.0;
const MINUTE_HAND: f64 = 130.0;
const HOUR_HAND: f64 = 100.0;

const MARKER_COLOR: (u32, u32, u32) = (230, 210, 90);
const HOUR_COLOR: (u32, u32, u32) = (40, 40, 240);
const MINUTE_COLOR: (u32, u32, u32) = (40, 240, 40);
const SECOND_COLOR: (u32, u32, u32) = (240, 40, 40);

/// Analogue clock face
pub struct Clock {
    hour: u8,
    minute: u8,
    second: u8,
    follow_wall_clock: bool,
    warned_utc: bool,
}

impl Clock {
    /// Clock that follows local time
    pub fn new() -> Self {
        let mut clock = Self::at(0, 0, 0);
        clock.follow_wall_clock = true;
        clock.refresh();
        clock
    }

    /// Clock frozen at a fixed time
    pub fn at(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            follow_wall_clock: false,
            warned_utc: false,
        }
    }

    pub fn time(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }

    fn refresh(&mut self) {
        let now = match time::OffsetDateTime::now_local() {
            Ok(now) => now,
            Err(e) => {
                if !self.warned_utc {
                    log::warn!("local time unavailable ({}), showing UTC", e);
                    self.warned_utc = true;
                }
                time::OffsetDateTime::now_utc()
            },
        };
        self.hour = now.hour();
        self.minute = now.minute();
        self.second = now.second();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Point at `radius` from (cx, cy) in direction `angle`, 0 at twelve o'clock
fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (i32, i32) {
    (
        (cx + radius * (angle - PI / 2.0).cos()) as i32,
        (cy + radius * (angle - PI / 2.0).sin()) as i32,
    )
}

fn draw_markers(canvas: &mut Canvas, cx: f64, cy: f64) {
    let (start, end) = HOUR_MARKER;
    for hour in 1..=12 {
        let angle = hour as f64 * PI / 6.0;
        // Drawn three times, shifted right and down, for thickness
        for (ox, oy) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)] {
            let (x0, y0) = polar(cx + ox, cy + oy, start, angle);
            let (x1, y1) = polar(cx + ox, cy + oy, end, angle);
            canvas.draw_line(x0, y0, x1, y1);
        }
    }

    let (start, end) = MINUTE_MARKER;
    for minute in 0..60 {
        if minute == 15 {
            continue;
        }
        let angle = minute as f64 * PI / 30.0;
        let (x0, y0) = polar(cx, cy, start, angle);
        let (x1, y1) = polar(cx, cy, end, angle);
        canvas.draw_line(x0, y0, x1, y1);
    }
}

fn draw_hand(canvas: &mut Canvas, cx: f64, cy: f64, length: f64, angle: f64, color: (u32, u32, u32)) {
    canvas.set_color_rgb(color.0, color.1, color.2);
    let (x1, y1) = polar(cx, cy, length, angle);
    canvas.draw_line(cx as i32, cy as i32, x1, y1);
}

impl Demo for Clock {
    fn update(&mut self, _dt: f32) {
        if self.follow_wall_clock {
            self.refresh();
        }
    }

    fn render(&self, canvas: &mut Canvas) {
        let cx = (canvas.width() / 2) as f64;
        let cy = (canvas.height() / 2) as f64;

        let (r, g, b) = MARKER_COLOR;
        canvas.set_color_rgb(r, g, b);
        draw_markers(canvas, cx, cy);

        let hour = if self.hour > 12 { self.hour - 12 } else { self.hour };
        let minute = self.minute as f64;
        let hour_angle = (hour as f64 + minute / 60.0) * PI / 6.0;
        let minute_angle = minute * PI / 30.0;
        let second_angle = self.second as f64 * PI / 30.0;

        draw_hand(canvas, cx, cy, HOUR_HAND, hour_angle, HOUR_COLOR);
        draw_hand(canvas, cx, cy, MINUTE_HAND, minute_angle, MINUTE_COLOR);
        draw_hand(canvas, cx, cy, SECOND_HAND, second_angle, SECOND_COLOR);
    }

    fn name(&self) -> &str {
        "Clock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::BLANK;

    fn render(clock: &Clock) -> Canvas {
        let mut canvas = Canvas::new(640, 400);
        clock.render(&mut canvas);
        canvas
    }

    #[test]
    fn test_second_hand_at_twelve_is_drawn_last() {
        let canvas = render(&Clock::at(12, 0, 0));
        assert_eq!(canvas.buffer().get_pixel(320, 200 - 100), Some((240, 40, 40, 255)));
        assert_eq!(canvas.buffer().get_pixel(320, 200 - 150), Some((240, 40, 40, 255)));
    }

    #[test]
    fn test_afternoon_hours_match_morning() {
        let afternoon = render(&Clock::at(15, 20, 5));
        let morning = render(&Clock::at(3, 20, 5));
        assert_eq!(afternoon.buffer().as_bytes(), morning.buffer().as_bytes());
    }

    #[test]
    fn test_markers_ring_the_centre() {
        let canvas = render(&Clock::at(6, 30, 30));
        // twelve o'clock hour marker spans y = 200-170 ..= 200-155
        assert_eq!(canvas.buffer().get_pixel(320, 200 - 160), Some((230, 210, 90, 255)));
        // nothing is drawn between the hands' tips and the markers at the far left
        assert_eq!(canvas.buffer().get_pixel(320 - 100, 200 - 100), Some(BLANK));
    }

    #[test]
    fn test_render_leaves_last_hand_colour_current() {
        let mut canvas = Canvas::new(400, 400);
        Clock::at(1, 2, 3).render(&mut canvas);
        assert_eq!(canvas.color().red(), 240);
    }
}
