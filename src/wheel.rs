//! The hue wheel: its angle convention, its geometry, and a small stateful model of the widget.
//!
//! The wheel does not measure angles the way hue does. Its angle runs counterclockwise on screen
//! from the top of the ring, and the hue shown at wheel angle `a` is `(360 - a) mod 360`. The
//! relation is its own inverse, so the same formula takes a hue back to a wheel angle.
//!
//! Positions are in widget pixels with the y axis pointing down, as toolkits report them.

use std::cmp::Ordering;

use geo::Point;

use crate::color::{Color, RGBColor};
use crate::colors::HSLColor;
use crate::config::PickerConfig;

/// Where the painted ring's conical gradient starts, in degrees counterclockwise from the positive
/// x axis: the top of the ring.
pub const GRADIENT_START_ANGLE: f64 = 90.0;

/// The color stops of the ring's conical gradient, as (fraction of a turn, color). The gradient
/// runs counterclockwise from [`GRADIENT_START_ANGLE`], which is the same direction wheel angles
/// grow in, so the stop at fraction `f` sits at wheel angle `360 f`.
pub const GRADIENT_STOPS: [(f64, (u8, u8, u8)); 7] = [
    (0.0, (255, 0, 0)),
    (1.0 / 6.0, (255, 0, 255)),
    (2.0 / 6.0, (0, 0, 255)),
    (3.0 / 6.0, (0, 255, 255)),
    (4.0 / 6.0, (0, 255, 0)),
    (5.0 / 6.0, (255, 255, 0)),
    (1.0, (255, 0, 0)),
];

/// Wraps any angle in degrees into 0-359.
pub fn normalize_angle(angle: i32) -> u16 {
    angle.rem_euclid(360) as u16
}

/// Rounds a float angle to the nearest whole degree, wrapping 360 back to 0.
pub fn nearest_degree(angle: f64) -> u16 {
    (angle.round() as i64).rem_euclid(360) as u16
}

/// The hue shown at a wheel angle: `(360 - angle) mod 360`.
///
/// # Example
///
/// ```
/// # use tinct::wheel::hue_from_wheel_angle;
/// assert_eq!(hue_from_wheel_angle(90), 270);
/// assert_eq!(hue_from_wheel_angle(0), 0);
/// assert_eq!(hue_from_wheel_angle(360), 0);
/// ```
pub fn hue_from_wheel_angle(angle: i32) -> u16 {
    normalize_angle(360 - i32::from(normalize_angle(angle)))
}

/// The wheel angle that shows a hue. The same relation as [`hue_from_wheel_angle`], which is its
/// own inverse.
pub fn wheel_angle_from_hue(hue: i32) -> u16 {
    hue_from_wheel_angle(hue)
}

/// One scroll notch: a negative `delta_y` (wheel turned toward the user) adds `step`, a positive
/// one subtracts it, and a zero delta leaves the angle alone. The result wraps in both directions.
pub fn scroll_angle(angle: i32, delta_y: i32, step: u16) -> u16 {
    // wrap first so the step can't overflow at the ends of the i32 range
    let angle = i32::from(normalize_angle(angle));
    let step = i32::from(step);
    let next = match delta_y.cmp(&0) {
        Ordering::Less => angle + step,
        Ordering::Greater => angle - step,
        Ordering::Equal => angle,
    };
    normalize_angle(next)
}

/// The fully saturated color painted on the ring at a wheel angle.
pub fn ring_color(angle: i32) -> RGBColor {
    HSLColor {
        h: f64::from(hue_from_wheel_angle(angle)),
        s: 1.0,
        l: 0.5,
    }
    .to_rgb()
}

/// The size of the wheel widget. The ring is drawn `arc_width` thick, `margin` pixels in from the
/// widget's edge, and the indicator travels along the middle of the ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelGeometry {
    /// Width of the (square) widget in pixels.
    pub width: u32,
    /// Thickness of the ring in pixels.
    pub arc_width: u32,
    /// Gap between the widget's edge and the outside of the ring.
    pub margin: u32,
}

impl Default for WheelGeometry {
    fn default() -> WheelGeometry {
        WheelGeometry {
            width: 400,
            arc_width: 50,
            margin: 10,
        }
    }
}

impl WheelGeometry {
    /// Half the widget width: the center's coordinate on both axes.
    pub fn size(&self) -> u32 {
        self.width / 2
    }

    /// Radius of the circle the indicator travels on. Negative when the widget is too small to
    /// hold the ring.
    pub fn radius(&self) -> f64 {
        f64::from(self.size()) - f64::from(self.margin) - f64::from(self.arc_width / 2)
    }

    /// Center of the wheel.
    pub fn center(&self) -> Point<f64> {
        let size = f64::from(self.size());
        Point::new(size, size)
    }

    /// Where the indicator sits for a wheel angle:
    /// `center + radius * (sin(angle + 180), cos(angle + 180))`.
    pub fn indicator_position(&self, angle: i32) -> Point<f64> {
        let theta = (f64::from(angle) + 180.0).to_radians();
        let center = self.center();
        let radius = self.radius();
        Point::new(
            center.x() + radius * theta.sin(),
            center.y() + radius * theta.cos(),
        )
    }

    /// [`indicator_position`](WheelGeometry::indicator_position) rounded to whole pixels.
    pub fn indicator_pixel(&self, angle: i32) -> Point<i32> {
        let pos = self.indicator_position(angle);
        Point::new(pos.x().round() as i32, pos.y().round() as i32)
    }

    /// The wheel angle pointed at from the center toward `point`, in `[0, 360)`. Exactly inverts
    /// [`indicator_position`](WheelGeometry::indicator_position).
    pub fn angle_at(&self, point: Point<f64>) -> f64 {
        let center = self.center();
        let degrees = (point.y() - center.y())
            .atan2(point.x() - center.x())
            .to_degrees();
        (-(degrees + 90.0)).rem_euclid(360.0)
    }

    /// [`angle_at`](WheelGeometry::angle_at) for a pixel position, rounded to the nearest degree.
    pub fn angle_at_pixel(&self, point: Point<i32>) -> u16 {
        nearest_degree(self.angle_at(Point::new(
            f64::from(point.x()),
            f64::from(point.y()),
        )))
    }
}

/// The state of a wheel widget: its geometry, where the indicator is, and whether the fast-scroll
/// modifier is held.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorWheel {
    geometry: WheelGeometry,
    angle: u16,
    fast: bool,
    step: u16,
    fast_step: u16,
}

impl ColorWheel {
    /// A wheel at angle 0 that scrolls 1 degree per notch, or 10 with the modifier held.
    pub fn new(geometry: WheelGeometry) -> ColorWheel {
        ColorWheel {
            geometry,
            angle: 0,
            fast: false,
            step: 1,
            fast_step: 10,
        }
    }

    /// A wheel with the geometry and scroll steps from `config`, showing its initial color.
    pub fn from_config(config: &PickerConfig) -> ColorWheel {
        let mut wheel =
            ColorWheel::new(config.wheel).with_steps(config.scroll_step, config.fast_scroll_step);
        wheel.show_hue(config.initial_color.hue);
        wheel
    }

    /// Replaces the scroll steps.
    pub fn with_steps(mut self, step: u16, fast_step: u16) -> ColorWheel {
        self.step = step;
        self.fast_step = fast_step;
        self
    }

    /// The current wheel angle.
    pub fn angle(&self) -> u16 {
        self.angle
    }

    /// The widget's geometry.
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    /// Changes the widget width, keeping the angle.
    pub fn resize(&mut self, width: u32) {
        self.geometry.width = width;
    }

    /// Records whether the fast-scroll modifier key is held.
    pub fn set_modifier(&mut self, held: bool) {
        self.fast = held;
    }

    /// Moves the indicator toward a dragged pointer and returns the new angle.
    pub fn drag_to(&mut self, pointer: Point<i32>) -> u16 {
        self.angle = self.geometry.angle_at_pixel(pointer);
        trace!("wheel dragged to {:?} -> {}", pointer, self.angle);
        self.angle
    }

    /// Turns the wheel one notch in the direction of `delta_y` and returns the new angle.
    pub fn scroll(&mut self, delta_y: i32) -> u16 {
        let step = if self.fast { self.fast_step } else { self.step };
        self.angle = scroll_angle(i32::from(self.angle), delta_y, step);
        trace!("wheel scrolled by {} -> {}", delta_y, self.angle);
        self.angle
    }

    /// Moves the indicator to a wheel angle set from outside the widget, e.g. typed in.
    pub fn set_angle(&mut self, angle: i32) {
        self.angle = normalize_angle(angle);
    }

    /// Moves the indicator to where `hue` is shown, after the color changed elsewhere.
    pub fn show_hue(&mut self, hue: u16) {
        self.angle = wheel_angle_from_hue(i32::from(hue));
    }

    /// The indicator's pixel position.
    pub fn indicator(&self) -> Point<i32> {
        self.geometry.indicator_pixel(i32::from(self.angle))
    }

    /// The number drawn in the middle of the ring: the hue at the current angle.
    pub fn label(&self) -> String {
        hue_from_wheel_angle(i32::from(self.angle)).to_string()
    }
}
