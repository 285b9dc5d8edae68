use serde::{Serialize, Deserialize};
use crate::core::angles::TWO_PI;
use crate::core::point::Point2;
use crate::random::unit_source::UnitSource;

/// Integer rectangle given by its top-left corner and size.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        IntRect { x, y, width, height }
    }

    pub fn at_origin(self) -> Self {
        IntRect { x: 0, y: 0, ..self }
    }
}

/// Distributions built on top of a [`UnitSource`].
pub trait RandomExt: UnitSource {
    /// Uniform in `[min, max)`.
    fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_unit() * (max - min)
    }

    /// Uniform integer in `[0, n)`, zero when `n <= 0`.
    fn next_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.next_unit() * n as f32) as usize).min(n - 1)
    }

    /// Normally distributed value (Box-Muller, sine branch).
    fn next_gaussian(&mut self, mu: f32, sigma: f32) -> f32 {
        // ln(0) would be -inf.
        let u1 = self.next_unit().max(f32::MIN_POSITIVE);
        let u2 = self.next_unit();
        let std_normal = (-2.0 * u1.ln()).sqrt() * (TWO_PI * u2).sin();
        mu + sigma * std_normal
    }

    fn next_radian(&mut self) -> f32 {
        self.next_unit() * TWO_PI
    }

    /// `num_segments` angles spread evenly round the circle, each nudged randomly
    /// within its own segment widened by `overlap`.
    fn next_segmented_angles(&mut self, num_segments: usize, overlap: f32, random_offset: bool) -> Vec<f32> {
        if num_segments == 0 {
            return Vec::new();
        }

        let offset = if random_offset { self.next_radian() } else { 0.0 };
        let mut angles: Vec<f32> = (0..num_segments)
            .map(|i| i as f32 / num_segments as f32 * TWO_PI + offset)
            .collect();

        let rotation_max = TWO_PI / num_segments as f32 + overlap;
        for angle in angles.iter_mut() {
            *angle += self.next_range(-rotation_max / 2.0, rotation_max / 2.0);
        }

        angles
    }

    /// Integer point inside `rect`, edges included. Coordinates saturate at `i32::MAX`.
    fn next_point_within(&mut self, rect: IntRect) -> Point2 {
        let dx = self.next_index(rect.width.saturating_add(1).max(0) as usize) as i32;
        let dy = self.next_index(rect.height.saturating_add(1).max(0) as usize) as i32;
        Point2::new(rect.x.saturating_add(dx) as f32, rect.y.saturating_add(dy) as f32)
    }

    fn next_point_within_normalized(&mut self, rect: IntRect) -> Point2 {
        self.next_point_within(rect.at_origin())
    }

    /// Keeps rolling against `chance` and returns how many rolls succeeded in a row,
    /// never more than `max_count`.
    fn next_recursive_count(&mut self, chance: f32, max_count: u32) -> u32 {
        for i in 0..max_count {
            if self.next_unit() > chance {
                return i;
            }
        }
        max_count
    }

    fn next_unit_vector(&mut self) -> Point2 {
        Point2::from_angle(self.next_radian())
    }

    /// Point inside the ellipse with the given half extents.
    fn next_vector_circular(&mut self, half_width: f32, half_height: f32) -> Point2 {
        let direction = self.next_unit_vector();
        let magnitude = self.next_unit();
        Point2::new(direction.x * half_width, direction.y * half_height) * magnitude
    }
}

impl<T: UnitSource + ?Sized> RandomExt for T {}
