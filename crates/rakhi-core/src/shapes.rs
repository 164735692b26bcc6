//! Shapes photos can be arranged into.
//!
//! Points are in percent of the canvas, centered on (50, 50). Rotations are
//! in degrees.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePoint {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Heart,
    Star,
    Flower,
    Circle,
    Butterfly,
    Infinity,
    Rakhi,
}

const RAKHI_X: [f64; 12] = [50.0, 40.0, 60.0, 35.0, 65.0, 30.0, 70.0, 35.0, 65.0, 40.0, 60.0, 50.0];
const RAKHI_Y: [f64; 12] = [20.0, 25.0, 25.0, 35.0, 35.0, 50.0, 50.0, 65.0, 65.0, 75.0, 75.0, 80.0];

impl Shape {
    pub fn all() -> &'static [Shape] {
        &[
            Shape::Heart,
            Shape::Star,
            Shape::Flower,
            Shape::Circle,
            Shape::Butterfly,
            Shape::Infinity,
            Shape::Rakhi,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Heart => "Heart",
            Shape::Star => "Star",
            Shape::Flower => "Flower",
            Shape::Circle => "Circle",
            Shape::Butterfly => "Butterfly",
            Shape::Infinity => "Infinity",
            Shape::Rakhi => "Rakhi",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Shape::Heart => "💖",
            Shape::Star => "⭐",
            Shape::Flower => "🌸",
            Shape::Circle => "⭕",
            Shape::Butterfly => "🦋",
            Shape::Infinity => "♾️",
            Shape::Rakhi => "🎀",
        }
    }

    /// Number of points in the shape
    pub fn point_count(&self) -> usize {
        match self {
            Shape::Heart | Shape::Circle | Shape::Infinity => 24,
            Shape::Star => 10,
            Shape::Flower => 16,
            Shape::Butterfly => 20,
            Shape::Rakhi => 12,
        }
    }

    /// The `i`-th point of the shape, wrapping around
    pub fn point(&self, i: usize) -> ShapePoint {
        let n = self.point_count();
        let i = i % n;
        let angle = i as f64 / n as f64 * TAU;
        let degrees = angle.to_degrees();

        match self {
            Shape::Heart => {
                let x = 16.0 * angle.sin().powi(3);
                let y = -(13.0 * angle.cos()
                    - 5.0 * (2.0 * angle).cos()
                    - 2.0 * (3.0 * angle).cos()
                    - (4.0 * angle).cos());
                ShapePoint {
                    x: 50.0 + x * 1.5,
                    y: 50.0 + y * 1.5,
                    rotation: degrees,
                }
            }
            Shape::Star => {
                let radius = if i % 2 == 0 { 20.0 } else { 10.0 };
                ShapePoint {
                    x: 50.0 + angle.cos() * radius,
                    y: 50.0 + angle.sin() * radius,
                    rotation: degrees + 18.0,
                }
            }
            Shape::Flower => {
                let petal = 15.0 + 5.0 * (angle * 5.0).sin();
                ShapePoint {
                    x: 50.0 + angle.cos() * petal,
                    y: 50.0 + angle.sin() * petal,
                    rotation: degrees,
                }
            }
            Shape::Circle => ShapePoint {
                x: 50.0 + angle.cos() * 20.0,
                y: 50.0 + angle.sin() * 20.0,
                rotation: degrees,
            },
            Shape::Butterfly => {
                let wing_x = angle.cos().abs() * 20.0;
                let wing_y = angle.sin() * 15.0;
                let left = i < n / 2;
                ShapePoint {
                    x: 50.0 + if left { -wing_x } else { wing_x },
                    y: 50.0 + wing_y,
                    rotation: if left { -15.0 } else { 15.0 },
                }
            }
            Shape::Infinity => ShapePoint {
                x: 50.0 + 8.0 * angle.sin() * 2.0,
                y: 50.0 + 8.0 * (2.0 * angle).sin() * 2.0,
                rotation: degrees,
            },
            Shape::Rakhi => ShapePoint {
                x: RAKHI_X[i],
                y: RAKHI_Y[i],
                rotation: i as f64 * 30.0,
            },
        }
    }

    /// Every point of the shape in order
    pub fn points(&self) -> Vec<ShapePoint> {
        (0..self.point_count()).map(|i| self.point(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_point_counts() {
        let counts: Vec<_> = Shape::all().iter().map(|s| s.points().len()).collect();
        assert_eq!(counts, vec![24, 10, 16, 24, 20, 24, 12]);
    }

    #[test]
    fn test_heart_top_notch() {
        let top = Shape::Heart.point(0);
        // y = -(13 - 5 - 2 - 1) = -5
        assert!(close(top.x, 50.0));
        assert!(close(top.y, 50.0 - 7.5));
        assert!(close(top.rotation, 0.0));
    }

    #[test]
    fn test_star_alternates_radius() {
        let outer = Shape::Star.point(0);
        let inner = Shape::Star.point(5);
        assert!(close(outer.x, 70.0));
        assert!(close(inner.x, 40.0));
        assert!(close(outer.rotation, 18.0));
    }

    #[test]
    fn test_butterfly_wings() {
        for (i, point) in Shape::Butterfly.points().into_iter().enumerate() {
            if i < 10 {
                assert!(point.x <= 50.0);
                assert_eq!(point.rotation, -15.0);
            } else {
                assert!(point.x >= 50.0);
                assert_eq!(point.rotation, 15.0);
            }
        }
    }

    #[test]
    fn test_rakhi_table_and_wrap() {
        let last = Shape::Rakhi.point(11);
        assert_eq!((last.x, last.y, last.rotation), (50.0, 80.0, 330.0));
        assert_eq!(Shape::Rakhi.point(12), Shape::Rakhi.point(0));
    }

    #[test]
    fn test_shapes_stay_on_canvas() {
        for shape in Shape::all() {
            for point in shape.points() {
                assert!((0.0..=100.0).contains(&point.x), "{shape:?} x {}", point.x);
                assert!((0.0..=100.0).contains(&point.y), "{shape:?} y {}", point.y);
            }
        }
    }
}
