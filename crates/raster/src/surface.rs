//! CPU scanline rasterizer.
//!
//! Coverage is decided by sampling each pixel at its center `(x + 0.5, y + 0.5)`;
//! there is no antialiasing, so a shape either owns a pixel or it does not.
//! Polygons use the even-odd rule, which for the simple closed outlines drawn
//! here is identical to non-zero winding.

use heartfield_core::buffer::{PixelBuffer, CHANNELS};
use heartfield_core::color::Rgba;
use heartfield_core::error::HeartfieldError;
use heartfield_core::surface::{Backend, Surface};
use heartfield_core::DVec2;

/// An in-memory RGBA8 render target.
#[derive(Debug, Clone)]
pub struct SoftwareSurface {
    buffer: PixelBuffer,
}

impl SoftwareSurface {
    /// Creates a transparent-black surface.
    pub fn new(width: usize, height: usize) -> Result<Self, HeartfieldError> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height)?,
        })
    }

    /// Borrow the pixels without copying.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Composites `color` over the horizontal span `[x0, x1)` of row `y`.
    /// The span must already be clipped to the surface.
    fn blend_span(&mut self, y: usize, x0: usize, x1: usize, color: Rgba) {
        let width = self.buffer.width();
        let row = y * width * CHANNELS;
        let data = self.buffer.data_mut();
        for px in data[row + x0 * CHANNELS..row + x1 * CHANNELS].chunks_exact_mut(CHANNELS) {
            blend_pixel(px, color);
        }
    }
}

/// Source-over compositing of a straight-alpha color onto one RGBA pixel.
fn blend_pixel(dst: &mut [u8], src: Rgba) {
    match src.a {
        255 => dst.copy_from_slice(&[src.r, src.g, src.b, 255]),
        0 => {}
        sa => {
            let sa = f64::from(sa) / 255.0;
            let da = f64::from(dst[3]) / 255.0;
            let out_a = sa + da * (1.0 - sa);
            let mix = |s: u8, d: u8| {
                let c = (f64::from(s) * sa + f64::from(d) * da * (1.0 - sa)) / out_a;
                c.round().clamp(0.0, 255.0) as u8
            };
            dst[0] = mix(src.r, dst[0]);
            dst[1] = mix(src.g, dst[1]);
            dst[2] = mix(src.b, dst[2]);
            dst[3] = (out_a * 255.0).round() as u8;
        }
    }
}

/// Clamps a pixel index computed in floating point to `[0, limit]`.
fn clip_index(i: f64, limit: usize) -> usize {
    if i <= 0.0 {
        0
    } else if i >= limit as f64 {
        limit
    } else {
        i as usize
    }
}

/// First pixel whose center `i + 0.5` lies at or after `edge`.
fn first_center_at_or_after(edge: f64, limit: usize) -> usize {
    clip_index((edge - 0.5).ceil(), limit)
}

/// One past the last pixel whose center lies at or before `edge`.
fn end_after_center_at_or_before(edge: f64, limit: usize) -> usize {
    clip_index((edge - 0.5).floor() + 1.0, limit)
}

/// Rows whose centers fall inside `[min, max]`, clipped to the surface height.
fn row_range(min: f64, max: f64, height: usize) -> std::ops::Range<usize> {
    let start = first_center_at_or_after(min, height);
    let end = end_after_center_at_or_before(max, height).max(start);
    start..end
}

impl Surface for SoftwareSurface {
    fn width(&self) -> usize {
        self.buffer.width()
    }

    fn height(&self) -> usize {
        self.buffer.height()
    }

    fn clear(&mut self, color: Rgba) {
        self.buffer.fill(color);
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba) {
        if points.len() < 3 || points.iter().any(|p| !p.is_finite()) {
            return;
        }
        let width = self.width();
        let height = self.height();
        let (min_y, max_y) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });

        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
        for y in row_range(min_y, max_y, height) {
            let yc = y as f64 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                // Half-open in y so shared vertices count once and flat edges never.
                if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                    crossings.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(|l, r| l.total_cmp(r));
            for pair in crossings.chunks_exact(2) {
                let x0 = first_center_at_or_after(pair[0], width);
                let x1 = first_center_at_or_after(pair[1], width);
                if x0 < x1 {
                    self.blend_span(y, x0, x1, color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if !radius.is_finite() || radius <= 0.0 || !center.is_finite() {
            return;
        }
        let width = self.width();
        let height = self.height();
        let r2 = radius * radius;
        for y in row_range(center.y - radius, center.y + radius, height) {
            let dy = y as f64 + 0.5 - center.y;
            let half = (r2 - dy * dy).max(0.0).sqrt();
            let x0 = first_center_at_or_after(center.x - half, width);
            let x1 = end_after_center_at_or_before(center.x + half, width);
            if x0 < x1 {
                self.blend_span(y, x0, x1, color);
            }
        }
    }

    fn pixels(&self) -> PixelBuffer {
        self.buffer.clone()
    }
}

/// [`Backend`] handing out [`SoftwareSurface`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareBackend;

impl Backend for SoftwareBackend {
    fn create_target(
        &self,
        width: usize,
        height: usize,
    ) -> Result<Box<dyn Surface>, HeartfieldError> {
        log::debug!("creating {width}x{height} software target");
        Ok(Box::new(SoftwareSurface::new(width, height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::opaque(255, 0, 0);
    const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(x0, y0),
            DVec2::new(x1, y0),
            DVec2::new(x1, y1),
            DVec2::new(x0, y1),
        ]
    }

    fn count(surface: &SoftwareSurface, color: Rgba) -> usize {
        surface
            .buffer()
            .data()
            .chunks_exact(CHANNELS)
            .filter(|px| *px == [color.r, color.g, color.b, color.a])
            .count()
    }

    #[test]
    fn new_surface_is_transparent() {
        let s = SoftwareSurface::new(4, 4).unwrap();
        assert!(s.buffer().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn axis_aligned_square_covers_exact_pixels() {
        let mut s = SoftwareSurface::new(10, 10).unwrap();
        s.fill_polygon(&square(2.0, 3.0, 6.0, 5.0), RED);
        assert_eq!(count(&s, RED), 4 * 2);
        assert_eq!(s.buffer().get(2, 3).unwrap(), RED);
        assert_eq!(s.buffer().get(5, 4).unwrap(), RED);
        assert_eq!(s.buffer().get(6, 4).unwrap(), Rgba::TRANSPARENT);
        assert_eq!(s.buffer().get(2, 5).unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn polygon_is_clipped_to_surface() {
        let mut s = SoftwareSurface::new(4, 4).unwrap();
        s.fill_polygon(&square(-10.0, -10.0, 10.0, 10.0), RED);
        assert_eq!(count(&s, RED), 16);
    }

    #[test]
    fn duplicated_closing_vertex_does_not_change_coverage() {
        let mut a = SoftwareSurface::new(10, 10).unwrap();
        let mut b = SoftwareSurface::new(10, 10).unwrap();
        let pts = square(1.0, 1.0, 8.0, 7.0);
        let mut closed = pts.clone();
        closed.push(pts[0]);
        a.fill_polygon(&pts, RED);
        b.fill_polygon(&closed, RED);
        assert_eq!(a.buffer(), b.buffer());
    }

    #[test]
    fn triangle_covers_roughly_half_its_box() {
        let mut s = SoftwareSurface::new(20, 20).unwrap();
        let tri = [
            DVec2::new(0.0, 0.0),
            DVec2::new(20.0, 0.0),
            DVec2::new(0.0, 20.0),
        ];
        s.fill_polygon(&tri, RED);
        let n = count(&s, RED);
        assert!((180..=220).contains(&n), "covered {n}");
    }

    #[test]
    fn degenerate_polygons_draw_nothing() {
        let mut s = SoftwareSurface::new(5, 5).unwrap();
        s.fill_polygon(&[DVec2::ZERO, DVec2::new(5.0, 5.0)], RED);
        s.fill_polygon(&[], RED);
        s.fill_polygon(&[DVec2::ZERO, DVec2::new(f64::NAN, 1.0), DVec2::ONE], RED);
        assert_eq!(count(&s, RED), 0);
    }

    #[test]
    fn later_fill_overdraws_earlier() {
        let mut s = SoftwareSurface::new(10, 10).unwrap();
        s.fill_polygon(&square(0.0, 0.0, 10.0, 10.0), BLUE);
        s.fill_polygon(&square(2.0, 2.0, 8.0, 8.0), RED);
        assert_eq!(count(&s, RED), 36);
        assert_eq!(count(&s, BLUE), 64);
    }

    #[test]
    fn circle_area_approximates_pi_r_squared() {
        let mut s = SoftwareSurface::new(64, 64).unwrap();
        s.fill_circle(DVec2::new(32.0, 32.0), 20.0, RED);
        let n = count(&s, RED) as f64;
        let expected = std::f64::consts::PI * 400.0;
        assert!((n - expected).abs() / expected < 0.03, "covered {n}");
        assert_eq!(s.buffer().get(32, 32).unwrap(), RED);
        assert_eq!(s.buffer().get(0, 0).unwrap(), Rgba::TRANSPARENT);
    }

    #[test]
    fn circle_is_symmetric() {
        let mut s = SoftwareSurface::new(21, 21).unwrap();
        s.fill_circle(DVec2::new(10.5, 10.5), 6.3, RED);
        for y in 0..21 {
            for x in 0..21 {
                let a = s.buffer().get(x, y).unwrap();
                assert_eq!(a, s.buffer().get(20 - x, y).unwrap(), "x-mirror at ({x},{y})");
                assert_eq!(a, s.buffer().get(x, 20 - y).unwrap(), "y-mirror at ({x},{y})");
            }
        }
    }

    #[test]
    fn tiny_and_zero_circles() {
        let mut s = SoftwareSurface::new(8, 8).unwrap();
        s.fill_circle(DVec2::new(4.0, 4.0), 0.0, RED);
        s.fill_circle(DVec2::new(4.0, 4.0), -1.0, RED);
        assert_eq!(count(&s, RED), 0);
        // Radius large enough to reach exactly one pixel center.
        s.fill_circle(DVec2::new(4.5, 4.5), 0.2, RED);
        assert_eq!(count(&s, RED), 1);
    }

    #[test]
    fn circle_is_clipped_at_edges() {
        let mut s = SoftwareSurface::new(10, 10).unwrap();
        s.fill_circle(DVec2::new(0.0, 0.0), 5.0, RED);
        s.fill_circle(DVec2::new(10.0, 10.0), 5.0, RED);
        assert!(count(&s, RED) > 0);
    }

    #[test]
    fn translucent_fill_blends_over_opaque() {
        let mut s = SoftwareSurface::new(1, 1).unwrap();
        s.clear(BLUE);
        s.fill_polygon(
            &square(0.0, 0.0, 1.0, 1.0),
            Rgba {
                r: 255,
                g: 0,
                b: 0,
                a: 128,
            },
        );
        let px = s.buffer().get(0, 0).unwrap();
        assert_eq!(px.a, 255);
        assert!((126..=130).contains(&px.r), "r = {}", px.r);
        assert!((125..=129).contains(&px.b), "b = {}", px.b);
    }

    #[test]
    fn backend_creates_matching_target() {
        let backend = SoftwareBackend;
        let target = backend.create_target(7, 3).unwrap();
        assert_eq!((target.width(), target.height()), (7, 3));
        assert!(backend.create_target(0, 3).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn random_polygons_never_panic(
                pts in prop::collection::vec((-50.0_f64..50.0, -50.0_f64..50.0), 3..20),
            ) {
                let mut s = SoftwareSurface::new(32, 32).unwrap();
                let pts: Vec<DVec2> = pts.into_iter().map(|(x, y)| DVec2::new(x, y)).collect();
                s.fill_polygon(&pts, RED);
                prop_assert_eq!(s.buffer().data().len(), 32 * 32 * 4);
            }

            #[test]
            fn circles_never_panic(
                cx in -20.0_f64..60.0,
                cy in -20.0_f64..60.0,
                r in 0.0_f64..40.0,
            ) {
                let mut s = SoftwareSurface::new(32, 32).unwrap();
                s.fill_circle(DVec2::new(cx, cy), r, RED);
                for px in s.buffer().data().chunks_exact(CHANNELS) {
                    prop_assert!(px == [0, 0, 0, 0] || px == [255, 0, 0, 255]);
                }
            }
        }
    }
}
