//! Tiny stand-in for an animated vector canvas.
//!
//! Just enough structure (canvas → layers → shapes) to produce a realistic
//! nesting of timed scopes. Rasterization is a coverage count over a coarse
//! grid; nothing is drawn.

use scopetrace::{measure, Measure};

#[derive(Debug, Copy, Clone)]
pub enum Shape {
    Circle { cx: f32, cy: f32, r: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32 },
}

impl Shape {
    fn contains(&self, px: f32, py: f32) -> bool {
        match *self {
            Shape::Circle { cx, cy, r } => {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= r * r
            }
            Shape::Rect { x, y, w, h } => px >= x && py >= y && px < x + w && py < y + h,
        }
    }

    /// Shape at animation time `t` (seconds).
    fn at(&self, t: f32) -> Shape {
        match *self {
            Shape::Circle { cx, cy, r } => Shape::Circle {
                cx: cx + 40.0 * t.sin(),
                cy,
                r,
            },
            Shape::Rect { x, y, w, h } => Shape::Rect {
                x,
                y: y + 20.0 * t.cos(),
                w,
                h,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub shapes: Vec<Shape>,
    /// Blurred layers are timed as a whole; their passes stay out of the trace.
    pub blur: bool,
}

#[derive(Debug, Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub fps: f32,
    pub layers: Vec<Layer>,
}

impl Canvas {
    pub fn demo() -> Self {
        Self {
            width: 480,
            height: 270,
            fps: 24.0,
            layers: vec![
                Layer {
                    name: "background".into(),
                    shapes: vec![Shape::Rect {
                        x: 0.0,
                        y: 0.0,
                        w: 480.0,
                        h: 270.0,
                    }],
                    blur: false,
                },
                Layer {
                    name: "actors".into(),
                    shapes: vec![
                        Shape::Circle {
                            cx: 120.0,
                            cy: 135.0,
                            r: 40.0,
                        },
                        Shape::Circle {
                            cx: 300.0,
                            cy: 100.0,
                            r: 25.0,
                        },
                        Shape::Rect {
                            x: 200.0,
                            y: 180.0,
                            w: 60.0,
                            h: 30.0,
                        },
                    ],
                    blur: false,
                },
                Layer {
                    name: "glow".into(),
                    shapes: vec![Shape::Circle {
                        cx: 240.0,
                        cy: 135.0,
                        r: 90.0,
                    }],
                    blur: true,
                },
            ],
        }
    }

    /// Renders frame `index` and returns the number of covered samples.
    pub fn render_frame(&self, index: u32) -> u64 {
        measure!(format!("frame {index}"));
        let t = index as f32 / self.fps;

        self.layers.iter().map(|layer| self.render_layer(layer, t)).sum()
    }

    fn render_layer(&self, layer: &Layer, t: f32) -> u64 {
        let _scope = Measure::with_options(format!("layer \"{}\"", layer.name), layer.blur);

        let mut covered: u64 = layer
            .shapes
            .iter()
            .map(|shape| self.rasterize(&shape.at(t)))
            .sum();

        if layer.blur {
            for pass in 0..3 {
                measure!(format!("blur pass {pass}"));
                covered = self.blur_pass(covered);
            }
        }

        covered
    }

    fn rasterize(&self, shape: &Shape) -> u64 {
        measure!("rasterize");
        let mut covered = 0;
        for y in 0..self.height {
            for x in 0..self.width {
                if shape.contains(x as f32 + 0.5, y as f32 + 0.5) {
                    covered += 1;
                }
            }
        }
        covered
    }

    fn blur_pass(&self, covered: u64) -> u64 {
        // Box filter over the sample count; stands in for a real kernel.
        let samples = u64::from(self.width) * u64::from(self.height);
        (0..samples).fold(covered, |acc, i| acc.wrapping_add(i & 1)) - samples / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_half_open() {
        let r = Shape::Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        assert!(r.contains(0.0, 0.0));
        assert!(!r.contains(10.0, 10.0));
    }

    #[test]
    fn circle_contains_center() {
        let c = Shape::Circle {
            cx: 5.0,
            cy: 5.0,
            r: 1.0,
        };
        assert!(c.contains(5.0, 5.0));
    }

    #[test]
    fn background_covers_canvas() {
        let canvas = Canvas::demo();
        let bg = canvas.layers[0].shapes[0];
        assert_eq!(canvas.rasterize(&bg), 480 * 270);
    }

    #[test]
    fn render_closes_every_scope() {
        let sink = scopetrace::sink::CaptureSink::new();
        scopetrace::set_sink(sink.clone());

        let canvas = Canvas::demo();
        assert!(canvas.render_frame(0) > 0);
        assert_eq!(scopetrace::active_depth(), 0);

        if scopetrace::is_enabled() {
            let traces = sink.take();
            assert_eq!(traces.len(), 1);
            assert!(traces[0].contains("begin             frame 0\n"));
            assert!(traces[0].contains("layer \"glow\""));
            assert!(!traces[0].contains("blur pass"));
        }
    }
}
