use image::{Rgba, RgbaImage};

/// Filled shape in unit coordinates (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    RoundRect {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        radius: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
    },
    /// Upper half of an annulus
    Arch {
        cx: f32,
        cy: f32,
        outer: f32,
        inner: f32,
    },
}

impl Shape {
    pub fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::RoundRect {
            x0,
            y0,
            x1,
            y1,
            radius: 0.0,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        match *self {
            Self::RoundRect {
                x0,
                y0,
                x1,
                y1,
                radius,
            } => {
                if x < x0 || x > x1 || y < y0 || y > y1 {
                    return false;
                }
                let r = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);
                let nx = x.clamp(x0 + r, x1 - r);
                let ny = y.clamp(y0 + r, y1 - r);
                (x - nx).powi(2) + (y - ny).powi(2) <= r * r
            }
            Self::Circle { cx, cy, r } => (x - cx).powi(2) + (y - cy).powi(2) <= r * r,
            Self::Arch {
                cx,
                cy,
                outer,
                inner,
            } => {
                let d2 = (x - cx).powi(2) + (y - cy).powi(2);
                y <= cy && d2 <= outer * outer && d2 >= inner * inner
            }
        }
    }

    /// Bounding box as (x0, y0, x1, y1)
    fn bounds(&self) -> (f32, f32, f32, f32) {
        match *self {
            Self::RoundRect { x0, y0, x1, y1, .. } => (x0, y0, x1, y1),
            Self::Circle { cx, cy, r } => (cx - r, cy - r, cx + r, cy + r),
            Self::Arch { cx, cy, outer, .. } => (cx - outer, cy - outer, cx + outer, cy),
        }
    }
}

/// Square RGBA drawing surface, transparent by default
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        Self {
            img: RgbaImage::new(size, size),
        }
    }

    pub fn size(&self) -> u32 {
        self.img.width()
    }

    /// Paints every pixel whose centre lies inside `shape`
    pub fn fill(&mut self, shape: &Shape, color: Rgba<u8>) {
        let size = self.size();
        if size == 0 {
            return;
        }
        let scale = size as f32;
        let (bx0, by0, bx1, by1) = shape.bounds();
        let to_px = |v: f32| ((v * scale).floor().max(0.0) as u32).min(size);
        let (px0, py0) = (to_px(bx0), to_px(by0));
        let (px1, py1) = (to_px(bx1) + 1, to_px(by1) + 1);

        for py in py0..py1.min(size) {
            let y = (py as f32 + 0.5) / scale;
            for px in px0..px1.min(size) {
                let x = (px as f32 + 0.5) / scale;
                if shape.contains(x, y) {
                    self.img.put_pixel(px, py, color);
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }
}
