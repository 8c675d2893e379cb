// --- File: canvas.rs ---
// Drawing surface the simulation paints onto. The canvas is persistent:
// nothing is cleared between frames unless the driver asks for it.
use crate::utils::Rgb;

pub trait Canvas {
    fn fill(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb);
}

/// RGBA8 pixel buffer, row-major, no row padding.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    background: Rgb,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![background.to_rgba(); (width * height) as usize],
            background,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resizing discards the contents; the canvas comes back filled with the
    /// background color.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width * height) as usize, self.background.to_rgba());
    }

    pub fn clear(&mut self) {
        let background = self.background;
        self.fill(background);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, _] = self.pixels[(y * self.width + x) as usize];
        Some(Rgb::new(r, g, b))
    }

    /// One row of RGBA bytes.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.width) as usize;
        let end = start + self.width as usize;
        bytemuck::cast_slice(&self.pixels[start..end])
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl Canvas for PixelCanvas {
    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba());
    }

    // Scanline fill of every pixel whose offset from the center lies within
    // the radius, clipped to the canvas.
    fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb) {
        if radius < 1 {
            return;
        }
        let (cx, cy) = (center.0 as i64, center.1 as i64);
        let r = radius as i64;
        let (w, h) = (self.width as i64, self.height as i64);
        if cx + r < 0 || cy + r < 0 || cx - r >= w || cy - r >= h {
            return;
        }
        let rgba = color.to_rgba();
        let r_sq = r * r;
        let y_start = (cy - r).max(0);
        let y_end = (cy + r).min(h - 1);
        for y in y_start..=y_end {
            let dy = y - cy;
            let span = ((r_sq - dy * dy) as f64).sqrt() as i64;
            let x_start = (cx - span).max(0);
            let x_end = (cx + span).min(w - 1);
            if x_start > x_end {
                continue;
            }
            let row = (y * w) as usize;
            self.pixels[row + x_start as usize..=row + x_end as usize].fill(rgba);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[test]
    fn new_canvas_is_background() {
        let canvas = PixelCanvas::new(4, 3, BLACK);
        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 4);
        assert_eq!(canvas.pixel(3, 2), Some(BLACK));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn circle_covers_center_and_radius_extent() {
        let mut canvas = PixelCanvas::new(21, 21, BLACK);
        canvas.fill_circle((10, 10), 5, RED);
        assert_eq!(canvas.pixel(10, 10), Some(RED));
        assert_eq!(canvas.pixel(15, 10), Some(RED));
        assert_eq!(canvas.pixel(10, 5), Some(RED));
        assert_eq!(canvas.pixel(16, 10), Some(BLACK));
        // corner of the bounding box lies outside the circle
        assert_eq!(canvas.pixel(15, 15), Some(BLACK));
    }

    #[test]
    fn circle_is_clipped_at_edges() {
        let mut canvas = PixelCanvas::new(8, 8, BLACK);
        canvas.fill_circle((-2, -2), 4, RED);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        canvas.fill_circle((100, 100), 3, RED);
        canvas.fill_circle((i32::MAX, i32::MIN), i32::MAX, RED);
        assert_eq!(canvas.pixel(7, 7), Some(BLACK));
    }

    #[test]
    fn zero_radius_draws_nothing() {
        let mut canvas = PixelCanvas::new(4, 4, BLACK);
        canvas.fill_circle((2, 2), 0, RED);
        assert!(canvas.as_bytes().chunks(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn resize_resets_to_background() {
        let mut canvas = PixelCanvas::new(4, 4, BLACK);
        canvas.fill(RED);
        canvas.resize(6, 2);
        assert_eq!(canvas.width(), 6);
        assert_eq!(canvas.row(1).len(), 6 * 4);
        assert_eq!(canvas.pixel(5, 1), Some(BLACK));
    }

    #[test]
    fn clear_uses_background() {
        let mut canvas = PixelCanvas::new(2, 2, BLACK);
        canvas.fill(RED);
        canvas.clear();
        assert_eq!(canvas.pixel(1, 1), Some(BLACK));
    }
}
