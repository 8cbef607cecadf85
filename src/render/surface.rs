use crate::{
    foundation::error::{OvermarkError, OvermarkResult},
    scene::build::SceneOp,
    scene::style::Paint,
};

/// One rendered overlay frame: premultiplied RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayFrame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes of premultiplied RGBA8.
    pub data: Vec<u8>,
    /// Always true for frames produced by [`OverlaySurface`].
    pub premultiplied: bool,
}

/// The drawing surface the overlay is rasterized into.
///
/// Exclusively owned by the engine for its lifetime; each tick fully clears
/// and redraws it, so there is no torn-frame state to manage.
pub struct OverlaySurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl OverlaySurface {
    /// Allocate a surface at the displayed size.
    pub fn new(width: u32, height: u32) -> OvermarkResult<Self> {
        if width == 0 || height == 0 {
            return Err(OvermarkError::validation(
                "surface dimensions must be non-zero",
            ));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| OvermarkError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| OvermarkError::validation("surface height exceeds u16"))?;
        Ok(Self {
            width: w,
            height: h,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Clear every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    /// Rasterize a scene, replacing the surface contents.
    pub fn render(&mut self, ops: &[SceneOp]) -> OvermarkResult<()> {
        self.ctx.reset();
        for op in ops {
            match op {
                SceneOp::FillPath { path, paint } => {
                    self.ctx
                        .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    self.ctx.set_paint(paint_color(*paint));
                    self.ctx.fill_path(&bezpath_to_cpu(path));
                }
                SceneOp::StrokePath {
                    path,
                    stroke,
                    paint,
                } => {
                    self.ctx
                        .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    self.ctx
                        .set_stroke(vello_cpu::kurbo::Stroke::new(stroke.width));
                    self.ctx.set_paint(paint_color(*paint));
                    self.ctx.stroke_path(&bezpath_to_cpu(path));
                }
                SceneOp::Glyphs {
                    glyphs,
                    origin,
                    paint,
                } => {
                    self.ctx.set_transform(vello_cpu::kurbo::Affine::translate(
                        vello_cpu::kurbo::Vec2::new(origin.x, origin.y),
                    ));
                    self.ctx.set_paint(paint_color(*paint));
                    for line in glyphs.layout.lines() {
                        for item in line.items() {
                            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                                continue;
                            };
                            let out = run.glyphs().map(|g| vello_cpu::Glyph {
                                id: g.id,
                                x: g.x,
                                y: g.y,
                            });
                            self.ctx
                                .glyph_run(&glyphs.font)
                                .font_size(run.run().font_size())
                                .fill_glyphs(out);
                        }
                    }
                }
            }
        }
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        Ok(())
    }

    /// Borrow the backing pixmap.
    pub fn pixmap(&self) -> &vello_cpu::Pixmap {
        &self.pixmap
    }

    /// Copy the surface out as an [`OverlayFrame`].
    pub fn frame(&self) -> OverlayFrame {
        OverlayFrame {
            width: self.width(),
            height: self.height(),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    /// Premultiplied RGBA8 value at `(x, y)`, for inspection.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let data = self.pixmap.data_as_u8_slice();
        Some([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]])
    }
}

impl std::fmt::Debug for OverlaySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlaySurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

fn paint_color(paint: Paint) -> vello_cpu::peniko::Color {
    let c = paint.color;
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, paint.effective_alpha())
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
