// ============================================================================
// IMPORTS
// ============================================================================

use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::{Path, PathBuf};

use image::RgbaImage;
use rusttype::{point, Font, PositionedGlyph, Scale};
use tracing::{debug, warn};

use crate::basis::{Decomposition, BASIS_LEN, PRIME_BASIS};
use crate::config::{ChartConfig, Color};
use crate::error::{PrimeClockError, Result};

/// Fonts tried, in order, when no explicit font path is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Side of a legend color swatch, in pixels.
const LEGEND_SWATCH: i32 = 12;
/// Space between a legend swatch and its label.
const LEGEND_GAP: i32 = 6;

// ============================================================================
// PUBLIC TYPES
// ============================================================================

/// Which clock hand a bar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Hours,
    Minutes,
    Seconds,
}

impl Series {
    pub const ALL: [Series; 3] = [Series::Hours, Series::Minutes, Series::Seconds];

    pub const fn name(self) -> &'static str {
        match self {
            Series::Hours => "hours",
            Series::Minutes => "minutes",
            Series::Seconds => "seconds",
        }
    }
}

/// Centre, outer radius and radial scale of the polar axis, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarLayout {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Count drawn at the centre. Zero sits on the outer edge.
    pub radial_limit: u32,
}

impl PolarLayout {
    /// Pixel radius of a count on the inverted radial axis.
    pub fn radius_of(&self, count: u32) -> f64 {
        let fraction = f64::from(count.min(self.radial_limit)) / f64::from(self.radial_limit);
        self.radius * (1.0 - fraction)
    }

    /// Screen position of a chart angle (0 at the top, clockwise) and radius.
    pub fn point_at(&self, angle: f64, radius: f64) -> (f64, f64) {
        let screen = angle - FRAC_PI_2;
        (self.cx + screen.cos() * radius, self.cy + screen.sin() * radius)
    }
}

/// One bar as placed on the chart. Angles run clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub series: Series,
    pub slot: usize,
    pub prime: u32,
    pub count: u32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// A rendered chart for one time.
#[derive(Debug, Clone)]
pub struct Frame {
    pub label: String,
    pub image: RgbaImage,
    pub layout: PolarLayout,
    pub bars: Vec<BarGeometry>,
}

/// Angular width of one prime's slot.
pub fn slot_width() -> f64 {
    TAU / BASIS_LEN as f64
}

/// Places the polar axis inside the image described by `config`.
pub fn polar_layout(config: &ChartConfig, series: [&Decomposition; 3]) -> Result<PolarLayout> {
    let plot_height = config.height as i32 - config.title_height;
    let radius = f64::from((config.width as i32).min(plot_height) / 2 - config.margin);
    if radius < 1.0 {
        return Err(PrimeClockError::Render(format!(
            "{}x{} image leaves no room for the chart",
            config.width, config.height
        )));
    }

    let max_count = series.iter().map(|d| d.max_count()).max().unwrap_or(0);
    Ok(PolarLayout {
        cx: f64::from(config.width) / 2.0,
        cy: f64::from(config.title_height) + f64::from(plot_height) / 2.0,
        radius,
        radial_limit: max_count + 1,
    })
}

/// Bars for the hours, minutes and seconds series, in series then slot order.
///
/// Slot `i` starts at `i * slot_width()` from the top and bars are centred in
/// their slot. Zero counts produce no bar.
pub fn layout_bars(
    config: &ChartConfig,
    layout: &PolarLayout,
    series: [&Decomposition; 3],
) -> Vec<BarGeometry> {
    let width = slot_width();
    let inset = width * (1.0 - config.bar_fill.clamp(0.0, 1.0)) / 2.0;

    Series::ALL
        .iter()
        .zip(series)
        .flat_map(|(&kind, decomposition)| {
            PRIME_BASIS
                .iter()
                .enumerate()
                .filter_map(move |(slot, &prime)| {
                    let count = decomposition.count(slot);
                    (count > 0).then(|| BarGeometry {
                        series: kind,
                        slot,
                        prime,
                        count,
                        start_angle: slot as f64 * width + inset,
                        end_angle: (slot + 1) as f64 * width - inset,
                        inner_radius: layout.radius_of(count),
                        outer_radius: layout.radius,
                    })
                })
        })
        .collect()
}

// ============================================================================
// RENDERER
// ============================================================================

/// Draws three decompositions as overlaid bar series on a polar axis.
pub struct PolarRenderer {
    config: ChartConfig,
    font: Option<Font<'static>>,
}

impl PolarRenderer {
    /// Loads the configured font. A missing explicit font is an error; when
    /// none is configured and no system font is found, text is left out.
    pub fn new(config: ChartConfig) -> Result<Self> {
        let font = match &config.font_path {
            Some(path) => Some(load_font(path)?),
            None => find_system_font(),
        };
        if font.is_none() {
            warn!("no usable font found, chart text will be omitted");
        }
        Ok(Self { config, font })
    }

    /// A renderer that never draws text.
    pub fn without_text(config: ChartConfig) -> Self {
        Self { config, font: None }
    }

    pub fn render(
        &self,
        hours: &Decomposition,
        minutes: &Decomposition,
        seconds: &Decomposition,
        label: &str,
    ) -> Result<Frame> {
        let series = [hours, minutes, seconds];
        let layout = polar_layout(&self.config, series)?;
        let bars = layout_bars(&self.config, &layout, series);

        let scene = self.compose(&layout, &bars, label);
        let mut image = RgbaImage::new(self.config.width, self.config.height);
        {
            let mut canvas = Canvas::new(
                &mut image,
                self.config.width as usize,
                self.config.height as usize,
            );
            scene.render(&mut canvas, self.font.as_ref());
        }

        debug!(label, bars = bars.len(), "rendered polar chart");
        Ok(Frame {
            label: label.to_string(),
            image,
            layout,
            bars,
        })
    }

    fn compose(&self, layout: &PolarLayout, bars: &[BarGeometry], label: &str) -> Scene {
        let config = &self.config;
        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(config.background_color));

        // radial grid, one ring per count step
        for value in 0..layout.radial_limit {
            scene.add_command(DrawCommand::Ring {
                cx: layout.cx,
                cy: layout.cy,
                r: layout.radius_of(value),
                thickness: config.grid_thickness,
                color: config.grid_color,
            });
        }

        for slot in 0..BASIS_LEN {
            let angle = slot as f64 * slot_width();
            let (x, y) = layout.point_at(angle, layout.radius);
            scene.add_command(DrawCommand::Line {
                x0: layout.cx,
                y0: layout.cy,
                x1: x,
                y1: y,
                thickness: config.grid_thickness,
                color: config.grid_color,
            });
        }

        let colors = config.series_colors();
        for bar in bars {
            scene.add_command(DrawCommand::Sector {
                cx: layout.cx,
                cy: layout.cy,
                start_angle: bar.start_angle,
                end_angle: bar.end_angle,
                inner_radius: bar.inner_radius,
                outer_radius: bar.outer_radius,
                color: colors[bar.series as usize],
                alpha: config.series_alpha,
            });
        }

        for (slot, prime) in PRIME_BASIS.iter().enumerate() {
            let angle = (slot as f64 + 0.5) * slot_width();
            let (x, y) = layout.point_at(angle, layout.radius + config.label_offset);
            scene.add_command(DrawCommand::Text {
                x: x.round() as i32,
                y: y.round() as i32,
                text: prime.to_string(),
                font_size: config.label_font_size,
                color: config.text_color,
                anchor: TextAnchor::Centre,
            });
        }

        scene.add_command(DrawCommand::Text {
            x: config.width as i32 / 2,
            y: config.title_height / 2 + 4,
            text: format!("Prime Time {label}"),
            font_size: config.title_font_size,
            color: config.text_color,
            anchor: TextAnchor::Centre,
        });

        // legend along the bottom edge
        let legend_y = config.height as i32 - 18;
        let spacing = config.width as i32 / 3;
        for (index, kind) in Series::ALL.iter().enumerate() {
            let x = spacing / 2 + spacing * index as i32 - 36;
            scene.add_command(DrawCommand::Swatch {
                x,
                y: legend_y - LEGEND_SWATCH / 2,
                size: LEGEND_SWATCH,
                color: colors[index],
                alpha: config.series_alpha,
            });
            scene.add_command(DrawCommand::Text {
                x: x + LEGEND_SWATCH + LEGEND_GAP,
                y: legend_y,
                text: kind.name().to_string(),
                font_size: config.label_font_size,
                color: config.text_color,
                anchor: TextAnchor::Left,
            });
        }

        scene
    }
}

fn load_font(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path)?;
    Font::try_from_vec(data).ok_or_else(|| {
        PrimeClockError::Render(format!("{} is not a usable font", path.display()))
    })
}

fn find_system_font() -> Option<Font<'static>> {
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .filter(|path| path.is_file())
        .find_map(|path| match load_font(&path) {
            Ok(font) => {
                debug!(path = %path.display(), "using system font");
                Some(font)
            }
            Err(err) => {
                debug!(path = %path.display(), %err, "skipping font");
                None
            }
        })
}

// ============================================================================
// RETAINED MODE ABSTRACTIONS
// ============================================================================

#[derive(Clone, Debug)]
enum DrawCommand {
    Clear(Color),
    Ring {
        cx: f64,
        cy: f64,
        r: f64,
        thickness: f32,
        color: Color,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        thickness: f32,
        color: Color,
    },
    Sector {
        cx: f64,
        cy: f64,
        start_angle: f64,
        end_angle: f64,
        inner_radius: f64,
        outer_radius: f64,
        color: Color,
        alpha: f32,
    },
    Swatch {
        x: i32,
        y: i32,
        size: i32,
        color: Color,
        alpha: f32,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        font_size: f32,
        color: Color,
        anchor: TextAnchor,
    },
}

/// Horizontal reference point of a text command. Text is always centred vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TextAnchor {
    Centre,
    Left,
}

struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    fn add_command(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn render(&self, canvas: &mut Canvas, font: Option<&Font>) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear(color) => canvas.clear(*color),
                DrawCommand::Ring {
                    cx,
                    cy,
                    r,
                    thickness,
                    color,
                } => render_ring(canvas, *cx, *cy, *r, *thickness, *color),
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    thickness,
                    color,
                } => draw_thick_line_aa(canvas, *x0, *y0, *x1, *y1, *thickness, *color),
                DrawCommand::Sector {
                    cx,
                    cy,
                    start_angle,
                    end_angle,
                    inner_radius,
                    outer_radius,
                    color,
                    alpha,
                } => render_sector(
                    canvas,
                    (*cx, *cy),
                    (*start_angle, *end_angle),
                    (*inner_radius, *outer_radius),
                    *color,
                    *alpha,
                ),
                DrawCommand::Swatch {
                    x,
                    y,
                    size,
                    color,
                    alpha,
                } => {
                    for py in *y..*y + *size {
                        for px in *x..*x + *size {
                            set_pixel(canvas, px, py, *color, *alpha);
                        }
                    }
                }
                DrawCommand::Text {
                    x,
                    y,
                    text,
                    font_size,
                    color,
                    anchor,
                } => {
                    if let Some(font) = font {
                        let scale = Scale::uniform(*font_size);
                        draw_text(canvas, *x, *y, text, font, scale, *color, *anchor);
                    }
                }
            }
        }
    }
}

// ============================================================================
// CORE DATA TYPES
// ============================================================================

struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Pixel bounds of a circle, clipped to the canvas.
    fn clip_circle(&self, cx: f64, cy: f64, r: f64) -> (i32, i32, i32, i32) {
        let min_x = ((cx - r).floor() as i32 - 1).max(0);
        let max_x = ((cx + r).ceil() as i32 + 1).min(self.width as i32 - 1);
        let min_y = ((cy - r).floor() as i32 - 1).max(0);
        let max_y = ((cy + r).ceil() as i32 + 1).min(self.height as i32 - 1);
        (min_x, max_x, min_y, max_y)
    }
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

fn set_pixel(canvas: &mut Canvas, x: i32, y: i32, color: Color, alpha: f32) {
    if x < 0 || y < 0 || x as usize >= canvas.width || y as usize >= canvas.height {
        return;
    }
    let idx = (y as usize * canvas.width + x as usize) * 4;
    let a = alpha.clamp(0.0, 1.0);
    let src = [color.r as f32, color.g as f32, color.b as f32];
    for (channel, value) in src.iter().enumerate() {
        let dst = canvas.frame[idx + channel] as f32;
        canvas.frame[idx + channel] = (value * a + dst * (1.0 - a)).round() as u8;
    }
    canvas.frame[idx + 3] = 0xff;
}

fn draw_thick_line_aa(
    canvas: &mut Canvas,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    thickness: f32,
    color: Color,
) {
    let pad = thickness.ceil() as i32 + 1;
    let min_x = x0.min(x1).floor() as i32 - pad;
    let max_x = x0.max(x1).ceil() as i32 + pad;
    let min_y = y0.min(y1).floor() as i32 - pad;
    let max_y = y0.max(y1).ceil() as i32 + pad;
    let dx = (x1 - x0) as f32;
    let dy = (y1 - y0) as f32;
    let len_sq = (dx * dx + dy * dy).max(f32::EPSILON);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 - x0 as f32;
            let py = y as f32 - y0 as f32;
            let t = ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0);
            let lx = x0 as f32 + t * dx;
            let ly = y0 as f32 + t * dy;
            let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
            let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
            if aa > 0.01 {
                set_pixel(canvas, x, y, color, aa);
            }
        }
    }
}

fn render_ring(canvas: &mut Canvas, cx: f64, cy: f64, r: f64, thickness: f32, color: Color) {
    let half = f64::from(thickness) / 2.0;
    let (min_x, max_x, min_y, max_y) = canvas.clip_circle(cx, cy, r + half + 1.0);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dist = (f64::from(x) - cx).hypot(f64::from(y) - cy);
            let aa = (half - (dist - r).abs() + 0.5).clamp(0.0, 1.0);
            if aa > 0.01 {
                set_pixel(canvas, x, y, color, aa as f32);
            }
        }
    }
}

/// Fills an annular sector. Angles are chart angles, clockwise from the top.
fn render_sector(
    canvas: &mut Canvas,
    (cx, cy): (f64, f64),
    (start_angle, end_angle): (f64, f64),
    (inner_radius, outer_radius): (f64, f64),
    color: Color,
    alpha: f32,
) {
    let (min_x, max_x, min_y, max_y) = canvas.clip_circle(cx, cy, outer_radius + 1.0);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = f64::from(x) - cx;
            let dy = f64::from(y) - cy;
            let dist = dx.hypot(dy);
            let angle = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);

            // edge distances in pixels give a one pixel soft edge
            let angular = ((angle - start_angle).min(end_angle - angle) * dist + 0.5).clamp(0.0, 1.0);
            let radial = ((dist - inner_radius).min(outer_radius - dist) + 0.5).clamp(0.0, 1.0);
            let coverage = (angular * radial) as f32 * alpha;
            if coverage > 0.01 {
                set_pixel(canvas, x, y, color, coverage);
            }
        }
    }
}

/// Draws `text` centred vertically on `y`, horizontally placed by `anchor`.
fn draw_text(
    canvas: &mut Canvas,
    x: i32,
    y: i32,
    text: &str,
    font: &Font,
    scale: Scale,
    color: Color,
    anchor: TextAnchor,
) {
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<PositionedGlyph> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();

    let (min_x, max_x, min_y, max_y) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
        (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
        |(min_x, max_x, min_y, max_y), bb| {
            (
                min_x.min(bb.min.x),
                max_x.max(bb.max.x),
                min_y.min(bb.min.y),
                max_y.max(bb.max.y),
            )
        },
    );
    if min_x >= max_x || min_y >= max_y {
        return;
    }
    let offset_x = match anchor {
        TextAnchor::Centre => x - (max_x - min_x) / 2,
        TextAnchor::Left => x,
    };
    let offset_y = y - (max_y - min_y) / 2;
    for glyph in glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = offset_x + gx as i32 + bb.min.x - min_x;
                let py = offset_y + gy as i32 + bb.min.y - min_y;
                set_pixel(canvas, px, py, color, v);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::factorize;

    fn renderer() -> PolarRenderer {
        PolarRenderer::without_text(ChartConfig::builder().width(200).height(220).margin(20).build())
    }

    #[test]
    fn slot_zero_starts_at_the_top() {
        let config = ChartConfig::builder().bar_fill(1.0).build();
        let two = factorize(2).unwrap();
        let one = factorize(1).unwrap();
        let layout = polar_layout(&config, [&two, &one, &one]).unwrap();
        let bars = layout_bars(&config, &layout, [&two, &one, &one]);

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].slot, 0);
        assert_eq!(bars[0].start_angle, 0.0);
        let (x, y) = layout.point_at(0.0, layout.radius);
        assert!((x - layout.cx).abs() < 1e-9);
        assert!(y < layout.cy);
    }

    #[test]
    fn larger_counts_reach_closer_to_the_centre() {
        let config = ChartConfig::default();
        let (h, m, s) = (factorize(32).unwrap(), factorize(4).unwrap(), factorize(2).unwrap());
        let layout = polar_layout(&config, [&h, &m, &s]).unwrap();
        assert_eq!(layout.radial_limit, 6);

        let bars = layout_bars(&config, &layout, [&h, &m, &s]);
        let inner: Vec<f64> = bars.iter().map(|b| b.inner_radius).collect();
        assert!(inner[0] < inner[1] && inner[1] < inner[2]);
        assert!(bars.iter().all(|b| b.outer_radius == layout.radius));
        assert!(inner[0] > 0.0);
    }

    #[test]
    fn series_overlay_in_the_same_slot() {
        let config = ChartConfig::default();
        let six = factorize(6).unwrap();
        let layout = polar_layout(&config, [&six, &six, &six]).unwrap();
        let bars = layout_bars(&config, &layout, [&six, &six, &six]);

        assert_eq!(bars.len(), 6);
        let slot_zero: Vec<&BarGeometry> = bars.iter().filter(|b| b.slot == 0).collect();
        assert_eq!(slot_zero.len(), 3);
        assert!(slot_zero.windows(2).all(|w| w[0].start_angle == w[1].start_angle
            && w[0].inner_radius == w[1].inner_radius));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = renderer();
        let (h, m, s) = (factorize(13).unwrap(), factorize(5).unwrap(), factorize(60).unwrap());
        let a = renderer.render(&h, &m, &s, "13:05:60").unwrap();
        let b = renderer.render(&h, &m, &s, "13:05:60").unwrap();

        assert_eq!(a.bars, b.bars);
        assert_eq!(a.image.as_raw(), b.image.as_raw());
        assert_eq!(a.image.dimensions(), (200, 220));
    }

    #[test]
    fn bars_are_tinted_and_background_is_not() {
        let renderer = renderer();
        let (h, m, s) = (factorize(2).unwrap(), factorize(1).unwrap(), factorize(1).unwrap());
        let frame = renderer.render(&h, &m, &s, "02:01:01").unwrap();
        let bar = frame.bars[0];

        let mid_angle = (bar.start_angle + bar.end_angle) / 2.0;
        let mid_radius = (bar.inner_radius + bar.outer_radius) / 2.0;
        let (x, y) = frame.layout.point_at(mid_angle, mid_radius);
        let inside = frame.image.get_pixel(x.round() as u32, y.round() as u32);
        assert_ne!(inside.0, [0xff, 0xff, 0xff, 0xff]);

        assert_eq!(frame.image.get_pixel(1, 1).0, [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn legend_labels_start_right_of_their_swatch() {
        let renderer = renderer();
        let one = factorize(1).unwrap();
        let layout = polar_layout(&renderer.config, [&one, &one, &one]).unwrap();
        let scene = renderer.compose(&layout, &[], "01:01:01");

        let swatches: Vec<(i32, i32)> = scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Swatch { x, size, .. } => Some((*x, *size)),
                _ => None,
            })
            .collect();
        let labels: Vec<(i32, TextAnchor)> = scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { x, text, anchor, .. }
                    if Series::ALL.iter().any(|s| s.name() == text.as_str()) =>
                {
                    Some((*x, *anchor))
                }
                _ => None,
            })
            .collect();

        assert_eq!(swatches.len(), 3);
        assert_eq!(labels.len(), 3);
        for ((swatch_x, size), (label_x, anchor)) in swatches.into_iter().zip(labels) {
            assert_eq!(anchor, TextAnchor::Left);
            assert_eq!(label_x, swatch_x + size + LEGEND_GAP);
        }
    }

    #[test]
    fn too_small_image_is_a_render_error() {
        let config = ChartConfig::builder().width(40).height(40).build();
        let renderer = PolarRenderer::without_text(config);
        let one = factorize(1).unwrap();
        assert!(matches!(
            renderer.render(&one, &one, &one, "01:01:01"),
            Err(PrimeClockError::Render(_))
        ));
    }

    #[test]
    fn missing_explicit_font_is_an_error() {
        let config = ChartConfig::builder()
            .font_path("/definitely/not/a/font.ttf")
            .build();
        assert!(PolarRenderer::new(config).is_err());
    }
}
