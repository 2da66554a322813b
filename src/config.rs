use bon::Builder;
use std::path::PathBuf;

/// Default location of the persisted decomposition table.
pub const DEFAULT_CACHE_PATH: &str = "prime_factors.csv";

/// Color representation for chart elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Where the decomposition table lives and whether to rebuild it before use.
#[derive(Debug, Clone, Builder)]
pub struct CacheConfig {
    #[builder(default)]
    pub rebuild: bool,
    #[builder(into, default = PathBuf::from(DEFAULT_CACHE_PATH))]
    pub cache_path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Appearance of the polar chart.
#[derive(Debug, Clone, Builder)]
pub struct ChartConfig {
    // Image size
    #[builder(default = 600)]
    pub width: u32,
    #[builder(default = 600)]
    pub height: u32,

    // Plot area
    #[builder(default = 70)]
    pub margin: i32,
    #[builder(default = 40)]
    pub title_height: i32,
    /// Fraction of each angular slot a bar covers.
    #[builder(default = 0.9)]
    pub bar_fill: f64,
    #[builder(default = 0.5)]
    pub series_alpha: f32,
    #[builder(default = 1.0)]
    pub grid_thickness: f32,

    // Colors
    #[builder(default = Color::new(0x1f, 0x77, 0xb4))]
    pub hours_color: Color,
    #[builder(default = Color::new(0xff, 0x7f, 0x0e))]
    pub minutes_color: Color,
    #[builder(default = Color::new(0x2c, 0xa0, 0x2c))]
    pub seconds_color: Color,
    #[builder(default = Color::new(0xff, 0xff, 0xff))]
    pub background_color: Color,
    #[builder(default = Color::new(0xc8, 0xc8, 0xc8))]
    pub grid_color: Color,
    #[builder(default = Color::new(0x00, 0x00, 0x00))]
    pub text_color: Color,

    // Text
    #[builder(default = 16.0)]
    pub label_font_size: f32,
    #[builder(default = 24.0)]
    pub title_font_size: f32,
    #[builder(default = 18.0)]
    pub label_offset: f64,
    #[builder(into)]
    pub font_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ChartConfig {
    /// Colors in hours, minutes, seconds order.
    pub fn series_colors(&self) -> [Color; 3] {
        [self.hours_color, self.minutes_color, self.seconds_color]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_defaults() {
        let config = CacheConfig::default();
        assert!(!config.rebuild);
        assert_eq!(config.cache_path, PathBuf::from(DEFAULT_CACHE_PATH));
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = ChartConfig::builder().width(320).series_alpha(0.25).build();
        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
        assert_eq!(config.series_alpha, 0.25);
        assert!(config.font_path.is_none());
    }
}
