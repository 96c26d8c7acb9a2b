// File: crates/dashboard-render-skia/src/theme.rs
// Summary: Light/Dark theming for widget rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    /// Trace colors, cycled by trace (or slice) index.
    pub palette: [skia::Color; 6],
}

impl Theme {
    /// Close to the backend's `plotly_white` template.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 235, 240, 248),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 42, 63, 95),
            title: skia::Color::from_argb(255, 20, 20, 30),
            palette: [
                skia::Color::from_argb(255, 99, 110, 250),
                skia::Color::from_argb(255, 239, 85, 59),
                skia::Color::from_argb(255, 0, 204, 150),
                skia::Color::from_argb(255, 171, 99, 250),
                skia::Color::from_argb(255, 255, 161, 90),
                skia::Color::from_argb(255, 25, 211, 243),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            title: skia::Color::from_argb(255, 245, 245, 250),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 230, 70),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 96, 156, 255),
            ],
        }
    }

    pub fn color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    [Theme::light(), Theme::dark()]
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
