use ratatui::style::{Color, palette::tailwind};

use crate::theme::Theme;

pub struct TableColors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub row_fg: Color,
    pub selected_row_style_fg: Color,
    pub normal_row_color: Color,
    pub alt_row_color: Color,
    pub footer_border_color: Color,
    pub accent: Color,
}

impl TableColors {
    pub const fn new(color: &tailwind::Palette, theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                buffer_bg: tailwind::SLATE.c950,
                header_bg: color.c900,
                header_fg: tailwind::SLATE.c200,
                row_fg: tailwind::SLATE.c200,
                selected_row_style_fg: color.c400,
                normal_row_color: tailwind::SLATE.c950,
                alt_row_color: tailwind::SLATE.c900,
                footer_border_color: color.c400,
                accent: color.c400,
            },
            Theme::Light => Self {
                buffer_bg: tailwind::SLATE.c100,
                header_bg: color.c200,
                header_fg: tailwind::SLATE.c900,
                row_fg: tailwind::SLATE.c900,
                selected_row_style_fg: color.c600,
                normal_row_color: tailwind::SLATE.c100,
                alt_row_color: tailwind::SLATE.c200,
                footer_border_color: color.c600,
                accent: color.c600,
            },
        }
    }

    /// Red for a negative 24h change, green for a positive one.
    pub fn change_color(&self, change_pct: f64) -> Color {
        if change_pct < 0.0 {
            Color::Red
        } else if change_pct > 0.0 {
            Color::Green
        } else {
            self.row_fg
        }
    }
}
