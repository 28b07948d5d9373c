use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Theme { dark: ThemeDetails::slate_dark(), light: ThemeDetails::slate_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn word(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(18.0).strong().color(self.details(ctx).accent)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn blue(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).blue
    }

    pub fn yellow(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).yellow
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn card(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).card
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    panel: Color32,
    card: Color32,
    foreground: Color32,
    comment: Color32,
    selection: Color32,
    accent: Color32,
    red: Color32,
    green: Color32,
    blue: Color32,
    yellow: Color32,
}

impl ThemeDetails {
    fn slate_dark() -> Self {
        Self {
            background: Color32::from_rgb(30, 33, 41),
            panel: Color32::from_rgb(24, 26, 33),
            card: Color32::from_rgb(39, 43, 54),
            foreground: Color32::from_rgb(226, 228, 235),
            comment: Color32::from_rgb(128, 136, 160),
            selection: Color32::from_rgb(62, 68, 88),
            accent: Color32::from_rgb(250, 204, 120),
            red: Color32::from_rgb(248, 113, 113),
            green: Color32::from_rgb(74, 222, 128),
            blue: Color32::from_rgb(96, 165, 250),
            yellow: Color32::from_rgb(250, 204, 21),
        }
    }

    fn slate_light() -> Self {
        Self {
            background: Color32::from_rgb(250, 250, 252),
            panel: Color32::from_rgb(241, 243, 247),
            card: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(31, 41, 55),
            comment: Color32::from_rgb(107, 114, 128),
            selection: Color32::from_rgb(209, 219, 245),
            accent: Color32::from_rgb(180, 100, 20),
            red: Color32::from_rgb(220, 38, 38),
            green: Color32::from_rgb(22, 163, 74),
            blue: Color32::from_rgb(37, 99, 235),
            yellow: Color32::from_rgb(202, 138, 4),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn set_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    let (theme, preference) = if dark_mode {
        (egui::Theme::Dark, egui::ThemePreference::Dark)
    } else {
        (egui::Theme::Light, egui::ThemePreference::Light)
    };

    ctx.set_theme(theme);
    ctx.options_mut(|o| o.theme_preference = preference);
}

fn set_theme_variant(ctx: &egui::Context, details: &ThemeDetails, is_dark: bool) {
    let (mut visuals, variant) = if is_dark {
        (Visuals::dark(), egui::Theme::Dark)
    } else {
        (Visuals::light(), egui::Theme::Light)
    };

    visuals.window_fill = details.background;
    visuals.panel_fill = details.panel;
    visuals.extreme_bg_color = details.card;
    visuals.hyperlink_color = details.blue;
    visuals.error_fg_color = details.red;
    visuals.selection.bg_fill = details.selection;
    visuals.override_text_color = Some(details.foreground);
    visuals.widgets.hovered.bg_stroke = Stroke { color: details.blue, ..visuals.widgets.hovered.bg_stroke };
    visuals.widgets.active.bg_stroke = Stroke { color: details.blue, ..visuals.widgets.active.bg_stroke };

    ctx.set_visuals_of(variant, visuals);
}
