//! Charcoal theme for the overlay.
//!
//! A flat dark grey with a blue accent, applied to the egui context once at
//! startup. Kept as one table so tweaking colors stays a one-file job.

use egui::{vec2, Color32, Margin, Rounding, Stroke, Style, Visuals};

// Palette
const TEXT: Color32 = Color32::from_rgb(242, 242, 242);
const WINDOW_BG: Color32 = Color32::from_rgb(33, 36, 38);
const TITLE_BG: Color32 = Color32::from_rgb(20, 20, 23);
const MENU_BG: Color32 = Color32::from_rgb(36, 36, 36);
const FRAME_BG: Color32 = Color32::from_rgb(64, 64, 64);
const FRAME_HOVER: Color32 = Color32::from_rgb(97, 97, 97);
const FRAME_ACTIVE: Color32 = Color32::from_rgba_premultiplied(66, 66, 66, 99);
const HEADER_BG: Color32 = Color32::from_rgb(56, 56, 56);
const BORDER: Color32 = Color32::from_rgba_premultiplied(55, 55, 64, 128);
const SCROLL_BG: Color32 = Color32::from_rgb(5, 5, 5);
const ACCENT: Color32 = Color32::from_rgb(28, 163, 235);
const SELECTION: Color32 = Color32::from_rgba_premultiplied(23, 52, 86, 89);

/// Install the theme on the given context.
pub fn apply(ctx: &egui::Context) {
    let mut style = Style {
        visuals: Visuals::dark(),
        ..Default::default()
    };

    let visuals = &mut style.visuals;
    visuals.override_text_color = Some(TEXT);
    visuals.window_fill = WINDOW_BG;
    visuals.panel_fill = WINDOW_BG;
    visuals.window_stroke = Stroke::new(1.0, BORDER);
    visuals.window_rounding = Rounding::same(7.0);
    visuals.menu_rounding = Rounding::same(4.0);
    visuals.extreme_bg_color = SCROLL_BG;
    visuals.faint_bg_color = TITLE_BG;
    visuals.hyperlink_color = ACCENT;
    visuals.selection.bg_fill = SELECTION;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = MENU_BG;
    widgets.noninteractive.weak_bg_fill = MENU_BG;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);
    widgets.noninteractive.rounding = Rounding::same(3.0);

    widgets.inactive.bg_fill = FRAME_BG;
    widgets.inactive.weak_bg_fill = FRAME_BG;
    widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT);
    widgets.inactive.rounding = Rounding::same(3.0);

    widgets.hovered.bg_fill = FRAME_HOVER;
    widgets.hovered.weak_bg_fill = FRAME_HOVER;
    widgets.hovered.fg_stroke = Stroke::new(1.5, TEXT);
    widgets.hovered.rounding = Rounding::same(3.0);

    widgets.active.bg_fill = FRAME_ACTIVE;
    widgets.active.weak_bg_fill = FRAME_ACTIVE;
    widgets.active.fg_stroke = Stroke::new(1.5, TEXT);
    widgets.active.rounding = Rounding::same(3.0);

    widgets.open.bg_fill = HEADER_BG;
    widgets.open.weak_bg_fill = HEADER_BG;
    widgets.open.fg_stroke = Stroke::new(1.0, TEXT);

    style.spacing.item_spacing = vec2(6.0, 6.0);
    style.spacing.button_padding = vec2(5.0, 2.0);
    style.spacing.window_margin = Margin::same(8.0);
    style.spacing.menu_margin = Margin::same(6.0);
    style.spacing.indent = 25.0;
    style.spacing.scroll.bar_width = 15.0;

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_installs_charcoal_style() {
        let ctx = egui::Context::default();
        apply(&ctx);
        let style = ctx.style();
        assert_eq!(style.visuals.window_fill, WINDOW_BG);
        assert_eq!(style.visuals.window_rounding, Rounding::same(7.0));
        assert_eq!(style.spacing.item_spacing, vec2(6.0, 6.0));
    }
}
