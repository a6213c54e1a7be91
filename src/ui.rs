//! The immediate-mode overlay: menu bar on top, properties panel on the
//! right. The central region is left to the GL scene underneath.

use egui::{Color32, RichText};

use crate::state::Easel;

/// What the overlay asked the app to do this frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiOutput {
    pub quit: bool,
}

/// Build the overlay for one frame.
///
/// `clear_color` is the live scene background; `shader_ok` reports whether
/// the triangle's shader program linked at startup.
pub fn draw(
    ctx: &egui::Context,
    easel: &mut Easel,
    clear_color: &mut [f32; 4],
    shader_ok: bool,
) -> UiOutput {
    let mut out = UiOutput::default();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    out.quit = true;
                    ui.close_menu();
                }
            });

            ui.menu_button("View", |ui| {
                let mut show = easel.settings.show_properties;
                if ui.checkbox(&mut show, "Properties panel").changed() {
                    easel.set_show_properties(show);
                }

                let mut wireframe = easel.settings.wireframe;
                if ui.checkbox(&mut wireframe, "Wireframe").changed() {
                    easel.set_wireframe(wireframe);
                }
            });
        });
    });

    egui::SidePanel::right("properties")
        .resizable(true)
        .default_width(240.0)
        .show_animated(ctx, easel.settings.show_properties, |ui| {
            ui.heading("Properties");
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Background");
                ui.color_edit_button_rgba_unmultiplied(clear_color);
            });

            let mut wireframe = easel.settings.wireframe;
            if ui.checkbox(&mut wireframe, "Wireframe").changed() {
                easel.set_wireframe(wireframe);
            }

            ui.separator();
            ui.label(format!(
                "Window: {} x {}",
                easel.settings.window_width, easel.settings.window_height
            ));

            if !shader_ok {
                ui.separator();
                ui.label(
                    RichText::new("Shader failed to build - see log")
                        .color(Color32::from_rgb(235, 90, 70)),
                );
            }
        });

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigStore;
    use std::fs;

    #[test]
    fn test_overlay_builds_without_panicking() {
        let path = std::env::temp_dir().join(format!("easel-ui-{}.ini", std::process::id()));
        fs::remove_file(&path).ok();
        let mut easel = Easel::new(ConfigStore::load(&path));
        let mut clear = [0.2, 0.3, 0.3, 1.0];

        let ctx = egui::Context::default();
        let mut quit = false;
        let _ = ctx.run(Default::default(), |ctx| {
            quit = draw(ctx, &mut easel, &mut clear, false).quit;
        });

        assert!(!quit);
        fs::remove_file(&path).ok();
    }
}
