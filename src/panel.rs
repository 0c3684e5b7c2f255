use crate::controls::{ControlState, OPACITY_RANGE, ROTATION_SPEED_RANGE};

/// Builds the overlay UI: the corner FPS counter, plus the control panel
/// when control state is attached
///
/// Widgets bind directly to the control fields; values are clamped back to
/// the declared ranges afterwards so out-of-range typed input cannot stick.
pub fn draw_panel(ctx: &egui::Context, fps: f32, controls: Option<&mut ControlState>) {
    egui::Window::new("fps")
        .title_bar(false)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{:.0}", fps))
                    .size(48.0)
                    .color(egui::Color32::from_rgb(74, 158, 255)),
            );
            ui.label(
                egui::RichText::new("FPS")
                    .size(12.0)
                    .color(egui::Color32::GRAY),
            );
        });

    if let Some(controls) = controls {
        egui::Window::new("Controls")
            .resizable(false)
            .default_pos(egui::pos2(10.0, 90.0))
            .show(ctx, |ui| {
                ui.add(
                    egui::Slider::new(&mut controls.rotation_speed, ROTATION_SPEED_RANGE)
                        .text("rotation speed"),
                );
                ui.add(egui::Slider::new(&mut controls.opacity, OPACITY_RANGE).text("opacity"));
                ui.horizontal(|ui| {
                    ui.color_edit_button_rgb(&mut controls.color);
                    ui.label("color");
                });
            });

        controls.clamp_to_ranges();
    }
}
