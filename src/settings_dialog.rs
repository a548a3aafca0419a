use crate::settings::{Settings, FONT_SIZE_MAX, FONT_SIZE_MIN};
use eframe::egui;

/// Staged settings edits; nothing is applied until Save.
#[derive(Default)]
pub struct SettingsDialog {
    preview_font_size: u32,
    auto_save: bool,
    debug_logging: bool,
    enable_toasts: bool,
    toast_duration: f32,
}

impl SettingsDialog {
    pub fn new(settings: &Settings) -> Self {
        Self {
            preview_font_size: settings.preview_font_size,
            auto_save: settings.auto_save,
            debug_logging: settings.debug_logging,
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
        }
    }

    fn to_settings(&self) -> Settings {
        Settings {
            preview_font_size: self.preview_font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            auto_save: self.auto_save,
            debug_logging: self.debug_logging,
            enable_toasts: self.enable_toasts,
            toast_duration: self.toast_duration,
        }
    }

    /// Show the dialog while `open` is set. Returns the assembled settings
    /// when Save is clicked; the window closes on save.
    pub fn ui(&mut self, ctx: &egui::Context, open: &mut bool) -> Option<Settings> {
        if !*open {
            return None;
        }
        let mut saved = None;
        let mut keep_open = true;
        egui::Window::new("Settings")
            .open(&mut keep_open)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Preview font size");
                    ui.add(
                        egui::DragValue::new(&mut self.preview_font_size)
                            .clamp_range(FONT_SIZE_MIN..=FONT_SIZE_MAX)
                            .suffix(" px"),
                    );
                });
                ui.checkbox(&mut self.auto_save, "Auto-save draft");
                ui.checkbox(&mut self.enable_toasts, "Show notifications");
                ui.horizontal(|ui| {
                    ui.label("Notification duration");
                    ui.add(
                        egui::DragValue::new(&mut self.toast_duration)
                            .clamp_range(1.0..=30.0)
                            .speed(0.5)
                            .suffix(" s"),
                    );
                });
                ui.checkbox(&mut self.debug_logging, "Debug logging (applies on restart)");
                ui.separator();
                if ui.button("Save").clicked() {
                    saved = Some(self.to_settings());
                }
            });
        *open = keep_open && saved.is_none();
        saved
    }
}
