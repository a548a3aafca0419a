use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

use crate::clipboard::SystemClipboard;
use crate::controller::{Controller, Debouncer, Notice, NoticeKind, StorePaths, DEBOUNCE_DELAY};
use crate::draft::{self, CommitDraft};
use crate::help_window::HelpWindow;
use crate::history::HistoryStore;
use crate::message::{COMMIT_KINDS, CUSTOM_KIND};
use crate::settings::Settings;
use crate::settings_dialog::SettingsDialog;
use crate::toast_log::append_notice_log;

const PREVIEW_PLACEHOLDER: &str = "Please enter a description.";

pub struct CommitApp {
    pub draft: CommitDraft,
    pub controller: Controller,
    debounce: Debouncer,
    toasts: Toasts,
    clipboard: SystemClipboard,
    settings_dialog: SettingsDialog,
    help_window: HelpWindow,
    show_settings: bool,
    focus_custom: bool,
    dark_mode: bool,
    high_contrast: bool,
    visuals_dirty: bool,
    download_dir: PathBuf,
}

impl CommitApp {
    pub fn new(settings: Settings, paths: StorePaths, download_dir: PathBuf) -> Self {
        let history = HistoryStore::load(&paths.history);
        let draft = draft::restore_snapshot(&paths.autosave, settings.auto_save);
        let mut app = Self {
            draft,
            controller: Controller::new(settings, history, paths),
            debounce: Debouncer::new(DEBOUNCE_DELAY),
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            clipboard: SystemClipboard,
            settings_dialog: SettingsDialog::default(),
            help_window: HelpWindow::default(),
            show_settings: false,
            focus_custom: false,
            dark_mode: false,
            high_contrast: false,
            visuals_dirty: true,
            download_dir,
        };
        // Initial preview; a still-empty draft only shows the placeholder.
        let _ = app.controller.refresh_preview(&app.draft);
        app
    }

    fn notify(&mut self, notice: Notice) {
        append_notice_log(&notice.text);
        let kind = match notice.kind {
            NoticeKind::Success => ToastKind::Success,
            NoticeKind::Error => ToastKind::Error,
        };
        let duration = self.controller.settings().toast_duration as f64;
        self.toasts.add(Toast {
            text: notice.text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(duration),
        });
    }

    fn refresh_preview(&mut self, notify: bool) {
        if self.controller.refresh_preview(&self.draft).is_err() && notify {
            self.notify(Notice::error("Description is required."));
        }
    }

    fn reset_form(&mut self) {
        self.draft = CommitDraft::default();
        self.debounce.cancel();
        self.controller.reset();
        self.refresh_preview(true);
    }

    fn download(&mut self) {
        if self.controller.preview().is_none() {
            self.notify(Notice::error("Nothing to save yet."));
            return;
        }
        match self.controller.download_preview(&self.download_dir) {
            Ok(path) => self.notify(Notice::success(format!("Saved {}", path.display()))),
            Err(e) => {
                tracing::error!("failed to write download artifact: {e}");
                self.notify(Notice::error("Failed to save file."));
            }
        }
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        if self.high_contrast {
            visuals.override_text_color = Some(if self.dark_mode {
                egui::Color32::WHITE
            } else {
                egui::Color32::BLACK
            });
            visuals.widgets.noninteractive.bg_stroke.width = 2.0;
        }
        ctx.set_visuals(visuals);
    }

    fn form_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Type");
            let before = self.draft.kind.clone();
            egui::ComboBox::from_id_source("commit_kind")
                .selected_text(self.draft.kind.clone())
                .show_ui(ui, |ui| {
                    for (kind, blurb) in COMMIT_KINDS {
                        ui.selectable_value(&mut self.draft.kind, (*kind).to_string(), *kind)
                            .on_hover_text(*blurb);
                    }
                    ui.selectable_value(&mut self.draft.kind, CUSTOM_KIND.to_string(), CUSTOM_KIND);
                });
            if self.draft.kind != before {
                self.focus_custom = self.draft.is_custom();
                self.debounce.arm();
            }
        });
        if self.draft.is_custom() {
            ui.horizontal(|ui| {
                ui.label("Custom type");
                let response = ui.text_edit_singleline(&mut self.draft.custom_kind);
                if self.focus_custom {
                    response.request_focus();
                    self.focus_custom = false;
                }
                if response.changed() {
                    self.debounce.arm();
                }
            });
        }
        ui.horizontal(|ui| {
            ui.label("Scope");
            if ui.text_edit_singleline(&mut self.draft.scope).changed() {
                self.debounce.arm();
            }
        });
        ui.horizontal(|ui| {
            ui.label("Description");
            if ui.text_edit_singleline(&mut self.draft.description).changed() {
                self.debounce.arm();
            }
        });
    }

    fn preview_ui(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Preview").strong());
        let text = self
            .controller
            .preview()
            .unwrap_or(PREVIEW_PLACEHOLDER)
            .to_string();
        let size = self.controller.settings().preview_font_size as f32;
        if self.controller.github_style() {
            // GitHub-flavoured rendering: monospace on a code-block panel.
            egui::Frame::none()
                .fill(egui::Color32::from_rgb(13, 17, 23))
                .inner_margin(8.0)
                .rounding(4.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(&text)
                            .monospace()
                            .size(size)
                            .color(egui::Color32::from_rgb(201, 209, 217)),
                    );
                });
        } else {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&text).size(size));
            });
        }
    }

    fn history_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Recent messages").strong());
            if !self.controller.history().is_empty() && ui.small_button("Clear").clicked() {
                if let Err(e) = self.controller.clear_history() {
                    tracing::error!("failed to clear history: {e}");
                }
            }
        });
        let entries = self.controller.history().list();
        if entries.is_empty() {
            ui.weak("Nothing generated yet.");
            return;
        }
        egui::ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
            for (idx, message) in entries.iter().enumerate() {
                ui.horizontal(|ui| {
                    if ui.small_button("Copy").clicked() {
                        let notice = self.controller.copy_history_entry(idx, &mut self.clipboard);
                        self.notify(notice);
                    }
                    ui.monospace(message.as_str());
                });
            }
        });
    }
}

impl eframe::App for CommitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.visuals_dirty {
            self.apply_visuals(ctx);
            self.visuals_dirty = false;
        }

        // Trailing edge of the edit debounce. While a run is pending keep a
        // repaint scheduled so the recompute fires without further input.
        if self.debounce.ready() {
            self.refresh_preview(true);
        }
        if let Some(remaining) = self.debounce.remaining() {
            ctx.request_repaint_after(remaining.max(Duration::from_millis(10)));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Commit Composer");
            ui.add_space(4.0);
            self.form_ui(ui);
            ui.separator();
            self.preview_ui(ui);
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.reset_form();
                }
                if ui.button("Copy").clicked() {
                    let notice = self.controller.copy_preview(&mut self.clipboard);
                    self.notify(notice);
                }
                if ui.button("Download").clicked() {
                    self.download();
                }
                let style_label = if self.controller.github_style() {
                    "Default Style"
                } else {
                    "GitHub Style"
                };
                if ui.button(style_label).clicked() {
                    self.controller.toggle_github_style();
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Help").clicked() {
                    self.help_window.open = true;
                }
                if ui.button("Settings").clicked() {
                    self.settings_dialog = SettingsDialog::new(self.controller.settings());
                    self.show_settings = true;
                }
                let theme_label = if self.dark_mode { "Light mode" } else { "Dark mode" };
                if ui.button(theme_label).clicked() {
                    self.dark_mode = !self.dark_mode;
                    self.visuals_dirty = true;
                }
                if ui
                    .selectable_label(self.high_contrast, "High contrast")
                    .clicked()
                {
                    self.high_contrast = !self.high_contrast;
                    self.visuals_dirty = true;
                }
            });
            ui.separator();
            self.history_ui(ui);
        });

        if let Some(new_settings) = self.settings_dialog.ui(ctx, &mut self.show_settings) {
            match self.controller.apply_settings(new_settings) {
                Ok(()) => self.notify(Notice::success("Settings saved.")),
                Err(e) => {
                    tracing::error!("failed to persist settings: {e}");
                    self.notify(Notice::error("Failed to save settings."));
                }
            }
            // Re-render the preview with the new font size and auto-save
            // the draft under the new policy.
            self.refresh_preview(false);
        }
        self.help_window.ui(ctx);

        if self.controller.settings().enable_toasts {
            self.toasts.show(ctx);
        }
    }
}
