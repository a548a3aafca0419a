use crate::message::COMMIT_KINDS;
use eframe::egui;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum HelpTab {
    #[default]
    Guide,
    Examples,
}

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
    tab: HelpTab,
}

impl HelpWindow {
    pub fn ui(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }
        let mut open = self.open;
        egui::Window::new("Help")
            .open(&mut open)
            .resizable(true)
            .default_size((380.0, 300.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.tab, HelpTab::Guide, "Guide");
                    ui.selectable_value(&mut self.tab, HelpTab::Examples, "Examples");
                });
                ui.separator();
                match self.tab {
                    HelpTab::Guide => {
                        ui.label("Messages follow the Conventional Commits format:");
                        ui.monospace("type(scope): description");
                        ui.add_space(4.0);
                        ui.label(egui::RichText::new("Types").strong());
                        egui::ScrollArea::vertical().max_height(140.0).show(ui, |ui| {
                            for (kind, blurb) in COMMIT_KINDS {
                                ui.label(format!("{kind}: {blurb}"));
                            }
                        });
                        ui.add_space(4.0);
                        ui.label("Scope: optional area, e.g. ui or api.");
                        ui.label("Description: short, imperative summary.");
                        ui.hyperlink("https://www.conventionalcommits.org/");
                    }
                    HelpTab::Examples => {
                        ui.monospace("feat(ui): add dark mode toggle");
                        ui.monospace("fix(api): resolve timeout error");
                        ui.monospace("docs(readme): update installation guide");
                    }
                }
            });
        self.open = open;
    }
}
