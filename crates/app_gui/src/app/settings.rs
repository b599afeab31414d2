//! Settings panel rendering for language, classifier seed, and versions.

use super::UiApp;
use crate::i18n::{Language, LanguagePreference};
use eframe::egui;

impl UiApp {
    /// Renders the settings screen. Changes are saved immediately.
    pub(super) fn render_settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr("Instellingen", "Settings"));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(self.tr("Taal", "Language"));
            let mut selected = self.language_preference;
            let language = self.language;
            let option_label = |lang: LanguagePreference| match (language, lang) {
                (Language::Dutch, LanguagePreference::System) => "Systeem (automatisch)",
                (Language::English, LanguagePreference::System) => "System (auto)",
                (Language::Dutch, LanguagePreference::Dutch) => "Nederlands",
                (Language::English, LanguagePreference::Dutch) => "Dutch",
                (Language::Dutch, LanguagePreference::English) => "Engels",
                (Language::English, LanguagePreference::English) => "English",
            };
            egui::ComboBox::from_id_salt("language-select")
                .selected_text(option_label(selected))
                .show_ui(ui, |ui| {
                    for lang in [
                        LanguagePreference::System,
                        LanguagePreference::Dutch,
                        LanguagePreference::English,
                    ] {
                        ui.selectable_value(&mut selected, lang, option_label(lang));
                    }
                });
            if selected != self.language_preference {
                self.status.clear();
                self.update_language_preference(selected);
                if self.status.is_empty() {
                    self.status = self.tr("Taal gewijzigd.", "Language updated.").to_string();
                }
            }
        });

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(6.0);
        let seed_label = self.tr("Vaste seed gebruiken", "Use fixed seed");
        ui.checkbox(&mut self.pending_seed_enabled, seed_label);
        ui.label(self.tr(
            "Met een vaste seed geeft de demo-classificatie telkens dezelfde reeks uitkomsten.",
            "With a fixed seed the demo classifier produces the same sequence of results every run.",
        ));
        ui.horizontal(|ui| {
            ui.label("Seed");
            ui.add_enabled(
                self.pending_seed_enabled,
                egui::DragValue::new(&mut self.pending_seed).speed(1),
            );
            if ui.button(self.tr("Toepassen", "Apply")).clicked() {
                self.status.clear();
                self.apply_seed();
                // a save failure already wrote the status line
                if self.status.is_empty() {
                    self.status = match self.settings.seed {
                        Some(seed) => {
                            format!("{}: {seed}", self.tr("Seed toegepast", "Seed applied"))
                        }
                        None => self
                            .tr("Willekeurige seed actief", "Random seed active")
                            .to_string(),
                    };
                }
            }
        });

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(6.0);
        ui.heading(self.tr("Versies", "Versions"));
        ui.label(format!(
            "{}: {}",
            self.tr("App versie", "App version"),
            self.app_version
        ));
        ui.label(format!(
            "{}: {}",
            self.tr("Classificatie", "Classifier"),
            self.tr("demo (willekeurig)", "demo (random)")
        ));
        if !self.status.is_empty() {
            ui.add_space(8.0);
            ui.label(&self.status);
        }
    }
}
