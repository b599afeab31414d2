mod dialog;
mod settings;

use crate::config::AppSettings;
use crate::i18n::{Language, LanguagePreference};
use dialog::DialogNotifier;
use eframe::{App, Frame, egui};
use rfd::FileDialog;
use std::path::PathBuf;
use waste_core::{MockClassifier, ResultDisplay, handle_classify_click};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Panel {
    Classify,
    Settings,
}

pub struct UiApp {
    selected_image: Option<PathBuf>,
    display: ResultDisplay,
    classifier: MockClassifier,
    panel: Panel,
    status: String,
    settings: AppSettings,
    language_preference: LanguagePreference,
    language: Language,
    // Settings panel edit buffers
    pending_seed_enabled: bool,
    pending_seed: u64,
    app_version: &'static str,
}

impl UiApp {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            selected_image: None,
            display: ResultDisplay::default(),
            classifier: MockClassifier::from_seed_option(settings.seed),
            panel: Panel::Classify,
            status: String::new(),
            language_preference: settings.language,
            language: settings.language.resolve(),
            pending_seed_enabled: settings.seed.is_some(),
            pending_seed: settings.seed.unwrap_or_default(),
            settings,
            app_version: env!("WASTE_SORTER_VERSION"),
        }
    }

    fn tr(&self, dutch: &'static str, english: &'static str) -> &'static str {
        self.language.pick(dutch, english)
    }

    fn update_language_preference(&mut self, preference: LanguagePreference) {
        self.language_preference = preference;
        self.language = preference.resolve();
        self.settings.language = preference;
        self.persist_settings();
    }

    /// Reseeds the classifier from the settings panel buffers.
    fn apply_seed(&mut self) {
        let seed = self.pending_seed_enabled.then_some(self.pending_seed);
        self.settings.seed = seed;
        self.classifier = MockClassifier::from_seed_option(seed);
        self.persist_settings();
    }

    fn persist_settings(&mut self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("settings not saved: {e:#}");
            self.status = format!(
                "{}: {e}",
                self.tr("Instellingen niet opgeslagen", "Settings not saved")
            );
        }
    }

    fn choose_image(&mut self) {
        let picked = FileDialog::new()
            .add_filter(self.tr("Afbeeldingen", "Images"), IMAGE_EXTENSIONS)
            .add_filter(self.tr("Alle bestanden", "All files"), &["*"])
            .set_directory(".")
            .pick_file();
        if let Some(path) = picked {
            tracing::debug!("selected {}", path.display());
            self.status.clear();
            self.selected_image = Some(path);
        }
    }

    fn on_classify_clicked(&mut self) {
        let mut notifier = DialogNotifier::new(self.tr("Geen afbeelding", "No image"));
        handle_classify_click(
            self.selected_image.as_deref(),
            &mut self.classifier,
            &mut self.display,
            &mut notifier,
        );
    }

    fn copy_result(&mut self) {
        let Some(fragment) = self.display.fragment() else {
            return;
        };
        let text = fragment.to_string();
        let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        self.status = match copied {
            Ok(()) => self
                .tr("Resultaat gekopieerd", "Result copied")
                .to_string(),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                format!("{}: {e}", self.tr("Kopiëren mislukt", "Copy failed"))
            }
        };
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        let classify_tab = self.tr("Classificeren", "Classify");
        let settings_tab = self.tr("Instellingen", "Settings");
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.panel, Panel::Classify, classify_tab);
            ui.selectable_value(&mut self.panel, Panel::Settings, settings_tab);
        });
        if self.panel != Panel::Classify {
            return;
        }
        ui.horizontal(|ui| {
            if ui.button(self.tr("Kies afbeelding...", "Choose image...")).clicked() {
                self.choose_image();
            }
            if ui
                .add_enabled(
                    self.selected_image.is_some(),
                    egui::Button::new(self.tr("Wissen", "Clear")),
                )
                .clicked()
            {
                self.selected_image = None;
            }
            match &self.selected_image {
                Some(path) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    ui.label(name).on_hover_text(path.display().to_string());
                }
                None => {
                    ui.weak(self.tr("Geen bestand gekozen", "No file chosen"));
                }
            }
        });
        ui.horizontal(|ui| {
            if ui.button(self.tr("Classificeer", "Classify")).clicked() {
                self.on_classify_clicked();
            }
            if ui
                .add_enabled(
                    !self.display.is_empty(),
                    egui::Button::new(self.tr("Kopieer resultaat", "Copy result")),
                )
                .clicked()
            {
                self.copy_result();
            }
            if !self.status.is_empty() {
                ui.label(&self.status);
            }
        });
    }

    fn render_result_panel(&self, ui: &mut egui::Ui) {
        match self.display.fragment() {
            Some(fragment) => {
                ui.heading(fragment.heading);
                ui.add_space(6.0);
                for line in &fragment.lines {
                    ui.horizontal(|ui| {
                        ui.strong(format!("{}:", line.label));
                        ui.label(&line.value);
                    });
                }
            }
            None => {
                ui.weak(self.tr(
                    "Kies een afbeelding en klik op Classificeer.",
                    "Choose an image and press Classify.",
                ));
            }
        }
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.panel {
            Panel::Classify => self.render_result_panel(ui),
            Panel::Settings => self.render_settings_panel(ui),
        });
    }
}
