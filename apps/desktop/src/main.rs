use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use eframe::egui::{self, Color32};
use image::DynamicImage;
use qreatify_common::config::AppConfig;
use qreatify_common::error::QreatifyResult;
use qreatify_model::logo::LogoData;
use qreatify_model::request::LogoSizePercent;
use qreatify_model::theme::{ColorScheme, ThemePreference};
use qreatify_render_engine::export::{decode_logo, export_png, ExportJob};
use qreatify_session::generator::GeneratorState;
use qreatify_session::logo::{read_logo, LogoToken, LOGO_EXTENSIONS};
use qreatify_session::preference::FilePreferenceStore;
use qreatify_session::signal::ColorSchemeSignal;
use qreatify_session::theme::ThemeController;

mod preview;

use preview::QrPreview;

/// Largest preview square, in points.
const MAX_PREVIEW_SIZE: f32 = 320.0;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load();
    qreatify_common::logging::init_logging(&config.logging);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("QReatify")
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    let app = QreatifyApp::new(config)?;
    eframe::run_native("QReatify", options, Box::new(move |_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("window launch failed: {e}"))
}

#[derive(Debug)]
enum AppMessage {
    LogoLoaded {
        token: LogoToken,
        name: String,
        result: QreatifyResult<(LogoData, DynamicImage)>,
    },
    ExportFinished {
        result: QreatifyResult<PathBuf>,
    },
}

struct QreatifyApp {
    runtime: tokio::runtime::Runtime,
    config: AppConfig,
    state: GeneratorState,
    theme: ThemeController,
    color_scheme: Arc<ColorSchemeSignal>,
    preview: QrPreview,
    show_intro: bool,
    logo_name: Option<String>,
    logo_image: Option<DynamicImage>,
    exporting: bool,
    status: String,
    tx: Sender<AppMessage>,
    rx: Receiver<AppMessage>,
}

impl QreatifyApp {
    fn new(config: AppConfig) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        let color_scheme = Arc::new(ColorSchemeSignal::from_env());
        let theme = ThemeController::init(
            Box::new(FilePreferenceStore::standard()),
            color_scheme.clone(),
        );
        let (tx, rx) = mpsc::channel();

        Ok(Self {
            runtime,
            state: GeneratorState::from_defaults(&config.defaults),
            config,
            theme,
            color_scheme,
            preview: QrPreview::new(),
            show_intro: true,
            logo_name: None,
            logo_image: None,
            exporting: false,
            status: String::new(),
            tx,
            rx,
        })
    }

    fn pick_logo(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", LOGO_EXTENSIONS)
            .pick_file()
        else {
            return;
        };

        let token = self.state.begin_logo_upload();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let max_bytes = self.config.max_logo_bytes;
        let tx = self.tx.clone();

        self.status = format!("Loading {name}...");
        self.runtime.spawn(async move {
            let result = match read_logo(&path, max_bytes).await {
                Ok(logo) => decode_logo(logo.clone()).await.map(|image| (logo, image)),
                Err(e) => Err(e),
            };
            let _ = tx.send(AppMessage::LogoLoaded {
                token,
                name,
                result,
            });
        });
    }

    fn save_image(&mut self) {
        let Some(request) = self.state.request() else {
            return;
        };

        self.exporting = true;
        self.status = "Saving...".to_string();
        let job = ExportJob::new(request, self.config.output_dir.clone());
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = export_png(job).await;
            let _ = tx.send(AppMessage::ExportFinished { result });
        });
    }

    fn clear(&mut self) {
        self.state.clear();
        self.logo_name = None;
        self.logo_image = None;
        self.preview.clear();
        self.status.clear();
    }

    fn poll_messages(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            match message {
                AppMessage::LogoLoaded {
                    token,
                    name,
                    result,
                } => {
                    if !self.state.is_pending_logo(token) {
                        continue;
                    }
                    match result {
                        Ok((logo, image)) => {
                            if self.state.finish_logo_upload(token, logo) {
                                self.logo_image = Some(image);
                                self.logo_name = Some(name);
                                self.status.clear();
                            }
                        }
                        Err(err) => {
                            self.status = format!("Could not use {name}: {err}");
                        }
                    }
                }
                AppMessage::ExportFinished { result } => {
                    self.exporting = false;
                    self.status = match result {
                        Ok(path) => format!("Saved {}", path.display()),
                        Err(err) => format!("Save failed: {err}"),
                    };
                }
            }
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context, frame: &eframe::Frame) {
        if let Some(system) = frame.info().system_theme {
            self.color_scheme.publish(match system {
                eframe::Theme::Dark => ColorScheme::Dark,
                eframe::Theme::Light => ColorScheme::Light,
            });
        }
        self.theme.poll();

        if ctx.style().visuals.dark_mode != self.theme.is_dark() {
            ctx.set_visuals(if self.theme.is_dark() {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
        }
    }

    fn theme_menu(&mut self, ui: &mut egui::Ui) {
        let current = self.theme.preference();
        let mut selected = None;
        egui::ComboBox::from_id_source("theme")
            .selected_text(format!("Theme: {}", current.label()))
            .show_ui(ui, |ui| {
                for preference in ThemePreference::ALL {
                    if ui
                        .selectable_label(preference == current, preference.label())
                        .clicked()
                    {
                        selected = Some(preference);
                    }
                }
            });
        if let Some(preference) = selected {
            self.theme.select(preference);
        }
    }

    fn intro(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.heading("Welcome to QReatify");
            ui.label(
                egui::RichText::new("Effortless QR code generation made simple.").weak(),
            );
            ui.add_space(24.0);
            if ui.button("Let's QReate →").clicked() {
                self.show_intro = false;
            }
        });
    }

    fn generator(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| ui.heading("QReatify Code Generator"));
        ui.add_space(12.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.state.payload)
                .hint_text("Enter text, link, or any data for your QR code")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("QR Color:");
            let mut rgb = self.state.color.committed().rgb();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                self.state.color.set_rgb(rgb);
            }
            let mut draft = self.state.color.draft().to_string();
            let edit = egui::TextEdit::singleline(&mut draft)
                .char_limit(7)
                .hint_text("#000000")
                .desired_width(80.0);
            if ui.add(edit).changed() {
                self.state.color.edit(&draft);
            }
            let reset = egui::Button::new("Reset").fill(Color32::from_rgb(200, 52, 52));
            if ui.add(reset).on_hover_text("Reset to default black").clicked() {
                self.state.color.reset();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Upload Logo:");
            if ui.button("Choose image...").clicked() {
                self.pick_logo();
            }
            if let Some(name) = &self.logo_name {
                ui.label(name);
            }
        });

        if self.state.logo().is_some() {
            let mut percent = self.state.logo_size.get();
            ui.horizontal(|ui| {
                ui.label(format!("Logo Size: {percent}%"));
                ui.add(
                    egui::Slider::new(&mut percent, LogoSizePercent::MIN..=LogoSizePercent::MAX)
                        .show_value(false),
                );
            });
            self.state.logo_size = LogoSizePercent::new(percent);
        }

        ui.add_space(12.0);
        self.preview_area(ui);

        if self.state.can_export() {
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let save = ui.add_enabled(!self.exporting, egui::Button::new("💾 Save Image"));
                if save.clicked() {
                    self.save_image();
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
            });
        }

        if !self.status.is_empty() {
            ui.add_space(6.0);
            ui.label(&self.status);
        }
    }

    fn preview_area(&mut self, ui: &mut egui::Ui) {
        let side = ui.available_width().min(MAX_PREVIEW_SIZE);
        self.state.resize(side, MAX_PREVIEW_SIZE);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), MAX_PREVIEW_SIZE));
            ui.vertical_centered(|ui| match self.state.request() {
                Some(request) => {
                    let logo = self.state.logo_token().zip(self.logo_image.as_ref());
                    match self.preview.texture(ui.ctx(), &request, logo) {
                        Ok(texture) => {
                            let size = request.canvas_size as f32;
                            ui.image((texture.id(), egui::vec2(size, size)));
                        }
                        Err(err) => {
                            ui.colored_label(Color32::from_rgb(230, 120, 120), err.to_string());
                        }
                    }
                }
                None => {
                    ui.add_space(MAX_PREVIEW_SIZE / 2.0 - 10.0);
                    ui.label(
                        egui::RichText::new("Your generated QR code will appear here.").weak(),
                    );
                }
            });
        });
    }
}

impl eframe::App for QreatifyApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
        self.poll_messages();
        self.sync_theme(ctx, frame);

        egui::TopBottomPanel::top("theme-bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                self.theme_menu(ui);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.small("This QR generator runs entirely on your machine. No data is collected or stored.");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.show_intro {
                self.intro(ui);
            } else {
                egui::ScrollArea::vertical().show(ui, |ui| self.generator(ui));
            }
        });
    }
}
