use super::state::StatusMessage;
use super::DropshipApp;
use crate::utils::file_size::format_size;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;
use std::path::PathBuf;

impl DropshipApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.collect_dropped_files(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.heading("Dropship");
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Drop files below or browse to upload")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(14.0);
            self.render_dropzone(ui);
            ui.add_space(12.0);
            self.render_file_rows(ui);
            ui.add_space(12.0);

            ui.vertical_centered(|ui| {
                let is_submitting = self.state.is_submitting();
                ui.add_enabled_ui(!is_submitting, |ui| {
                    let label = if is_submitting {
                        "⏳ Uploading..."
                    } else {
                        "📤 Upload Files"
                    };
                    let button = egui::Button::new(label).min_size(egui::vec2(180.0, 36.0));
                    if ui.add(button).clicked() {
                        self.submit();
                    }
                });
            });

            self.render_message(ui);
        });

        if self.state.is_submitting() {
            ctx.request_repaint();
        }
    }

    /// Files dropped anywhere on the window join the queue, same as a
    /// browse selection.
    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            self.add_paths(dropped);
        }
    }

    fn render_dropzone(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(18.0);
                ui.label("Drag & drop files anywhere in this window");
                ui.add_space(6.0);
                if ui.button("📁 Browse").clicked() {
                    if let Some(paths) = FileDialog::new().pick_files() {
                        self.add_paths(paths);
                    }
                }
                ui.add_space(18.0);
            });
        });
    }

    fn render_file_rows(&mut self, ui: &mut egui::Ui) {
        if self.queue.is_empty() {
            return;
        }

        let mut remove_index = None;
        let is_submitting = self.state.is_submitting();

        egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
            for (index, file) in self.queue.files().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(&file.name).on_hover_text(&file.name);
                    ui.label(
                        RichText::new(format_size(file.size))
                            .color(Color32::from_rgb(150, 150, 150)),
                    );

                    let percent = self.state.row_progress.get(index).copied().unwrap_or(0.0);
                    ui.add(
                        egui::ProgressBar::new(percent / 100.0)
                            .desired_width(160.0)
                            .show_percentage(),
                    );

                    ui.add_enabled_ui(!is_submitting, |ui| {
                        if ui.button("✖").on_hover_text("Remove").clicked() {
                            remove_index = Some(index);
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

        if let Some(index) = remove_index {
            self.remove_file(index);
        }
    }

    fn render_message(&self, ui: &mut egui::Ui) {
        if let Some(message) = &self.state.message {
            ui.add_space(10.0);
            ui.vertical_centered(|ui| match message {
                StatusMessage::Success(text) => {
                    ui.colored_label(Color32::from_rgb(0, 180, 0), text);
                }
                StatusMessage::Error(text) => {
                    ui.colored_label(Color32::from_rgb(220, 50, 50), text);
                }
            });
        }
    }
}
