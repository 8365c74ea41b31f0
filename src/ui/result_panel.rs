//! Result panel view.
//!
//! Renders the last search result: title, open and download links, and
//! the preview region. egui cannot host a PDF viewer, so the preview
//! region shows its source and hands it to the system viewer on click.

use eframe::egui::{self, RichText};

use crate::controller::UiState;

/// Something the user asked to do with the displayed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Open,
    Download,
    Preview,
    CopyLink,
}

/// View for displaying the current search result.
pub struct ResultPanel;

impl ResultPanel {
    /// Display the result panel.
    ///
    /// Draws nothing while the result is hidden. Returns the action the
    /// user clicked, if any.
    pub fn show(ui: &mut egui::Ui, state: &UiState) -> Option<PanelAction> {
        if !state.result_visible {
            return None;
        }

        let mut action = None;

        ui.heading(&state.title);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button("Open").on_hover_text(&state.open_href).clicked() {
                action = Some(PanelAction::Open);
            }
            if ui
                .button("Download")
                .on_hover_text(&state.download_href)
                .clicked()
            {
                action = Some(PanelAction::Download);
            }
            if ui.button("Copy link").clicked() {
                action = Some(PanelAction::CopyLink);
            }
        });

        ui.add_space(8.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), 160.0));
            ui.vertical_centered(|ui| {
                ui.add_space(48.0);
                ui.label(RichText::new("Preview").weak());
                if ui.link(&state.preview_src).clicked() {
                    action = Some(PanelAction::Preview);
                }
            });
        });

        action
    }
}
