//! Main search application window.
//!
//! Implements eframe::App around a [`SearchController`]. Each trigger
//! (Search button or Enter in the query field) spawns one request on the
//! tokio runtime; finished requests come back over a channel and are
//! applied in arrival order.

use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui;
use tokio::runtime::Handle;

use crate::api::{HttpClient, SearchBackend, SearchOutcome};
use crate::controller::SearchController;
use crate::ui::actions;
use crate::ui::result_panel::{PanelAction, ResultPanel};
use crate::Result;

/// A finished request: its id and what came back.
type Completion = (u64, Result<SearchOutcome>);

/// The main search application.
pub struct SearchApp {
    controller: SearchController<HttpClient>,
    /// Tokio runtime handle for async requests.
    runtime: Handle,
    completions_tx: Sender<Completion>,
    completions_rx: Receiver<Completion>,
    /// Whether this is the first frame (for initial focus).
    first_frame: bool,
}

impl SearchApp {
    /// Create a new search application.
    pub fn new(_cc: &eframe::CreationContext<'_>, runtime: Handle, client: HttpClient) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();
        Self {
            controller: SearchController::new(client),
            runtime,
            completions_tx,
            completions_rx,
            first_frame: true,
        }
    }

    /// Start one search. Outstanding searches are left running.
    fn trigger_search(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.controller.begin_search() else {
            return;
        };

        let client = self.controller.backend().clone();
        let tx = self.completions_tx.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let outcome = client.search(&pending.query).await;
            // The window may already be closed
            let _ = tx.send((pending.id, outcome));
            ctx.request_repaint();
        });
    }

    /// Apply every finished request, oldest arrival first.
    fn drain_completions(&mut self) {
        while let Ok((id, outcome)) = self.completions_rx.try_recv() {
            self.controller.apply_outcome(id, outcome);
        }
    }

    fn handle_action(&mut self, action: PanelAction) {
        let state = self.controller.state();
        let href = match action {
            PanelAction::Open | PanelAction::CopyLink => state.open_href.clone(),
            PanelAction::Download => state.download_href.clone(),
            PanelAction::Preview => state.preview_src.clone(),
        };
        let client = self.controller.backend();

        let result = match action {
            PanelAction::CopyLink => {
                actions::copy_link(client, &href).map(|_| Some("Link copied to clipboard"))
            }
            _ => actions::open_link(client, &href).map(|_| None),
        };

        match result {
            Ok(Some(note)) => self.controller.show_message(note),
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Link action {:?} failed: {}", action, e);
                self.controller.show_message(e.to_string());
            }
        }
    }
}

impl eframe::App for SearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_completions();

        let mut search_requested = false;
        let mut panel_action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                // Query row
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(self.controller.query_mut())
                            .desired_width(ui.available_width() - 80.0)
                            .hint_text("Search your notes..."),
                    );

                    if self.first_frame {
                        response.request_focus();
                        self.first_frame = false;
                    }

                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        search_requested = true;
                        response.request_focus();
                    }

                    if ui.button("Search").clicked() {
                        search_requested = true;
                    }
                });

                // Message line
                ui.label(&self.controller.state().message);

                ui.separator();

                panel_action = ResultPanel::show(ui, self.controller.state());
            });
        });

        if search_requested {
            self.trigger_search(ctx);
        }
        if let Some(action) = panel_action {
            self.handle_action(action);
        }
    }
}
