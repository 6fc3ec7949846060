//! Pager demo application
//!
//! A thin demonstration harness around the paging engine: it creates the
//! engine, appends a couple of text panes, forwards pointer input, and paints
//! each pane shifted by the engine's scroll offset. Features:
//! - Drag horizontally to pull pages; release fast to fling one page over
//! - Arrow keys snap one page in either direction programmatically
//! - Menu bar with gesture-feel presets and an "Add pane" action
//! - Optional CLI argument: path to a JSON `PagerConfig`
//!
//! Everything non-trivial lives in the `rpager` library; this binary is just
//! an external caller at the render/input boundary.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use eframe::egui;
use rand::Rng;
use rpager::{PagerConfig, PagingEngine};

/// One demo pane's content. The engine only tracks geometry; the content
/// stays here, on the caller's side.
struct DemoPane {
    title: String,
    body: String,
    accent: egui::Color32,
}

impl DemoPane {
    fn new(title: &str, body: &str) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            title: title.to_string(),
            body: body.to_string(),
            accent: egui::Color32::from_rgb(
                rng.gen_range(30..90),
                rng.gen_range(40..110),
                rng.gen_range(70..140),
            ),
        }
    }
}

/// Main application entry point that initializes logging and launches the
/// pager demo window.
fn main() -> eframe::Result {
    let _ = simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    // Optional command-line argument: a JSON config for the gesture feel.
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err:#}; falling back to defaults");
                PagerConfig::default()
            }
        },
        None => PagerConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Pager Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Pager Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(PagerDemoApp::new(config)))),
    )
}

fn load_config(path: &std::path::Path) -> Result<PagerConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    PagerConfig::from_json_str(&json)
}

/// The demo application: a paging engine plus the pane content it pages.
struct PagerDemoApp {
    engine: PagingEngine,
    panes: Vec<DemoPane>,
    preset_name: &'static str,
    /// Viewport size the engine was last measured against.
    last_viewport: egui::Vec2,
}

impl PagerDemoApp {
    fn new(config: PagerConfig) -> Self {
        let mut app = Self {
            engine: PagingEngine::with_config(config),
            panes: Vec::new(),
            preset_name: "default",
            last_viewport: egui::Vec2::ZERO,
        };
        app.engine
            .add_page_change_listener(|page: usize| log::info!("page changed to {page}"));
        app.add_pane(DemoPane::new(
            "First page",
            "Drag left to pull the next page into view.",
        ));
        app.add_pane(DemoPane::new(
            "Second page",
            "A longer body of text, the kind a real pane would carry: enough \
             words to show that pane content is the caller's business and the \
             engine only moves the slot it lives in.",
        ));
        app
    }

    fn add_pane(&mut self, pane: DemoPane) {
        self.panes.push(pane);
        self.engine.append_pane();
    }

    /// Rebuilds the engine with a preset, keeping the pane content.
    fn apply_preset(&mut self, name: &'static str) {
        let Some(config) = PagerConfig::preset(name) else {
            return;
        };
        self.preset_name = name;
        self.engine = PagingEngine::with_config(config);
        self.engine
            .add_page_change_listener(|page: usize| log::info!("page changed to {page}"));
        for _ in 0..self.panes.len() {
            self.engine.append_pane();
        }
        self.last_viewport = egui::Vec2::ZERO;
    }

    fn handle_pointer(&mut self, response: &egui::Response, now: Instant) {
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.engine.on_pointer_down(pos.x, now);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.engine.on_pointer_move(pos.x, now);
            }
        }
        if response.drag_stopped() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.engine.on_pointer_up(pos.x, now);
            }
        }
    }

    fn paint_panes(&self, ui: &egui::Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let offset = self.engine.scroll_offset();
        for (slot, pane) in self.engine.pane_slots().iter().zip(&self.panes) {
            let left = rect.left() + slot.left - offset;
            if left + slot.width < rect.left() || left > rect.right() {
                continue;
            }
            let pane_rect = egui::Rect::from_min_size(
                egui::pos2(left, rect.top()),
                egui::vec2(slot.width, slot.height),
            );
            painter.rect_filled(pane_rect, 0.0, pane.accent);
            painter.text(
                pane_rect.center() - egui::vec2(0.0, 30.0),
                egui::Align2::CENTER_CENTER,
                &pane.title,
                egui::FontId::proportional(28.0),
                egui::Color32::WHITE,
            );
            painter.text(
                pane_rect.center() + egui::vec2(0.0, 20.0),
                egui::Align2::CENTER_CENTER,
                &pane.body,
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(220),
            );
        }
    }
}

impl eframe::App for PagerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Feel:");
                let mut selected = self.preset_name;
                egui::ComboBox::from_id_salt("preset_selector")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for name in PagerConfig::preset_names() {
                            ui.selectable_value(&mut selected, name, name);
                        }
                    });
                if selected != self.preset_name {
                    self.apply_preset(selected);
                }

                if ui.button("Add pane").clicked() {
                    let index = self.panes.len() + 1;
                    self.add_pane(DemoPane::new(
                        &format!("Page {index}"),
                        "Appended at runtime.",
                    ));
                }

                ui.label(format!(
                    "page {} / {}",
                    self.engine.current_page() + 1,
                    self.engine.pane_count().max(1)
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();

            // Re-measure on resize or pane-list changes; the engine re-snaps
            // to the current page in layout().
            if rect.size() != self.last_viewport || self.engine.needs_layout() {
                self.last_viewport = rect.size();
                self.engine.measure(rect.width(), rect.height());
                self.engine.layout();
            }

            let response = ui.interact(
                rect,
                ui.id().with("pager_canvas"),
                egui::Sense::drag().union(egui::Sense::hover()),
            );
            self.handle_pointer(&response, now);

            // Programmatic page changes from the keyboard.
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
                let target = self.engine.current_page() + 1;
                self.engine.snap_to_page(target, now);
            }
            if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
                let target = self.engine.current_page().saturating_sub(1);
                self.engine.snap_to_page(target, now);
            }

            if self.engine.animation_tick(now) {
                ctx.request_repaint();
            }

            self.paint_panes(ui, rect);
        });
    }
}
