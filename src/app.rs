use eframe::egui;

use crate::color::{ColorSource, PaletteColors, RandomColors};
use crate::data::sample::SampleStore;
use crate::state::{AppState, SubmitOutcome};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct NgramExplorerApp {
    pub store: SampleStore,
    pub state: AppState,
    colors: Box<dyn ColorSource>,
    stable_colors: bool,
    /// Set when a new chart replaced the view; consumed by the next plot frame.
    reset_plot: bool,
}

impl NgramExplorerApp {
    pub fn new(store: SampleStore) -> Self {
        Self {
            store,
            state: AppState::default(),
            colors: Box::new(RandomColors::new()),
            stable_colors: false,
            reset_plot: false,
        }
    }

    fn set_stable_colors(&mut self, stable: bool) {
        self.stable_colors = stable;
        self.colors = if stable {
            Box::new(PaletteColors::new(self.store.len()))
        } else {
            Box::new(RandomColors::new())
        };
    }

    fn run_search(&mut self) {
        // A palette restarts at its first colour for every chart.
        if self.stable_colors {
            self.set_stable_colors(true);
        }
        match self.state.submit(&self.store, self.colors.as_mut()) {
            Ok(SubmitOutcome::Rendered) => self.reset_plot = true,
            Ok(SubmitOutcome::Ignored) => {}
            Err(e) => log::debug!("Search left the previous chart in place: {e}"),
        }
    }

    fn copy_chart_json(&mut self, ctx: &egui::Context) {
        let Some(display) = self.state.display() else {
            return;
        };
        match display.chart.to_json_pretty() {
            Ok(json) => {
                ctx.copy_text(json);
                log::info!("Copied chart JSON to clipboard");
            }
            Err(e) => {
                log::error!("Failed to serialise chart: {e}");
                self.state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for NgramExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: header + query bar ----
        let mut stable = self.stable_colors;
        let actions = egui::TopBottomPanel::top("query_bar")
            .show(ctx, |ui| {
                panels::header(ui);
                ui.add_space(4.0);
                let actions = panels::query_bar(ui, &mut self.state, &mut stable);
                ui.add_space(4.0);
                actions
            })
            .inner;

        if stable != self.stable_colors {
            self.set_stable_colors(stable);
        }
        if actions.search {
            self.run_search();
        }
        if actions.copy_json {
            self.copy_chart_json(ctx);
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trend_plot(ui, &self.state, self.reset_plot);
        });
        self.reset_plot = false;
    }
}
