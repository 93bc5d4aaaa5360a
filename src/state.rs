use crate::chart::{ChartOptions, ChartSpec};
use crate::color::ColorSource;
use crate::data::align::align;
use crate::data::model::{AlignedChartData, DataError};
use crate::data::sample::SampleStore;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// A chart that has been produced by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    /// Query text as it was when Search was pressed.
    pub query: String,
    pub data: AlignedChartData,
    pub chart: ChartSpec,
    pub options: ChartOptions,
}

/// What the central panel shows. Once a chart is displayed there is no way
/// back to `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Idle,
    Displaying(ChartView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank query; nothing changed.
    Ignored,
    /// A new chart replaced the view.
    Rendered,
}

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Live contents of the text field.
    pub query: String,

    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Handle a press of Search.
    ///
    /// Blank input is a no-op. On an alignment error the current view is kept
    /// and the error is reported through `status_message`.
    pub fn submit(
        &mut self,
        store: &SampleStore,
        colors: &mut dyn ColorSource,
    ) -> Result<SubmitOutcome, DataError> {
        if self.query.trim().is_empty() {
            log::debug!("Ignoring blank query");
            return Ok(SubmitOutcome::Ignored);
        }

        let data = match align(store.for_query(&self.query)) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to align series: {e}");
                self.status_message = Some(format!("Error: {e}"));
                return Err(e);
            }
        };

        let chart = ChartSpec::build(&data, colors);
        log::info!(
            "Rendering {} series over {} years for query {:?}",
            chart.datasets.len(),
            chart.labels.len(),
            self.query
        );

        self.view = View::Displaying(ChartView {
            query: self.query.clone(),
            options: ChartOptions::for_query(&self.query),
            data,
            chart,
        });
        self.status_message = None;
        Ok(SubmitOutcome::Rendered)
    }

    /// The chart currently on screen, if any.
    pub fn display(&self) -> Option<&ChartView> {
        match &self.view {
            View::Idle => None,
            View::Displaying(display) => Some(display),
        }
    }
}
