use eframe::egui::{self, Color32, Key, RichText, TextEdit, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(8.0);
        ui.heading("Google Ngrams Mock Explorer");
        ui.label(
            "Type in one or more words, separated by commas (not actually queried, just mock data):",
        );
    });
}

// ---------------------------------------------------------------------------
// Query bar
// ---------------------------------------------------------------------------

/// Actions requested by the query bar this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryBarActions {
    pub search: bool,
    pub copy_json: bool,
}

/// Render the text field, Search button and toolbar toggles.
///
/// `stable_colors` switches between random and palette line colours.
pub fn query_bar(ui: &mut Ui, state: &mut AppState, stable_colors: &mut bool) -> QueryBarActions {
    let mut actions = QueryBarActions::default();

    ui.horizontal(|ui: &mut Ui| {
        let response = ui.add(
            TextEdit::singleline(&mut state.query)
                .hint_text("e.g. apple, banana")
                .desired_width(300.0),
        );
        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        if ui.button("Search").clicked() || enter {
            actions.search = true;
        }

        ui.separator();

        if ui
            .selectable_label(*stable_colors, "Stable colours")
            .on_hover_text("Use an evenly spaced palette instead of random colours")
            .clicked()
        {
            *stable_colors = !*stable_colors;
        }

        let has_chart = state.display().is_some();
        if ui
            .add_enabled(has_chart, egui::Button::new("Copy JSON"))
            .on_hover_text("Copy the chart data to the clipboard")
            .clicked()
        {
            actions.copy_json = true;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    actions
}
