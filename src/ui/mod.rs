pub mod dialog;
pub mod form;
pub mod keybar;
pub mod layout;
pub mod markdown;
pub mod sidebar;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use crate::state::AppState;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    titlebar::draw_titlebar(f, layout.titlebar, state);
    form::draw_form(f, layout.main, state);
    sidebar::draw_sidebar(f, layout.sidebar);
    statusbar::draw_statusbar(f, layout.statusbar, state);
    keybar::draw_keybar(f, layout.keybar, state);

    // Draw dialog overlay if any
    if state.has_dialog() {
        dialog::draw_dialog(f, area, state);
    }
}
