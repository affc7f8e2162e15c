use crate::App;
use ratatui::Frame;

use super::{controls, gallery, layout, legend, modal, search, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);

    // Hit regions are rebuilt from scratch every frame
    app.hit_map.clear();

    search::render_search_input(
        f,
        layout_info.search_area,
        &app.model.search.input,
        app.model.search.editing && !app.model.modal.is_open(),
        app.model.gallery.total(),
    );
    app.hit_map.set_search(layout_info.search_area);

    gallery::render_gallery(f, layout_info.gallery_area, app);
    controls::render_controls(f, layout_info.controls_area, app);
    legend::render_legend(f, layout_info.legend_area, &app.model);
    status_bar::render_status_bar(f, layout_info.status_area, &app.model);

    if app.model.modal.is_open() {
        modal::render_modal(f, size, app);
    }

    // Toast goes on top of everything
    if let Some(toast_state) = &app.model.ui.toast {
        toast::render_toast(f, size, &toast_state.notification);
    }
}
