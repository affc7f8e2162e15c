use imgsearch::logic::formatting::format_page_progress;
use imgsearch::model::{FetchStatus, Model};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the status line text
fn build_status_line(model: &Model) -> String {
    let gallery = &model.gallery;

    if gallery.query().is_empty() {
        return "No search yet".to_string();
    }

    let state = match gallery.status() {
        FetchStatus::Idle => "idle",
        FetchStatus::Loading => "loading",
        FetchStatus::Success if gallery.is_exhausted() => "all loaded",
        FetchStatus::Success => "ready",
        FetchStatus::Error(_) => "error",
    };

    let selected = match gallery.selected_index {
        Some(index) if !gallery.images().is_empty() => format!("{}/{}", index + 1, gallery.images().len()),
        _ => format!("-/{}", gallery.images().len()),
    };

    let mut line = format!(
        "\"{}\" │ {} │ {} images │ selected {} │ {}",
        gallery.query(),
        format_page_progress(gallery.page(), gallery.total_pages()),
        gallery.images().len(),
        selected,
        state
    );

    if let Some(error_type) = model.ui.last_error_type {
        line.push_str(&format!(" ({})", error_type.as_str()));
    }

    line
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let status = Paragraph::new(Line::from(Span::raw(build_status_line(model))))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_before_first_search() {
        let model = Model::new(false, Duration::from_secs(3));
        assert_eq!(build_status_line(&model), "No search yet");
    }

    #[test]
    fn test_status_while_loading() {
        let mut model = Model::new(false, Duration::from_secs(3));
        model.search.input = "cats".to_string();
        model.submit_search();

        let line = build_status_line(&model);
        assert!(line.starts_with("\"cats\" │ page 1"), "got: {}", line);
        assert!(line.ends_with("loading"), "got: {}", line);
    }
}
