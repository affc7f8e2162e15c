use imgsearch::model::Model;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans for the part of the UI that has focus
fn build_hotkey_spans(model: &Model) -> Vec<Span<'static>> {
    if model.modal.is_open() {
        return vec![key("Esc/Enter/q"), Span::raw(":Close  "), key("click"), Span::raw(":Close")];
    }

    if model.search.editing {
        return vec![
            key("Enter"),
            Span::raw(":Search  "),
            key("Esc"),
            Span::raw(":Browse results  "),
            key("^U"),
            Span::raw(":Clear  "),
            key("^C"),
            Span::raw(":Quit"),
        ];
    }

    let mut spans = if model.ui.vim_mode {
        vec![key("hjkl"), Span::raw(":Nav  "), key("g/G"), Span::raw(":First/Last  ")]
    } else {
        vec![key("←↑↓→"), Span::raw(":Nav  ")]
    };

    spans.extend(vec![
        key("Enter"),
        Span::raw(":Open  "),
        key("/"),
        Span::raw(":Search  "),
    ]);

    if model.load_more_visible() {
        spans.extend(vec![key("m"), Span::raw(":Load more  ")]);
    }

    spans.extend(vec![key("t"), Span::raw(":Top  "), key("q"), Span::raw(":Quit")]);
    spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, model: &Model) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(model))).style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}
