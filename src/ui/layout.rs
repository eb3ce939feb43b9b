use ratatui::layout::{Constraint, Direction, Layout, Rect};

const SIDEBAR_WIDTH: u16 = 38;
const SIDEBAR_MIN_TOTAL: u16 = 100;

pub struct AppLayout {
    pub titlebar: Rect,
    pub main: Rect,
    /// Zero-sized on narrow terminals.
    pub sidebar: Rect,
    pub statusbar: Rect,
    pub keybar: Rect,
}

pub struct FormLayout {
    pub header: Rect,
    pub lesson: Rect,
    pub title: Rect,
    pub content: Rect,
    pub tags: Rect,
    pub actions: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(10),   // middle (form + sidebar)
            Constraint::Length(1), // statusbar
            Constraint::Length(1), // keybar
        ])
        .split(area);

    let sidebar_width = if area.width >= SIDEBAR_MIN_TOTAL {
        SIDEBAR_WIDTH
    } else {
        0
    };
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(sidebar_width)])
        .split(vertical[1]);

    AppLayout {
        titlebar: vertical[0],
        main: middle[0],
        sidebar: middle[1],
        statusbar: vertical[2],
        keybar: vertical[3],
    }
}

pub fn compute_form_layout(area: Rect) -> FormLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading + hint
            Constraint::Length(3), // lesson
            Constraint::Length(3), // title
            Constraint::Min(5),    // content (toolbar + text)
            Constraint::Length(3), // tags
            Constraint::Length(1), // actions
        ])
        .split(area);

    FormLayout {
        header: rows[0],
        lesson: rows[1],
        title: rows[2],
        content: rows[3],
        tags: rows[4],
        actions: rows[5],
    }
}
