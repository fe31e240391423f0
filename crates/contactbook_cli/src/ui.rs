//! Frame rendering for the phone book window.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use contactbook_core::{ContactStore, FormField, ListFilter, NoticeKind, ViewState};

use crate::app::{App, Focus};

const WINDOW_TITLE: &str = " Phone Book ";
const COLUMN_HEADERS: [&str; 4] = ["ID", "Name", "Phone Number", "Email"];

/// Render the application
pub fn render<S: ContactStore>(frame: &mut Frame, app: &mut App<S>) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Name
            Constraint::Length(3), // Phone Number
            Constraint::Length(3), // Email
            Constraint::Length(1), // Buttons
            Constraint::Length(3), // Search
            Constraint::Min(3),    // Contacts table
            Constraint::Length(1), // Status line
        ])
        .split(size);

    let title = Paragraph::new(Span::styled(
        WINDOW_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(title, chunks[0]);

    for (field, area) in FormField::ALL.into_iter().zip(&chunks[1..4]) {
        let value = app.view.form().field(field);
        render_input(frame, *area, field.label(), value, app.focus == Focus::Field(field));
    }

    render_buttons(frame, chunks[4]);
    render_input(
        frame,
        chunks[5],
        "Search by Name  [Enter/F5]",
        app.view.search_term(),
        app.focus == Focus::Search,
    );
    render_table(frame, chunks[6], app);
    render_status_line(frame, chunks[7], app);

    if let ViewState::ConfirmingDelete(id) = app.view.state() {
        render_popup(
            frame,
            size,
            "Confirmation",
            &format!("Are you sure you want to delete contact {id}?\n\n[y] Yes   [n] No"),
            Color::Yellow,
        );
    }

    if let Some(notice) = app.view.notice() {
        let color = match notice.kind {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Error => Color::Red,
        };
        let body = format!("{}\n\n[Enter] OK", notice.message);
        render_popup(frame, size, &notice.title, &body, color);
    }
}

fn render_input(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(value).block(block), area);

    if focused {
        let width = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_buttons(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Gray)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(" F2 ", key_style),
        Span::raw(" Add Contact   "),
        Span::styled(" F3 ", key_style),
        Span::raw(" Update Contact   "),
        Span::styled(" F4 ", key_style),
        Span::raw(" Delete Contact   "),
        Span::styled(" Esc ", key_style),
        Span::raw(" Clear   "),
        Span::styled(" ^Q ", key_style),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_table<S: ContactStore>(frame: &mut Frame, area: Rect, app: &mut App<S>) {
    let header = Row::new(COLUMN_HEADERS.into_iter().map(Cell::from))
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .view
        .rows()
        .iter()
        .map(|contact| {
            Row::new(vec![
                Cell::from(contact.id.to_string()),
                Cell::from(contact.name.as_str()),
                Cell::from(contact.phone_number.as_str()),
                Cell::from(contact.email.as_str()),
            ])
        })
        .collect();

    let title = match app.view.filter() {
        ListFilter::All => format!(" Contacts ({}) ", rows.len()),
        ListFilter::Search(term) => format!(" Search \"{term}\" ({}) ", rows.len()),
    };
    let border_style = if app.focus == Focus::List {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    )
    .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_line<S: ContactStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let content = app
        .status_message
        .clone()
        .unwrap_or_else(|| "Tab to switch inputs | arrows select a row".to_string());
    frame.render_widget(Paragraph::new(content), area);
}

fn render_popup(frame: &mut Frame, area: Rect, title: &str, body: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black));

    let popup_area = centered_rect(50, 30, area);
    frame.render_widget(Clear, popup_area);
    let paragraph = Paragraph::new(body)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::app::App;
    use contactbook_core::{ContactView, SqliteContactStore};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_form_labels_and_table_headers() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteContactStore::new(dir.path().join("phonebook.sqlite3"));
        let mut app = App::new(ContactView::open(store).unwrap());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        for expected in ["Phone Book", "Name", "Phone Number", "Email", "Search by Name", "ID"] {
            assert!(text.contains(expected), "missing `{expected}`");
        }
    }
}
