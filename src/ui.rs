use crate::app::{App, Focus};
use crate::due_date::format_due_date;
use crate::task::Task;
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;
use unicode_width::UnicodeWidthChar;

pub const TITLE: &str = "TODO List";
pub const TEXT_PLACEHOLDER: &str = "Enter a new task...";
pub const DUE_DATE_LABEL: &str = "Due date:";
pub const DUE_DATE_PLACEHOLDER: &str = "YYYY-MM-DD";
pub const EMPTY_MESSAGE: &str = "No tasks yet. Add a new task.";
pub const OVERDUE_MARKER: &str = " (overdue)";
pub const OVERDUE_BG: Color = Color::Rgb(64, 16, 16);

/// Draw/read loop. `today` pins the date used for overdue checks; when it is
/// `None` the local date is read before every frame.
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    today: Option<NaiveDate>,
) -> io::Result<()> {
    loop {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        terminal.draw(|f| draw(f, app, today))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key, today);
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

pub fn draw(f: &mut Frame, app: &App, today: NaiveDate) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    draw_input(
        f,
        chunks[1],
        " New task  [Enter] Add ",
        app.tasks.pending_text(),
        TEXT_PLACEHOLDER,
        app.focus == Focus::Text,
    );
    draw_input(
        f,
        chunks[2],
        &format!(" {DUE_DATE_LABEL} "),
        app.tasks.pending_due_date(),
        DUE_DATE_PLACEHOLDER,
        app.focus == Focus::DueDate,
    );

    draw_tasks(f, chunks[3], app, today);

    let stats = app.tasks.stats();
    if stats.is_visible() {
        let mut text = format!("Completed: {} / Total: {}", stats.completed, stats.total);
        let overdue = app.tasks.overdue_count_at(today);
        if overdue > 0 {
            text.push_str(&format!(" · Overdue: {overdue}"));
        }
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            chunks[4],
        );
    }

    f.render_widget(status_line(app), chunks[5]);
}

fn draw_input(f: &mut Frame, area: Rect, title: &str, value: &str, placeholder: &str, focused: bool) {
    // One column stays free for the cursor after the last character.
    let room = (area.width.saturating_sub(2) as usize).saturating_sub(1);
    let (shown, shown_width) = visible_tail(value, room);

    let content = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(shown)
    };
    let input = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(focus_style(focused)),
    );
    f.render_widget(input, area);

    if focused {
        let x = area.x.saturating_add(1).saturating_add(shown_width as u16);
        f.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
    }
}

/// Longest suffix of `value` that fits in `max` columns, with its width.
fn visible_tail(value: &str, max: usize) -> (&str, usize) {
    let mut start = value.len();
    let mut width = 0;
    for (i, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max {
            break;
        }
        width += w;
        start = i;
    }
    (&value[start..], width)
}

fn draw_tasks(f: &mut Frame, area: Rect, app: &App, today: NaiveDate) {
    let block = Block::default()
        .title(" Tasks ")
        .borders(Borders::ALL)
        .border_style(focus_style(app.focus == Focus::List));

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_MESSAGE, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .map(|t| task_item(t, today))
        .collect();

    let mut state = ListState::default();
    if app.focus == Focus::List {
        state.select(Some(app.selected));
    }

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, area, &mut state);
}

fn task_item(task: &Task, today: NaiveDate) -> ListItem<'_> {
    let overdue = task.is_overdue_at(today);
    let checkbox = if task.is_completed() { "[x] " } else { "[ ] " };

    let (text_style, due_style) = if task.is_completed() {
        (
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            Style::default().fg(Color::DarkGray),
        )
    } else if overdue {
        let red = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
        (red, red)
    } else {
        (Style::default(), Style::default().fg(Color::Gray))
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(checkbox),
        Span::styled(task.text(), text_style),
    ])];
    if let Some(due) = task.due_date() {
        let mut label = format!("    Due: {}", format_due_date(due));
        if overdue {
            label.push_str(OVERDUE_MARKER);
        }
        lines.push(Line::from(Span::styled(label, due_style)));
    }

    let item = ListItem::new(lines);
    if overdue {
        item.style(Style::default().bg(OVERDUE_BG))
    } else {
        item
    }
}

fn status_line(app: &App) -> Paragraph<'static> {
    if let Some(status) = &app.status {
        let color = if status.is_error { Color::Red } else { Color::Green };
        return Paragraph::new(Span::styled(status.message.clone(), Style::default().fg(color)));
    }
    let help = match app.focus {
        Focus::Text | Focus::DueDate => "[Enter] add  [Tab] next field  [Esc] quit",
        Focus::List => "[↑/↓] select  [Space] toggle  [d] delete  [Tab] next field  [q] quit",
    };
    Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray)))
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
