use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Modifier, Terminal};
use tasklist::{ui, App, Focus};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), today());
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add(app: &mut App, text: &str, due: &str) {
    app.focus = Focus::Text;
    type_str(app, text);
    press(app, KeyCode::Tab);
    type_str(app, due);
    press(app, KeyCode::Enter);
}

fn texts(app: &App) -> Vec<String> {
    app.tasks.tasks().iter().map(|t| t.text().to_string()).collect()
}

fn render_buffer(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, app, today())).unwrap();
    terminal.backend().buffer().clone()
}

fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
    let chars: Vec<String> = needle.chars().map(String::from).collect();
    let area = buf.area;
    (0..area.height).find_map(|y| {
        (0..area.width)
            .find(|&x| {
                chars.iter().enumerate().all(|(i, c)| {
                    let cx = x as usize + i;
                    cx < area.width as usize && buf[(cx as u16, y)].symbol() == c
                })
            })
            .map(|x| (x, y))
    })
}

fn render_to_string(app: &App) -> String {
    let buf = render_buffer(app);
    let area = buf.area;
    let mut lines = Vec::new();
    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

#[test]
fn enter_adds_task_and_clears_both_fields() {
    let mut app = App::new();
    add(&mut app, "File the papers", "2026-12-31");

    assert_eq!(texts(&app), vec!["File the papers"]);
    assert_eq!(app.tasks.pending_text(), "");
    assert_eq!(app.tasks.pending_due_date(), "");

    let screen = render_to_string(&app);
    assert!(screen.contains("File the papers"));
    assert!(screen.contains("Due: 2026/12/31"));
}

#[test]
fn whitespace_only_text_leaves_empty_state() {
    let mut app = App::new();
    type_str(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.tasks.is_empty());
    let screen = render_to_string(&app);
    assert!(screen.contains(ui::EMPTY_MESSAGE));
    assert!(!screen.contains("Completed:"));
}

#[test]
fn delete_second_of_three_keeps_order() {
    let mut app = App::new();
    for text in ["A", "B", "C"] {
        add(&mut app, text, "");
    }
    let ids: Vec<_> = app.tasks.tasks().iter().map(|t| t.id()).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);

    app.focus = Focus::List;
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected, 1);
    press(&mut app, KeyCode::Delete);

    assert_eq!(texts(&app), vec!["A", "C"]);
}

#[test]
fn stats_track_toggles() {
    let mut app = App::new();
    add(&mut app, "Task 1", "");
    add(&mut app, "Task 2", "");
    assert!(render_to_string(&app).contains("Completed: 0 / Total: 2"));

    app.focus = Focus::List;
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Char(' '));
    assert!(render_to_string(&app).contains("Completed: 1 / Total: 2"));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert!(render_to_string(&app).contains("Completed: 2 / Total: 2"));
}

#[test]
fn completing_an_overdue_task_clears_the_flag() {
    let mut app = App::new();
    add(&mut app, "Buy milk", "2026-01-05");
    let id = app.tasks.tasks()[0].id();
    assert!(app.tasks.get(id).unwrap().is_overdue_at(today()));
    assert!(render_to_string(&app).contains("Due: 2026/1/5 (overdue)"));

    app.focus = Focus::List;
    press(&mut app, KeyCode::Char('x'));

    let task = app.tasks.get(id).unwrap();
    assert!(task.is_completed());
    assert!(!task.is_overdue_at(today()));
    assert_eq!(task.due_date(), NaiveDate::from_ymd_opt(2026, 1, 5));

    let screen = render_to_string(&app);
    assert!(screen.contains("Due: 2026/1/5"));
    assert!(!screen.contains("(overdue)"));

    let buf = render_buffer(&app);
    let (x, y) = find(&buf, "Buy milk").unwrap();
    assert!(buf[(x, y)].modifier.contains(Modifier::CROSSED_OUT));
    assert_ne!(buf[(x, y)].bg, ui::OVERDUE_BG);
}

#[test]
fn toggling_twice_restores_state() {
    let mut app = App::new();
    add(&mut app, "Laundry", "");
    app.focus = Focus::List;
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.tasks.tasks()[0].is_completed());
    assert!(render_to_string(&app).contains("[ ] Laundry"));

    let buf = render_buffer(&app);
    let (x, y) = find(&buf, "Laundry").unwrap();
    assert!(!buf[(x, y)].modifier.contains(Modifier::CROSSED_OUT));
}

#[test]
fn date_field_drops_letters() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "2026-ab03-15");
    assert_eq!(app.tasks.pending_due_date(), "2026-03-15");
}
