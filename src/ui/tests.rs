use insta::assert_snapshot;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::system::host::{DisplayFields, HostInfo};
use crate::system::snapshot::Snapshot;
use crate::ui::{draw, panel};

const GIB: u64 = 1 << 30;

fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            let cell = buf.cell((x, y)).unwrap();
            out.push_str(cell.symbol());
        }
        if y + 1 < area.height {
            out.push('\n');
        }
    }
    out
}

fn make_snapshot() -> Snapshot {
    Snapshot {
        cpu_percent: 42.5,
        memory_total: 16 * GIB,
        memory_used: 8 * GIB,
        memory_available: 8 * GIB,
        memory_used_percent: 50.0,
        uptime_secs: 90_061,
    }
}

fn make_host(fields: DisplayFields) -> HostInfo {
    HostInfo {
        fields,
        username: "ada".to_string(),
        hostname: "engine".to_string(),
        os: "Linux debian 12".to_string(),
    }
}

#[test]
fn snapshot_panel_full() {
    let output = panel::render(&make_snapshot(), &make_host(DisplayFields::all()), "q");
    assert_snapshot!("panel_full", output);
}

#[test]
fn snapshot_panel_startup() {
    let output = panel::render(&Snapshot::default(), &make_host(DisplayFields::none()), "q");
    assert_snapshot!("panel_startup", output);
}

#[test]
fn draw_places_panel_in_frame() {
    let view = panel::render(&make_snapshot(), &make_host(DisplayFields::all()), "q");
    let backend = TestBackend::new(50, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, &view)).unwrap();

    let screen = buffer_to_string(terminal.backend().buffer());
    let rows: Vec<&str> = screen.lines().collect();
    for (row, expected) in rows.iter().zip(view.lines()) {
        assert_eq!(row.trim_end(), expected.trim_end());
    }
    assert!(screen.contains("42.50%"));
    assert!(screen.contains("( 50.0%)"));
    assert!(screen.contains("Press 'q' to quit."));
}

#[test]
fn draw_clips_to_small_terminal() {
    let view = panel::render(&make_snapshot(), &make_host(DisplayFields::all()), "q");
    let backend = TestBackend::new(10, 3);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, &view)).unwrap();

    let screen = buffer_to_string(terminal.backend().buffer());
    assert_eq!(screen.lines().count(), 3);
    assert!(screen.starts_with("╔═════════"));
}
