//! Snapshot tests for the train compositor
//!
//! Uses insta + ratatui TestBackend for visual regression testing.
//! Reference: https://ratatui.rs/recipes/testing/snapshots/

use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

use commit_train::animation::{Train, WheelFrame};
use commit_train::model::CommitRecord;
use commit_train::ui::carriage::render_carriage;

/// Helper: draw the train once and return the screen, one `|`-prefixed row per line
fn render(train: &Train, width: u16, height: u16, x: i32, y: i32, wheels: WheelFrame) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            train.draw(frame.buffer_mut(), area, x, y, wheels);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|row| {
            let line: String = (0..width)
                .map(|col| buffer[(col, row)].symbol())
                .collect();
            format!("|{}", line.trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn train_with(commits: &[CommitRecord]) -> Train {
    Train::new(commits.iter().map(render_carriage).collect())
}

#[test]
fn test_single_carriage() {
    let train = train_with(&[CommitRecord::new(
        "fa484789aad008bd6f99dfba9e61107e1ab5ada5",
        "Shrink the coal tender",
        "1 file changed, +3 -1",
    )]);

    // Shift the locomotive and tender off to the left
    let text = render(&train, 48, 10, -81, 0, WheelFrame::First);
    assert_snapshot!(text, @r"
    |
    |  __________________________________________
    | /                                          \
    | | fa484789aad008bd6f99dfba9e61107e1ab5ada5 |
    | | Shrink the coal tender                   |
    | | 1 file changed, +3 -1                    |
    | |__________________________________________|
    |_|__________________________________________|_
    |   |_D__D_|                      |_D__D_|
    |    \_/\_/                        \_/\_/
    ");
}

#[test]
fn test_locomotive_front_clipped_right() {
    let train = train_with(&[]);

    let text = render(&train, 30, 12, 5, 1, WheelFrame::Fourth);
    assert_snapshot!(text, @r"
    |
    |           ====        _______
    |       _D _|  |_______/
    |        |(_)---  |   H\_______
    |        /     |  |   H  |  |
    |       |      |  |   H  |__---
    |       | ________|___H__/__|__
    |       |/ |   |-----------I___
    |     __/ =| o |=-~O=====O=====
    |      |/-=|___|=    ||    ||
    |       \_/      \__/  \__/  \_
    |
    ");
}

#[test]
fn test_coal_tender_and_truncated_carriage() {
    let train = train_with(&[CommitRecord::new(
        "0123456789abcdef",
        format!("{}0123456789abc", "x".repeat(37)),
        "",
    )]);

    let text = render(&train, 64, 10, -70, 0, WheelFrame::Third);
    assert_snapshot!(text, @r"
    |
    |             __________________________________________
    |____        /                                          \
    |    \_____A | 0123456789abcdef                         |
    |          | | xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx... |
    |          | |                                          |
    |__________| |__________________________________________|
    |__________|_|__________________________________________|_
    |_D__D__D_|    |_D__D_|                      |_D__D_|
    |\_/   \_/      \_/\_/                        \_/\_/
    ");
}
