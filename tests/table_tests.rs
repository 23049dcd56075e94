use grifo::utils::colors::{GREEN, paint};
use grifo::utils::table::{Table, pad_right, strip_ansi, visible_width};

#[test]
fn test_color_codes_do_not_count_toward_width() {
    let cell = paint(GREEN, "Búho");

    assert_eq!(strip_ansi(&cell), "Búho");
    assert_eq!(visible_width(&cell), 4);
    assert_eq!(visible_width(&pad_right(&cell, 10)), 10);
}

#[test]
fn test_other_escapes_keep_the_rest_of_the_cell() {
    let cell = "\x1b(Bhello world";

    assert_eq!(strip_ansi(cell), cell);
    assert!(visible_width(cell) >= 11);

    let stray = "50% \x1b done";
    assert!(strip_ansi(stray).ends_with(" done"));
}

#[test]
fn test_colored_cells_stay_aligned() {
    let mut table = Table::new(["SHIFT", "NOTE"]);
    table.add_row(vec!["Leon".into(), paint(GREEN, "◀ current")]);
    table.add_row(vec!["Buho".into(), "crosses midnight".into()]);

    let out = table.render();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    let note_col = |l: &str| strip_ansi(l).find(|c: char| c == '◀' || c == 'c');
    assert_eq!(note_col(lines[2]), note_col(lines[3]));
}
