use crate::common::{run_demo, strip_ansi};

#[test]
fn binary_prints_the_demo_table_and_exits_cleanly() {
    let output = run_demo();
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn binary_emits_nothing_on_stderr() {
    let output = run_demo();
    assert!(output.stderr.is_empty());
}

#[test]
fn demo_output_contains_known_sequences() {
    let output = run_demo();
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Bold red intro emphasis, a swap marker, and a three-parameter sample.
    assert!(stdout.contains("\x1b[1;31m"));
    assert!(stdout.contains("\x1b[7m"));
    assert!(stdout.contains("\x1b[1;32;41m"));
}

#[test]
fn demo_output_lists_sections_and_code_labels() {
    let output = run_demo();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let plain = strip_ansi(&stdout);

    assert!(plain.contains("One-parameter examples:"));
    assert!(plain.contains("Two-parameter, swapped-color examples:"));
    assert!(plain.contains("Three-parameter, swapped-color examples:"));
    assert!(plain.contains("tR tB tF tI tU tS tK tL"));
    assert!(plain.contains("fK fR fG fY fB fP fC fW"));
    assert!(plain.contains("bK bR bG bY bB bP bC bW"));
}

#[test]
fn demo_output_ends_with_a_reset() {
    let output = run_demo();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_end().ends_with("\x1b[0m"));
}
