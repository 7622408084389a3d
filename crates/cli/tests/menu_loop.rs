//! Black-box tests of the interactive loop over in-memory IO.

use std::io::Cursor;

use stocktake_cli::menu;
use stocktake_inventory::{QueryEngine, Record, consolidate};

fn sample_engine() -> QueryEngine {
    QueryEngine::new(consolidate(vec![
        Record::new("Banana", "B-10", 4, "2026-08-10"),
        Record::new("Apple", "A-20", 12, "2026-08-20"),
        Record::new("Yogurt", "YGT-007", 0, "2026-08-05"),
        Record::new("Cherry", "C-30", 4, "2026-09-01"),
    ]))
}

fn run_script(engine: &QueryEngine, script: &str) -> String {
    let mut output = Vec::new();
    menu::run(engine, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn menu_count(output: &str) -> usize {
    output.matches("Inventory operations").count()
}

#[test]
fn quitting_immediately_prints_the_menu_once() {
    let output = run_script(&sample_engine(), "3\n");
    assert_eq!(menu_count(&output), 1);
}

#[test]
fn end_of_input_ends_the_loop() {
    let output = run_script(&sample_engine(), "");
    assert_eq!(menu_count(&output), 1);
}

#[test]
fn shortage_report_renders_matching_rows_sorted_and_fixed_width() {
    let output = run_script(&sample_engine(), "1\n10\n3\n");

    // one contiguous block, ascending by name, fixed-width columns
    let report = "Banana                           B-10      4 2026-08-10\n\
                  Cherry                           C-30      4 2026-09-01\n\
                  Yogurt                        YGT-007      0 2026-08-05\n";
    assert!(output.contains(report), "report block missing in:\n{output}");
    assert!(!output.contains("Apple"));
    // the user is offered the menu again after the report
    assert_eq!(menu_count(&output), 2);
}

#[test]
fn quantity_equal_to_the_threshold_is_excluded() {
    let output = run_script(&sample_engine(), "1\n12\n3\n");
    assert!(!output.contains("Apple"));
    assert!(output.contains("Banana"));
}

#[test]
fn non_numeric_threshold_is_rejected_and_the_loop_continues() {
    let output = run_script(&sample_engine(), "1\na dozen\n3\n");
    assert!(output.contains("The stock level should be a natural number."));
    assert_eq!(menu_count(&output), 2);
}

#[test]
fn negative_threshold_is_rejected() {
    let output = run_script(&sample_engine(), "1\n-5\n3\n");
    assert!(output.contains("invalid input"));
    assert!(!output.contains("B-10"), "no rows should print for a rejected query");
}

#[test]
fn expiry_report_lists_items_strictly_before_the_cutoff() {
    let output = run_script(&sample_engine(), "2\n2026-08-20\n3\n");
    // Apple expires exactly on the cutoff and stays out
    assert!(!output.contains("Apple "));
    let banana = output.find("Banana").expect("Banana row missing");
    let yogurt = output.find("Yogurt").expect("Yogurt row missing");
    assert!(banana < yogurt, "rows should sort ascending by name");
}

#[test]
fn unparsable_cutoff_is_rejected_and_the_loop_continues() {
    let output = run_script(&sample_engine(), "2\nnot-a-date\n3\n");
    assert!(output.contains("invalid input"));
    assert!(output.contains("[yyyy-mm-dd]"));
    assert_eq!(menu_count(&output), 2);
}

#[test]
fn out_of_range_selection_reprompts() {
    let output = run_script(&sample_engine(), "9\n3\n");
    assert!(output.contains("Selections should fit in the range [1;3]"));
    assert_eq!(menu_count(&output), 2);
}

#[test]
fn non_numeric_selection_reprompts() {
    let output = run_script(&sample_engine(), "menu please\n3\n");
    assert!(output.contains("Selections should be a number in the range [1;3]"));
    assert_eq!(menu_count(&output), 2);
}
