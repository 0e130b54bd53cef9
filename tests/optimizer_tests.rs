mod common;

use common::css_assertions::total_percent;
use common::fixtures::*;
use common::{TestResult, fill, optimizer, optimizer_with, test_config};
use tablefit::layout::LayoutError;
use tablefit::{Fit, OptimizerConfig, OptimizerError, Strategy};

#[test]
fn test_evenly_splits_all_columns() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut table = optimizer(400.0)?;
    fill(&mut table, &["A", "B", "C", "D"], &[&["1", "2", "3", "4"]]);

    let sized = table.determine_column_widths_evenly("100%", &[])?;
    assert_eq!(sized.widths.fractions(), &[0.25, 0.25, 0.25, 0.25]);
    assert_eq!(
        sized.css,
        ".col0 { width: 25.00% }\n.col1 { width: 25.00% }\n.col2 { width: 25.00% }\n.col3 { width: 25.00% }\n"
    );
    Ok(())
}

#[test]
fn test_evenly_with_fixed_column() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut table = optimizer(200.0)?;
    fill(&mut table, &["A", "B", "C"], &[]);

    let sized = table.determine_column_widths_evenly("100%", &[(0, ""), (1, "50pt")])?;
    assert_column_width!(sized.css, "col0", 37.5);
    assert_column_width!(sized.css, "col1", 25.0);
    assert_column_width!(sized.css, "col2", 37.5);
    Ok(())
}

#[test]
fn test_evenly_reports_offending_column() -> TestResult {
    let mut table = optimizer(200.0)?;
    fill(&mut table, &["A", "B", "C"], &[]);

    let result = table.determine_column_widths_evenly("100%", &[(5, "10pt")]);
    assert!(matches!(
        result,
        Err(OptimizerError::Layout(LayoutError::FixedWidthOutOfRange {
            column: 5,
            columns: 3
        }))
    ));
    Ok(())
}

#[test]
fn test_minimum_strategy_on_invoice() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut table = optimizer(400.0)?;
    let rows = invoice_rows();
    let rows: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();
    fill(&mut table, &invoice_header(), &rows);

    let sized = table.determine_column_widths_by_minimum_strategy("100%", "aaa")?;
    assert!(sized.widths.is_exact());
    // Longest words: "accommodation", "Qty", "Amount"; the long descriptions
    // claim most of the remainder.
    assert_column_width!(sized.css, "col0", 90.1);
    assert_column_width!(sized.css, "col1", 1.5);
    assert_column_width!(sized.css, "col2", 8.4);
    Ok(())
}

#[test]
fn test_minimum_strategy_flags_overflow() -> TestResult {
    let mut table = optimizer(20.0)?;
    fill(&mut table, &["abcdefghij", "klmnopqrst"], &[]);

    let sized = table.determine(&Strategy::minimum("100%".parse()?))?;
    assert!(matches!(sized.widths.fit(), Fit::Overflow { demand } if demand > 1.0));
    assert!((total_percent(&sized.css) - 100.0).abs() < 0.02);
    Ok(())
}

#[test]
fn test_weighted_floor_and_redistribution() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut table = optimizer(500.0)?;
    let (small, large) = ("x".repeat(5), "x".repeat(90));
    fill(&mut table, &[small.as_str(), small.as_str(), large.as_str()], &[]);

    let sized = table.determine_column_widths_by_weighting()?;
    assert_column_width!(sized.css, "col0", 6.5);
    assert_column_width!(sized.css, "col1", 6.5);
    assert_column_width!(sized.css, "col2", 87.0);
    Ok(())
}

#[test]
fn test_weighted_floor_overflow_still_emits_every_rule() -> TestResult {
    let mut table = optimizer(500.0)?;
    fill(&mut table, &[""; 20], &[]);

    let sized = table.determine(&Strategy::Weighted)?;
    assert!(matches!(
        sized.widths.fit(),
        Fit::Overflow { demand } if (demand - 1.3).abs() < 1e-9
    ));
    assert_eq!(sized.css.lines().count(), 20);
    assert_column_width!(sized.css, "col19", 6.5);
    assert!((total_percent(&sized.css) - 130.0).abs() < 0.02);
    Ok(())
}

#[test]
fn test_weighted_invoice_sums_to_whole_table() -> TestResult {
    let mut table = optimizer(400.0)?;
    let rows = invoice_rows();
    let rows: Vec<&[&str]> = rows.iter().map(Vec::as_slice).collect();
    fill(&mut table, &invoice_header(), &rows);

    let sized = table.determine(&Strategy::Weighted)?;
    assert!(sized.widths.is_exact());
    let fractions = sized.widths.fractions();
    assert!(fractions[0] > fractions[2] && fractions[2] > fractions[1]);
    assert!((total_percent(&sized.css) - 100.0).abs() < 0.02);
    Ok(())
}

#[test]
fn test_minimum_percentage_from_reference_string() -> TestResult {
    let mut table = optimizer(300.0)?;
    let floor = table.set_minimum_percentage_based_on_string("Subtotal:", "100%")?;
    assert!((floor - 3.0).abs() < 1e-9);
    assert!((table.allocator().min_percent() - 3.0).abs() < 1e-9);

    // With a 3% floor a 5% column is left alone.
    let (small, large) = ("x".repeat(5), "x".repeat(95));
    fill(&mut table, &[small.as_str(), large.as_str()], &[]);
    let sized = table.determine_column_widths_by_weighting()?;
    assert_column_width!(sized.css, "col0", 5.0);
    Ok(())
}

#[test]
fn test_render_combines_css_and_markup() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = OptimizerConfig {
        column_class_prefix: "c".to_string(),
        header_classes_on_cells: true,
        ..test_config()
    };
    let mut table = optimizer_with(300.0, &config)?;
    table.add_header_cell("Item", "left");
    table.add_header_cell("Qty", "num");
    for (item, qty) in [("Widget", "3"), ("Gadget", "12"), ("Gizmo", "1")] {
        table.start_data_row();
        table.add_data_row_cell(item, "");
        table.add_data_row_cell(qty, "strong");
        table.end_data_row();
    }

    let output = table.render(&Strategy::evenly("100%".parse()?, vec![]))?;
    assert_eq!(output.css, ".c0 { width: 50.00% }\n.c1 { width: 50.00% }\n");
    assert_html_contains!(output.html, "<th class=\"c1 num\">Qty</th>");
    assert_html_contains!(output.html, "<td class=\"c1 num strong\">3</td>");
    assert_html_contains!(output.html, "<tr class=\"row-odd\">\n<td class=\"c0 left\">Gadget</td>");
    assert_eq!(output.html.matches("row-even").count(), 2);

    let document = output.to_document();
    assert!(document.starts_with("<style>\n.c0 { width: 50.00% }\n"));
    assert_html_contains!(document, "</style>\n<table>");
    Ok(())
}

#[test]
fn test_reset_data_empties_the_table() -> TestResult {
    let mut table = optimizer(300.0)?;
    fill(&mut table, &["A", "B"], &[&["1", "2"]]);
    table.reset_data();

    assert_eq!(table.content().column_count(), 0);
    assert!(matches!(
        table.determine(&Strategy::Weighted),
        Err(OptimizerError::Layout(LayoutError::NoColumns))
    ));
    Ok(())
}

#[test]
fn test_ragged_rows_are_rejected_before_rendering() -> TestResult {
    let mut table = optimizer(300.0)?;
    fill(&mut table, &["A", "B"], &[&["1", "2"], &["3"]]);

    assert!(matches!(
        table.render(&Strategy::Weighted),
        Err(OptimizerError::Layout(LayoutError::RowLengthMismatch {
            row: 1,
            expected: 2,
            found: 1
        }))
    ));
    assert!(matches!(
        table.render_html(),
        Err(OptimizerError::Render(_))
    ));
    Ok(())
}

#[test]
fn test_invalid_lengths_are_style_errors() -> TestResult {
    let mut table = optimizer(300.0)?;
    fill(&mut table, &["A"], &[]);

    assert!(matches!(
        table.determine_column_widths_evenly("wide", &[]),
        Err(OptimizerError::Style(_))
    ));
    assert!(matches!(
        table.determine_column_widths_by_minimum_strategy("wide", "aaa"),
        Err(OptimizerError::Style(_))
    ));
    assert!(matches!(
        table.set_minimum_percentage_based_on_string("Subtotal:", "50pc"),
        Err(OptimizerError::Style(_))
    ));
    assert!(matches!(
        optimizer_with(
            300.0,
            &OptimizerConfig {
                font_size: "large".to_string(),
                ..Default::default()
            }
        ),
        Err(OptimizerError::Style(_))
    ));
    Ok(())
}
