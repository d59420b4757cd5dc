use crate::cmd::classify::Classification;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strokematch::consts::DIGIT_COUNT;
use strokematch::evaluation::EvaluationReport;
use strokematch::matcher::MatchDetails;

fn right_align(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_classification_report(results: &[Classification]) {
    let mut table = new_table();
    let mut header = vec![
        Cell::new("Stroke").add_attribute(Attribute::Bold),
        Cell::new("Pts"),
        Cell::new("Digit").fg(Color::Cyan),
        Cell::new("Score"),
        Cell::new("Margin"),
    ];
    header.extend((0..DIGIT_COUNT).map(|d| Cell::new(d.to_string())));
    table.add_row(header);
    right_align(&mut table, 1, 4 + DIGIT_COUNT);

    for r in results {
        let d = &r.details;
        let mut row = vec![
            Cell::new(&r.file).add_attribute(Attribute::Bold),
            Cell::new(r.points),
            Cell::new(d.digit).fg(Color::Cyan),
            Cell::new(d.score),
            Cell::new(d.margin()),
        ];
        row.extend(d.scores.iter().enumerate().map(|(i, s)| {
            let cell = Cell::new(s);
            if i == d.digit {
                cell.fg(Color::Green)
            } else {
                cell
            }
        }));
        table.add_row(row);
    }
    println!("{}", table);
}

pub fn print_self_check_report(results: &[(usize, MatchDetails)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Reference").add_attribute(Attribute::Bold),
        Cell::new("Recognized"),
        Cell::new("Score"),
        Cell::new("Margin"),
        Cell::new("Status"),
    ]);
    right_align(&mut table, 1, 3);

    for (expected, d) in results {
        let ok = d.digit == *expected && d.score == 0;
        table.add_row(vec![
            Cell::new(expected).add_attribute(Attribute::Bold),
            Cell::new(d.digit),
            Cell::new(d.score),
            Cell::new(d.margin()),
            if ok {
                Cell::new("OK").fg(Color::Green)
            } else {
                Cell::new("FAIL").fg(Color::Red)
            },
        ]);
    }
    println!("{}", table);
}

pub fn print_accuracy_report(report: &EvaluationReport) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Digit").add_attribute(Attribute::Bold),
        Cell::new("Samples"),
        Cell::new("Correct"),
        Cell::new("Accuracy").fg(Color::Cyan),
        Cell::new("Most confused with"),
    ]);
    right_align(&mut table, 1, 4);

    for digit in 0..DIGIT_COUNT {
        let worst = (0..DIGIT_COUNT)
            .filter(|&other| other != digit && report.confusion[digit][other] > 0)
            .max_by_key(|&other| report.confusion[digit][other])
            .map(|other| format!("{} ({}x)", other, report.confusion[digit][other]))
            .unwrap_or_else(|| "-".to_string());

        let acc = report.accuracy(digit);
        let color = if acc >= 0.9 {
            Color::Green
        } else if acc >= 0.6 {
            Color::Yellow
        } else {
            Color::Red
        };

        table.add_row(vec![
            Cell::new(digit).add_attribute(Attribute::Bold),
            Cell::new(report.total(digit)),
            Cell::new(report.correct(digit)),
            Cell::new(format!("{:.1}%", acc * 100.0)).fg(color),
            Cell::new(worst),
        ]);
    }
    println!("{}", table);
}

pub fn print_confusion_matrix(report: &EvaluationReport) {
    println!("\nConfusion matrix (rows: expected, columns: recognized)");
    let mut table = new_table();
    let mut header = vec![Cell::new("")];
    header.extend((0..DIGIT_COUNT).map(|d| Cell::new(d).add_attribute(Attribute::Bold)));
    table.add_row(header);
    right_align(&mut table, 1, DIGIT_COUNT);

    for (expected, row) in report.confusion.iter().enumerate() {
        let mut cells = vec![Cell::new(expected).add_attribute(Attribute::Bold)];
        cells.extend(row.iter().enumerate().map(|(recognized, &n)| {
            let cell = Cell::new(n);
            match (n, recognized == expected) {
                (0, _) => cell,
                (_, true) => cell.fg(Color::Green),
                (_, false) => cell.fg(Color::Red),
            }
        }));
        table.add_row(cells);
    }
    println!("{}", table);
}
