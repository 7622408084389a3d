//! Interactive menu loop over the consolidated record set.

use std::io::{BufRead, Write};

use stocktake_inventory::{QueryEngine, Record};

/// Run the menu loop until the user quits or input ends.
///
/// Reads selections and query parameters from `input` and renders to
/// `output`; both are generic so tests can drive the whole loop in memory.
/// Invalid selections and invalid query parameters print a short message
/// and fall through to the next prompt - the loop never aborts on them.
pub fn run(
    engine: &QueryEngine,
    mut input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    loop {
        write_menu(&mut output)?;
        let Some(selection) = read_line(&mut input)? else {
            return Ok(());
        };

        match selection.trim() {
            "1" => below_quantity_report(engine, &mut input, &mut output)?,
            "2" => before_date_report(engine, &mut input, &mut output)?,
            "3" => return Ok(()),
            other if other.parse::<i64>().is_ok() => {
                writeln!(output, "Selections should fit in the range [1;3]")?;
            }
            _ => {
                writeln!(output, "Selections should be a number in the range [1;3]")?;
            }
        }
    }
}

fn write_menu(output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "=========== Inventory operations ===========")?;
    writeln!(output, "[1] Review shortages below a stock level")?;
    writeln!(output, "[2] Check items whose expiration date has")?;
    writeln!(output, "    passed or is coming up")?;
    writeln!(output, "[3] Quit")?;
    writeln!(output, "=============================================")
}

fn below_quantity_report(
    engine: &QueryEngine,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(output, "Which stock level should be checked?")?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    let threshold: i64 = match line.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            writeln!(output, "The stock level should be a natural number.")?;
            return Ok(());
        }
    };

    match engine.below_quantity(threshold) {
        Ok(rows) => write_rows(output, &rows),
        Err(err) => writeln!(output, "{err}"),
    }
}

fn before_date_report(
    engine: &QueryEngine,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(output, "Which expiration date should be checked?")?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    match engine.before_date(line.trim()) {
        Ok(rows) => write_rows(output, &rows),
        Err(err) => writeln!(output, "{err}"),
    }
}

fn write_rows(output: &mut impl Write, records: &[Record]) -> std::io::Result<()> {
    for record in records {
        writeln!(output, "{}", format_row(record))?;
    }
    Ok(())
}

/// One result row in the fixed-width layout: name left-aligned to 16
/// columns, code right-aligned to 20, quantity right-aligned to 6,
/// expiration right-aligned to 10.
pub fn format_row(record: &Record) -> String {
    format!(
        "{:<16} {:>20} {:>6} {:>10}",
        record.name(),
        record.code(),
        record.quantity(),
        record.expiration()
    )
}

/// `None` means end of input.
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
