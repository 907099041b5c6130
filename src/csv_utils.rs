use csv::StringRecord;
use log::debug;

use crate::amount::split_money_sek;
use crate::images::payment_image;
use crate::types::{Error, PaymentInfo};

pub const MIN_COLUMNS: usize = 9;

#[derive(Copy, Clone, Debug, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    // A quote seen inside a quoted field: either the closing one or the
    // first half of an escaped `""`.
    QuoteInQuoted,
}

/// Rejects quoting the `csv` reader would otherwise accept silently: an
/// unclosed quoted field, a quote inside an unquoted field, or text after a
/// closing quote.
fn check_quotes(text: &str) -> Result<(), Error> {
    use QuoteState::*;

    let mut state = FieldStart;
    let mut line = 1;
    for c in text.chars() {
        let separator = c == ',' || c == '\n' || c == '\r';
        state = match (state, c) {
            (FieldStart, '"') => Quoted,
            (FieldStart | Unquoted, _) if separator => FieldStart,
            (FieldStart | Unquoted, '"') => {
                return Err(Error::CsvParse(format!(
                    "line {}: invalid quote inside unquoted field",
                    line
                )))
            }
            (FieldStart | Unquoted, _) => Unquoted,
            (Quoted, '"') => QuoteInQuoted,
            (Quoted, _) => Quoted,
            (QuoteInQuoted, '"') => Quoted,
            (QuoteInQuoted, _) if separator => FieldStart,
            (QuoteInQuoted, _) => {
                return Err(Error::CsvParse(format!(
                    "line {}: invalid closing quote",
                    line
                )))
            }
        };
        if c == '\n' {
            line += 1;
        }
    }

    if state == Quoted {
        return Err(Error::CsvParse(format!("line {}: quote not closed", line)));
    }
    Ok(())
}

/// Parses CSV text into records. The first row is a header and is skipped.
pub fn read_rows(text: &str) -> Result<Vec<StringRecord>, Error> {
    check_quotes(text)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn flag(cell: &str) -> bool {
    cell == "Y"
}

/// Builds a record from one data row. `row` is 1-based and used for errors.
pub fn payment_from_row(row: usize, cells: &StringRecord) -> Result<PaymentInfo, Error> {
    if cells.len() < MIN_COLUMNS {
        return Err(Error::MalformedRow {
            row,
            cells: cells.len(),
        });
    }

    let title = &cells[0];
    let payment = PaymentInfo {
        title: title.to_owned(),
        image: payment_image(title),
        is_deposit: flag(&cells[1]),
        is_withdraw: flag(&cells[2]),
        free_fixed: cells[3].to_owned(),
        free_percent: cells[4].to_owned(),
        min_deposit: split_money_sek(&cells[5])?,
        max_deposit: split_money_sek(&cells[6])?,
        min_withdrawal: split_money_sek(&cells[7])?,
        max_withdrawal: split_money_sek(&cells[8])?,
    };
    debug!("Row {}: {:?}", row, payment);
    Ok(payment)
}

pub fn load_payments(text: &str) -> Result<Vec<PaymentInfo>, Error> {
    read_rows(text)?
        .iter()
        .enumerate()
        .map(|(i, cells)| payment_from_row(i + 1, cells))
        .collect()
}
