//! Interactive entry of the forecast horizon.

use std::io::{BufRead, Write};

use crate::error::{DemandError, Result};

/// Ask for the forecast horizon until a positive integer is entered.
///
/// Lines that are not valid UTF-8 count as invalid answers. Returns
/// [`DemandError::NoInput`] if input ends first.
pub fn prompt_days<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    write!(output, "Enter the number of days to forecast: ")?;
    output.flush()?;

    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(DemandError::NoInput);
        }
        match parse_days(&line) {
            Some(days) => return Ok(days),
            None => {
                write!(output, "Please enter a positive integer: ")?;
                output.flush()?;
            }
        }
    }
}

fn parse_days(line: &[u8]) -> Option<i64> {
    let text = std::str::from_utf8(line).ok()?;
    text.trim().parse::<i64>().ok().filter(|&days| days > 0)
}
