//! Builders and codecs for printer command text.
//!
//! Commands travel as hex text: two case-insensitive hex digits per byte,
//! decoded and wrapped in an STX/ETX frame right before transmission. The
//! builders in this module produce that hex text for label writes and buffer
//! wipes, and compose the label line with its printed date stamp.

use crate::constants::*;
use crate::error::{CijError, Result};
use chrono::{Datelike, NaiveDate};

/// English month abbreviations as they appear in the printed date stamp
const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Decode command text as hex, two digits per byte.
///
/// Strict: every character must be a hex digit and the digit count must be
/// even. Case does not matter.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(CijError::Encoding(format!("invalid hex character {:?}", bad)));
    }
    if text.len() % 2 != 0 {
        return Err(CijError::Encoding(format!(
            "odd number of hex digits ({})",
            text.len()
        )));
    }
    let mut bytes = Vec::with_capacity(text.len() / 2);
    for i in (0..text.len()).step_by(2) {
        let byte = u8::from_str_radix(&text[i..i + 2], 16)
            .map_err(|e| CijError::Encoding(e.to_string()))?;
        bytes.push(byte);
    }
    Ok(bytes)
}

/// Wrap a decoded payload with the STX/ETX frame markers.
pub fn frame(payload: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(payload.len() + 2);
    framed.push(STX);
    framed.extend_from_slice(payload);
    framed.push(ETX);
    framed
}

/// Encode ASCII label text as field-addressed command hex.
///
/// The output selects field 1 first. A `|` in the text closes the current
/// field with a space and advances to the next one; a field that reaches
/// [`FIELD_WIDTH`] characters spills into the next field automatically.
/// Field numbers ascend from the first selector without an upper bound.
pub fn encode_text(text: &str) -> String {
    let mut field = u32::from(FIRST_FIELD);
    let mut chars_in_field = 0usize;
    let mut encoded = field_selector(field);
    for c in text.chars() {
        if c == '|' {
            field += 1;
            encoded.push_str(&format!("{:02x}", b' '));
            encoded.push_str(&field_selector(field));
            chars_in_field = 0;
        } else if chars_in_field == FIELD_WIDTH {
            field += 1;
            encoded.push_str(&field_selector(field));
            encoded.push_str(&format!("{:02x}", c as u32));
            chars_in_field = 0;
        } else {
            encoded.push_str(&format!("{:02x}", c as u32));
            chars_in_field += 1;
        }
    }
    encoded
}

/// Command text that wipes every message field on the printer.
///
/// Selects fields [`FIRST_FIELD`]..=[`LAST_FIELD`] in order, each with no
/// content.
pub fn clear_command() -> String {
    (FIRST_FIELD..=LAST_FIELD)
        .map(|field| field_selector(u32::from(field)))
        .collect()
}

/// Compose the label line from remotely fetched text.
///
/// Parts are `|`-separated and trimmed; the printed date stamp slots in after
/// the second part, and the line carries the `ROG` header and the `%%%`
/// terminator.
pub fn compose_label(text: &str, date: NaiveDate) -> String {
    let mut line = String::from("ROG|");
    for (i, part) in text.split('|').enumerate() {
        line.push_str(part.trim());
        line.push('|');
        if i == 1 {
            line.push_str(&format_print_date(date));
            line.push('|');
        }
    }
    line.push_str("%%%");
    line
}

/// Date stamp printed on the label: unpadded day, then the English month
/// abbreviation, then a two-digit year (`25AUG26`).
pub fn format_print_date(date: NaiveDate) -> String {
    format!(
        "{}{}{:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year() % 100
    )
}

fn field_selector(field: u32) -> String {
    format!("{:02x}{:02x}", DLE, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn decode_and_frame_wrap_the_payload() {
        let payload = decode_hex("0102").unwrap();
        assert_eq!(frame(&payload), vec![0x02, 0x01, 0x02, 0x03]);

        let hex = "0aFf10";
        let framed = frame(&decode_hex(hex).unwrap());
        assert_eq!(framed.len(), hex.len() / 2 + 2);
        assert_eq!(framed[0], STX);
        assert_eq!(*framed.last().unwrap(), ETX);
        assert_eq!(&framed[1..framed.len() - 1], &[0x0A, 0xFF, 0x10]);
    }

    #[test]
    fn decode_rejects_odd_length() {
        let err = decode_hex("010").unwrap_err();
        assert!(matches!(err, CijError::Encoding(_)));
    }

    #[test]
    fn decode_rejects_non_hex_characters() {
        assert!(matches!(decode_hex("0g").unwrap_err(), CijError::Encoding(_)));
        // separators are not tolerated either
        assert!(matches!(decode_hex("01 02").unwrap_err(), CijError::Encoding(_)));
    }

    #[test]
    fn encode_starts_with_the_first_field() {
        assert_eq!(encode_text(""), "1031");
        assert_eq!(encode_text("AB"), "10314142");
    }

    #[test]
    fn encode_advances_field_on_separator() {
        // the separator renders as a space before the next selector
        assert_eq!(encode_text("AB|CD"), "103141422010324344");
    }

    #[test]
    fn encode_spills_into_next_field_after_width() {
        assert_eq!(encode_text("ABCDEFGHIJK"), "10314142434445464748494a10324b");
    }

    #[test]
    fn clear_command_selects_every_field_empty() {
        let bytes = decode_hex(&clear_command()).unwrap();
        assert_eq!(bytes.len(), 62);
        for (i, pair) in bytes.chunks(2).enumerate() {
            assert_eq!(pair[0], DLE);
            assert_eq!(pair[1], FIRST_FIELD + i as u8);
        }
        assert_eq!(bytes[61], LAST_FIELD);
    }

    #[test]
    fn compose_inserts_date_after_second_part() {
        let line = compose_label("ABC | LOT123| XYZ", date(2026, 8, 25));
        assert_eq!(line, "ROG|ABC|LOT123|25AUG26|XYZ|%%%");
    }

    #[test]
    fn print_date_keeps_day_unpadded() {
        assert_eq!(format_print_date(date(2026, 8, 25)), "25AUG26");
        assert_eq!(format_print_date(date(2031, 1, 7)), "7JAN31");
        assert_eq!(format_print_date(date(1999, 12, 31)), "31DEC99");
    }
}
