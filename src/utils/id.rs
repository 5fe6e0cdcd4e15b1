//! SSN / member-number normalization.

use crate::sheet::Cell;

pub const ID_WIDTH: usize = 9;

/// Normalize an identifier cell to a zero-padded 9-digit string.
///
/// Float, text and pre-formatted (`123-45-6789`) forms of the same number all
/// normalize to the same string. A value without digits gives an empty string.
pub fn normalize_id(value: &Cell) -> String {
    normalize_id_str(&value.as_text())
}

pub fn normalize_id_str(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return digits;
    }
    format!("{digits:0>width$}", width = ID_WIDTH)
}
