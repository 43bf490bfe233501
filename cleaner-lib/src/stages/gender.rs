//! Categorical gender-code mapping.

use crate::workbook::{CellValue, Sheet};

pub const MALE_CODE: &str = "001";
pub const FEMALE_CODE: &str = "002";

/// Replace exact `"M"`/`"Male"` and `"F"`/`"Female"` values with the fixed
/// submission codes. Case-sensitive, no trimming; every row in the column
/// is mapped, header included, so header text must never collide with the
/// literals. Returns how many cells changed.
pub fn map_gender_codes(sheet: &mut Sheet, columns: &[usize]) -> usize {
    let mut mapped = 0;
    for &col in columns {
        for cell in sheet.column_cells_mut(col) {
            if let CellValue::Text(value) = cell {
                let code = match value.as_str() {
                    "M" | "Male" => Some(MALE_CODE),
                    "F" | "Female" => Some(FEMALE_CODE),
                    _ => None,
                };
                if let Some(code) = code {
                    *value = code.to_string();
                    mapped += 1;
                }
            }
        }
    }
    mapped
}
