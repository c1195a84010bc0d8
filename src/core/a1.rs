use crate::core::errors::BillmateError;

/// A parsed A1-notation range such as `Bills!A:E`, `Home!B1` or `Home!A1:B1`.
///
/// Rows and columns are zero-based; `None` bounds are open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct A1Range {
    pub tab: String,
    pub start_col: usize,
    pub start_row: Option<usize>,
    pub end_col: Option<usize>,
    pub end_row: Option<usize>,
}

impl A1Range {
    pub fn parse(input: &str) -> Result<Self, BillmateError> {
        let input = input.trim();
        let (tab, cells) = match input.split_once('!') {
            Some((tab, cells)) => (tab, Some(cells)),
            None => (input, None),
        };
        let tab = tab.trim_matches('\'');
        if tab.is_empty() {
            return Err(BillmateError::InvalidRange(input.to_string()));
        }

        let Some(cells) = cells else {
            return Ok(A1Range {
                tab: tab.to_string(),
                start_col: 0,
                start_row: None,
                end_col: None,
                end_row: None,
            });
        };

        let (start, end) = match cells.split_once(':') {
            Some((start, end)) => (start, Some(end)),
            None => (cells, None),
        };
        let (start_col, start_row) = parse_cell(start).ok_or_else(|| BillmateError::InvalidRange(input.to_string()))?;
        let (end_col, end_row) = match end {
            Some(end) => parse_cell(end).ok_or_else(|| BillmateError::InvalidRange(input.to_string()))?,
            // A single cell is its own end.
            None => (start_col, start_row),
        };

        if end_col < start_col || matches!((start_row, end_row), (Some(s), Some(e)) if e < s) {
            return Err(BillmateError::InvalidRange(input.to_string()));
        }

        Ok(A1Range {
            tab: tab.to_string(),
            start_col,
            start_row,
            end_col: Some(end_col),
            end_row,
        })
    }

    /// Whether `col` falls inside the column bounds.
    pub fn contains_col(&self, col: usize) -> bool {
        col >= self.start_col && self.end_col.is_none_or(|end| col <= end)
    }

    /// Whether `row` falls inside the row bounds.
    pub fn contains_row(&self, row: usize) -> bool {
        self.start_row.is_none_or(|start| row >= start) && self.end_row.is_none_or(|end| row <= end)
    }
}

/// `B12` -> `(1, Some(11))`, `E` -> `(4, None)`.
fn parse_cell(cell: &str) -> Option<(usize, Option<usize>)> {
    let cell = cell.trim();
    let split = cell.find(|c: char| c.is_ascii_digit()).unwrap_or(cell.len());
    let (letters, digits) = cell.split_at(split);
    if letters.is_empty() {
        return None;
    }
    let col = column_index(letters)?;
    let row = if digits.is_empty() {
        None
    } else {
        let row: usize = digits.parse().ok()?;
        if row == 0 {
            return None;
        }
        Some(row - 1)
    };
    Some((col, row))
}

/// `A` -> 0, `Z` -> 25, `AA` -> 26.
pub fn column_index(letters: &str) -> Option<usize> {
    let mut index = 0usize;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let value = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index.checked_mul(26)?.checked_add(value)?;
    }
    index.checked_sub(1)
}
