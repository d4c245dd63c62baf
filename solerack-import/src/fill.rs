//! Forward-fill normalization for sparse spreadsheet blocks.
//!
//! The workbook convention enters a multi-size product as one fully
//! populated header row followed by bare size rows. Reconstructing those
//! blocks is an explicit fold: the accumulator holds the last seen non-empty
//! value per block column and resets at every worksheet boundary, so
//! inheritance can never leak from one sheet into the next.

use solerack_catalog::types::RawRow;

/// Last seen non-empty value for each block column of the current sheet.
#[derive(Debug, Default, Clone)]
struct FillState {
    brand: String,
    model: String,
    gender: String,
    color: String,
    image: String,
    price: String,
    description: String,
    in_stock: String,
    preorder: String,
}

impl FillState {
    fn apply(&mut self, row: &mut RawRow) {
        fill_field(&mut row.brand, &mut self.brand);
        fill_field(&mut row.model, &mut self.model);
        fill_field(&mut row.gender, &mut self.gender);
        fill_field(&mut row.color, &mut self.color);
        fill_field(&mut row.image, &mut self.image);
        fill_field(&mut row.price, &mut self.price);
        fill_field(&mut row.description, &mut self.description);
        fill_field(&mut row.in_stock, &mut self.in_stock);
        fill_field(&mut row.preorder, &mut self.preorder);
    }
}

fn fill_field(cell: &mut String, last: &mut String) {
    if cell.is_empty() {
        cell.clone_from(last);
    } else {
        last.clone_from(cell);
    }
}

/// Fill block columns in place across an ordered, sheet-stamped row
/// sequence.
///
/// Empty block cells inherit the nearest preceding non-empty value within
/// the same worksheet. Per-row columns (`size US`, `size EU`, `sizes`,
/// `SKU`) are never filled. A no-op on fully populated input.
pub fn forward_fill(rows: &mut [RawRow]) {
    let mut state = FillState::default();
    let mut current_sheet: Option<String> = None;

    for row in rows.iter_mut() {
        if current_sheet.as_deref() != Some(row.sheet.as_str()) {
            state = FillState::default();
            current_sheet = Some(row.sheet.clone());
        }
        state.apply(row);
    }
}
