//! Workbook ingestion: read every worksheet, probe headers, stamp rows.
//!
//! The workbook has no fixed schema version. Column headers are probed
//! case-insensitively and whitespace-tolerantly per sheet; missing optional
//! columns simply yield empty cells. Every row is stamped with its source
//! sheet name, which doubles as the brand fallback downstream.

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use log::{debug, info};
use solerack_catalog::types::RawRow;

use crate::error::CatalogLoadError;

/// Column positions found in one sheet's header row.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct HeaderMap {
    brand: Option<usize>,
    model: Option<usize>,
    gender: Option<usize>,
    color: Option<usize>,
    image: Option<usize>,
    price: Option<usize>,
    size_us: Option<usize>,
    size_eu: Option<usize>,
    sizes: Option<usize>,
    sku: Option<usize>,
    description: Option<usize>,
    in_stock: Option<usize>,
    preorder: Option<usize>,
}

fn probe_headers(row: &[Data]) -> HeaderMap {
    let mut map = HeaderMap::default();
    for (idx, cell) in row.iter().enumerate() {
        let name = normalize_header(cell);
        let slot = match name.as_str() {
            "brand" => &mut map.brand,
            "model" | "name" => &mut map.model,
            "gender" | "sex" => &mut map.gender,
            "color" | "colour" => &mut map.color,
            "image" | "images" | "photo" => &mut map.image,
            "price" | "prices" => &mut map.price,
            "size us" | "size_us" | "us size" => &mut map.size_us,
            "size eu" | "size_eu" | "eu size" => &mut map.size_eu,
            "sizes" => &mut map.sizes,
            "sku" | "article" => &mut map.sku,
            "description" => &mut map.description,
            "in stock" | "in_stock" | "stock" => &mut map.in_stock,
            "preorder" | "pre-order" => &mut map.preorder,
            _ => continue,
        };
        // First matching header wins if a name repeats.
        if slot.is_none() {
            *slot = Some(idx);
        }
    }
    map
}

/// Lower-case a header cell and collapse runs of whitespace.
fn normalize_header(cell: &Data) -> String {
    cell_to_string(cell)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render one cell as trimmed text.
///
/// Numeric cells with no fractional part come out as integer strings so a
/// SKU column read as `100001.0` survives as `"100001"`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => {
            if *b {
                "yes".to_string()
            } else {
                "no".to_string()
            }
        }
        other => other.to_string().trim().to_string(),
    }
}

fn cell_at(row: &[Data], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).map(cell_to_string).unwrap_or_default()
}

/// Convert one worksheet range into stamped raw rows, appending to `out`.
///
/// The first row is the header row. Fully empty rows are skipped; they are
/// formatting artifacts and carry nothing for forward-fill to inherit.
fn rows_from_range(
    sheet: &str,
    range: &Range<Data>,
    out: &mut Vec<RawRow>,
    max_rows: usize,
) -> Result<(), CatalogLoadError> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(());
    };
    let headers = probe_headers(header_row);

    for row in rows {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        if out.len() >= max_rows {
            return Err(CatalogLoadError::TooManyRows { limit: max_rows });
        }
        out.push(RawRow {
            sheet: sheet.to_string(),
            brand: cell_at(row, headers.brand),
            model: cell_at(row, headers.model),
            gender: cell_at(row, headers.gender),
            color: cell_at(row, headers.color),
            image: cell_at(row, headers.image),
            price: cell_at(row, headers.price),
            size_us: cell_at(row, headers.size_us),
            size_eu: cell_at(row, headers.size_eu),
            sizes: cell_at(row, headers.sizes),
            sku: cell_at(row, headers.sku),
            description: cell_at(row, headers.description),
            in_stock: cell_at(row, headers.in_stock),
            preorder: cell_at(row, headers.preorder),
        });
    }
    Ok(())
}

/// Read every worksheet of an xlsx workbook into one ordered row sequence.
///
/// Sheet order and per-sheet row order are preserved. `max_rows` bounds the
/// total row count so a malformed workbook cannot run the load away; hitting
/// it is a [`CatalogLoadError`], not silent truncation.
pub fn read_workbook(path: &Path, max_rows: usize) -> Result<Vec<RawRow>, CatalogLoadError> {
    if !path.exists() {
        return Err(CatalogLoadError::WorkbookMissing(path.to_path_buf()));
    }
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e| CatalogLoadError::Workbook {
            path: path.display().to_string(),
            source: e,
        })?;

    let sheet_names = workbook.sheet_names().to_owned();
    let mut rows = Vec::new();
    for name in &sheet_names {
        let range = workbook
            .worksheet_range(name)
            .map_err(|e| CatalogLoadError::Sheet {
                sheet: name.clone(),
                source: e,
            })?;
        let before = rows.len();
        rows_from_range(name, &range, &mut rows, max_rows)?;
        debug!("sheet {name}: {} rows", rows.len() - before);
    }

    info!(
        "read {} rows from {} sheets in {}",
        rows.len(),
        sheet_names.len(),
        path.display()
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(range: &mut Range<Data>, cols: &[&str]) {
        for (i, name) in cols.iter().enumerate() {
            range.set_value((0, i as u32), Data::String(name.to_string()));
        }
    }

    #[test]
    fn probes_headers_case_and_whitespace_tolerant() {
        let mut range = Range::new((0, 0), (1, 5));
        header(&mut range, &["  Brand ", "MODEL", "Size  US", "in Stock", "SKU", "Price"]);
        range.set_value((1, 0), Data::String("Nike".to_string()));
        range.set_value((1, 1), Data::String("Air Max".to_string()));
        range.set_value((1, 2), Data::String("9.5".to_string()));
        range.set_value((1, 3), Data::String("yes".to_string()));
        range.set_value((1, 4), Data::Float(100001.0));
        range.set_value((1, 5), Data::Float(45000.0));

        let mut out = Vec::new();
        rows_from_range("Nike", &range, &mut out, 100).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].brand, "Nike");
        assert_eq!(out[0].model, "Air Max");
        assert_eq!(out[0].size_us, "9.5");
        assert_eq!(out[0].in_stock, "yes");
        assert_eq!(out[0].sku, "100001");
        assert_eq!(out[0].price, "45000");
    }

    #[test]
    fn missing_optional_columns_default_to_empty() {
        let mut range = Range::new((0, 0), (1, 1));
        header(&mut range, &["brand", "model"]);
        range.set_value((1, 0), Data::String("Adidas".to_string()));
        range.set_value((1, 1), Data::String("Gazelle".to_string()));

        let mut out = Vec::new();
        rows_from_range("Adidas", &range, &mut out, 100).unwrap();
        assert_eq!(out[0].sku, "");
        assert_eq!(out[0].size_eu, "");
        assert_eq!(out[0].description, "");
    }

    #[test]
    fn rows_are_stamped_with_sheet_name() {
        let mut range = Range::new((0, 0), (1, 0));
        header(&mut range, &["model"]);
        range.set_value((1, 0), Data::String("Dunk Low".to_string()));

        let mut out = Vec::new();
        rows_from_range("New Balance", &range, &mut out, 100).unwrap();
        assert_eq!(out[0].sheet, "New Balance");
    }

    #[test]
    fn fully_empty_rows_are_skipped() {
        let mut range = Range::new((0, 0), (3, 1));
        header(&mut range, &["brand", "model"]);
        range.set_value((1, 0), Data::String("Nike".to_string()));
        range.set_value((1, 1), Data::String("Air Max".to_string()));
        // row 2 left entirely empty
        range.set_value((3, 1), Data::String("Dunk".to_string()));

        let mut out = Vec::new();
        rows_from_range("Nike", &range, &mut out, 100).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].model, "Dunk");
    }

    #[test]
    fn row_guard_aborts_the_load() {
        let mut range = Range::new((0, 0), (3, 0));
        header(&mut range, &["model"]);
        for r in 1..=3u32 {
            range.set_value((r, 0), Data::String(format!("Model {r}")));
        }

        let mut out = Vec::new();
        let err = rows_from_range("Nike", &range, &mut out, 2).unwrap_err();
        assert!(matches!(err, CatalogLoadError::TooManyRows { limit: 2 }));
    }

    #[test]
    fn header_only_sheet_yields_no_rows() {
        let mut range = Range::new((0, 0), (0, 2));
        header(&mut range, &["brand", "model", "price"]);

        let mut out = Vec::new();
        rows_from_range("Nike", &range, &mut out, 100).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn fractional_floats_keep_their_fraction() {
        let mut range = Range::new((0, 0), (1, 0));
        header(&mut range, &["size us"]);
        range.set_value((1, 0), Data::Float(9.5));

        let mut out = Vec::new();
        rows_from_range("Nike", &range, &mut out, 100).unwrap();
        assert_eq!(out[0].size_us, "9.5");
    }
}
