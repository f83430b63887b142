use contracts::domain::a001_catalog_product::aggregate::CatalogProduct;
use std::path::Path;

use super::catalog::Catalog;
use super::error::DataLoadError;
use super::normalize::{cell_text, parse_date, parse_price};
use super::sheet::{read_workbook, Cell, RawSheet};

/// Колонка файла: каноническое имя и допустимые варианты заголовка
struct ColumnSpec {
    name: &'static str,
    aliases: &'static [&'static str],
}

const TITLE: ColumnSpec = ColumnSpec {
    name: "product_title",
    aliases: &["product_title", "title", "name"],
};
const BRAND: ColumnSpec = ColumnSpec {
    name: "brand",
    aliases: &["brand"],
};
const PRICE: ColumnSpec = ColumnSpec {
    name: "price",
    aliases: &["price"],
};
const AFTER_SALE: ColumnSpec = ColumnSpec {
    name: "after_sale",
    aliases: &["after_sale", "after_sale_price"],
};
const DISCOUNT: ColumnSpec = ColumnSpec {
    name: "Korting",
    aliases: &["korting", "discount", "discount_info"],
};
const BEST_BEFORE: ColumnSpec = ColumnSpec {
    name: "bbd",
    aliases: &["bbd", "best_before", "best_before_date"],
};
const SHELF: ColumnSpec = ColumnSpec {
    name: "shelf",
    aliases: &["shelf", "shelf_location", "location"],
};
const IMAGE: ColumnSpec = ColumnSpec {
    name: "image",
    aliases: &["image", "image_url"],
};
const LINK: ColumnSpec = ColumnSpec {
    name: "link",
    aliases: &["link", "url"],
};

static EMPTY_CELL: Cell = Cell::Empty;

/// Индексы колонок листа
#[derive(Debug)]
struct ColumnMap {
    title: usize,
    brand: usize,
    price: usize,
    after_sale: usize,
    discount: usize,
    best_before: usize,
    shelf: Option<usize>,
    image: usize,
    link: usize,
}

impl ColumnMap {
    fn resolve(sheet: &str, header: &[Cell]) -> Result<Self, DataLoadError> {
        let headers: Vec<String> = header
            .iter()
            .map(|c| {
                cell_text(c)
                    .unwrap_or_default()
                    .trim_start_matches('\u{feff}')
                    .to_lowercase()
            })
            .collect();

        let find = |col: &ColumnSpec| -> Option<usize> {
            headers
                .iter()
                .position(|h| col.aliases.contains(&h.as_str()))
        };
        let require = |col: &ColumnSpec| -> Result<usize, DataLoadError> {
            find(col).ok_or_else(|| DataLoadError::MissingColumn {
                sheet: sheet.to_string(),
                column: col.name,
            })
        };

        Ok(Self {
            title: require(&TITLE)?,
            brand: require(&BRAND)?,
            price: require(&PRICE)?,
            after_sale: require(&AFTER_SALE)?,
            discount: require(&DISCOUNT)?,
            best_before: require(&BEST_BEFORE)?,
            shelf: find(&SHELF),
            image: require(&IMAGE)?,
            link: require(&LINK)?,
        })
    }
}

/// Загружает каталог из файла: все листы подряд, без дедупликации
pub fn load(path: &Path) -> Result<Catalog, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let started_at = std::time::Instant::now();
    let modified = std::fs::metadata(path)?.modified().ok();
    let sheets = read_workbook(path)?;
    let products = products_from_sheets(&sheets)?;

    tracing::info!(
        "Catalog loaded from {}: sheets={}, products={}, elapsed_ms={}",
        path.display(),
        sheets.len(),
        products.len(),
        started_at.elapsed().as_millis()
    );

    Ok(Catalog::new(path.to_path_buf(), modified, products))
}

/// Собирает строки каталога из листов в порядке следования
pub fn products_from_sheets(sheets: &[RawSheet]) -> Result<Vec<CatalogProduct>, DataLoadError> {
    let mut products = Vec::new();
    for sheet in sheets {
        products.extend(products_from_sheet(sheet)?);
    }
    Ok(products)
}

fn products_from_sheet(sheet: &RawSheet) -> Result<Vec<CatalogProduct>, DataLoadError> {
    let Some((header, rows)) = sheet.rows.split_first() else {
        tracing::warn!("Sheet '{}' is empty, skipping", sheet.name);
        return Ok(Vec::new());
    };

    let columns = ColumnMap::resolve(&sheet.name, header)?;
    let mut products = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        // +2: заголовок и нумерация с единицы
        let row_no = idx + 2;
        let cell = |i: usize| row.get(i).unwrap_or(&EMPTY_CELL);

        let price = parse_price(cell(columns.price));
        if price.is_none() {
            tracing::warn!(
                "Sheet '{}' row {}: price {:?} is not a number, row will not match price filters",
                sheet.name,
                row_no,
                cell(columns.price)
            );
        }

        let after_sale = parse_price(cell(columns.after_sale));
        if after_sale.is_none() && !cell(columns.after_sale).is_empty() {
            tracing::warn!(
                "Sheet '{}' row {}: invalid after_sale price {:?}",
                sheet.name,
                row_no,
                cell(columns.after_sale)
            );
        }

        let best_before = parse_date(cell(columns.best_before));
        if best_before.is_none() && !cell(columns.best_before).is_empty() {
            tracing::warn!(
                "Sheet '{}' row {}: invalid best-before date {:?}",
                sheet.name,
                row_no,
                cell(columns.best_before)
            );
        }

        products.push(CatalogProduct {
            title: cell_text(cell(columns.title)).unwrap_or_default(),
            brand: cell_text(cell(columns.brand)),
            price,
            after_sale,
            discount: cell_text(cell(columns.discount)),
            best_before,
            shelf: columns.shelf.and_then(|i| cell_text(cell(i))),
            image: cell_text(cell(columns.image)),
            link: cell_text(cell(columns.link)),
            sheet: sheet.name.clone(),
        });
    }

    Ok(products)
}
