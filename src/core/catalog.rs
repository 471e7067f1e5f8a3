use crate::core::{Catalog, CatalogSchema, DestinationRecord, Result, Storage};
use crate::utils::error::RecommenderError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

pub const COL_ID: &str = "DestinationID";
pub const COL_STATE: &str = "State";
pub const COL_TYPE: &str = "Type";
pub const COL_CLIMATE: &str = "PreferredClimate";
pub const COL_BUDGET: &str = "Budget";
pub const COL_BEST_TIME: &str = "BestTimeToVisit";

/// 可接受的名稱欄位標題，依序查找
pub const NAME_COLUMNS: [&str; 3] = ["Name", "Name_x", "DestinationName"];

/// 每個檔案解析一次的欄位位置
#[derive(Debug, Clone)]
struct ColumnIndex {
    id: usize,
    name: Option<usize>,
    state: usize,
    kind: usize,
    climate: usize,
    budget: usize,
    best_time: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| headers.iter().position(|h| h.trim() == column);
        let required = |column: &str| {
            find(column).ok_or_else(|| RecommenderError::MissingColumnError {
                column: column.to_string(),
            })
        };

        Ok(Self {
            id: required(COL_ID)?,
            name: NAME_COLUMNS.iter().find_map(|column| find(*column)),
            state: required(COL_STATE)?,
            kind: required(COL_TYPE)?,
            climate: required(COL_CLIMATE)?,
            budget: required(COL_BUDGET)?,
            best_time: required(COL_BEST_TIME)?,
        })
    }

    fn schema(&self) -> CatalogSchema {
        CatalogSchema {
            has_name: self.name.is_some(),
        }
    }
}

fn cell(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or("").trim().to_string()
}

fn parse_budget(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse::<f64>().ok().filter(|b| b.is_finite())
}

/// 解析目的地目錄 CSV
pub fn parse_catalog(data: &[u8]) -> Result<Catalog> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;
    let schema = columns.schema();

    if !schema.has_name {
        tracing::warn!(
            "Catalog has no name column ({}), falling back to DestinationID for display",
            NAME_COLUMNS.join("/")
        );
    }

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row?;

        let raw_budget = cell(&row, columns.budget);
        let budget = parse_budget(&raw_budget);
        if budget.is_none() {
            tracing::debug!(
                "Row {} has no usable budget ('{}'), it will never pass the budget filter",
                line + 2,
                raw_budget
            );
        }

        let name = columns
            .name
            .map(|index| cell(&row, index))
            .filter(|name| !name.is_empty());

        records.push(DestinationRecord {
            id: cell(&row, columns.id),
            name,
            state: cell(&row, columns.state),
            kind: cell(&row, columns.kind),
            preferred_climate: cell(&row, columns.climate),
            budget,
            best_time_to_visit: cell(&row, columns.best_time),
        });
    }

    if records.is_empty() {
        return Err(RecommenderError::CatalogError {
            message: "catalog contains no destinations".to_string(),
        });
    }

    tracing::debug!("Parsed {} destinations from catalog", records.len());
    Ok(Catalog { records, schema })
}

/// 目錄只載入一次，之後的請求共用同一份唯讀資料
#[derive(Debug, Default)]
pub struct CatalogCache {
    cell: OnceCell<Arc<Catalog>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get_or_load<F, Fut>(&self, loader: F) -> Result<Arc<Catalog>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Catalog>>,
    {
        let catalog = self
            .cell
            .get_or_try_init(|| async move { loader().await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(catalog))
    }

    /// 第一次使用時透過 `storage` 讀取並解析 `path`
    pub async fn load_from<S: Storage>(&self, storage: &S, path: &str) -> Result<Arc<Catalog>> {
        self.get_or_load(|| async move {
            tracing::info!("📂 Loading destination catalog from {}", path);
            let data = storage.read_file(path).await?;
            parse_catalog(&data)
        })
        .await
    }
}
