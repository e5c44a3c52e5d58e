use crate::commands::{CmdResult, DisplayProduct};
use crate::error::{CatalogError, Result};
use crate::model::ProductId;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, id: ProductId) -> Result<CmdResult> {
    let position = store
        .position(id)
        .ok_or(CatalogError::ProductNotFound(id))?;
    let listed = DisplayProduct {
        position: position + 1,
        product: store.products()[position].clone(),
    };
    Ok(CmdResult::default().with_listed_products(vec![listed]))
}
