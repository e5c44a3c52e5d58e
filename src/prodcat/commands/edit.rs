use crate::commands::CmdResult;
use crate::form::ProductForm;
use crate::model::ProductId;
use crate::store::{RecordStore, StorageBackend};

/// Seeds a form buffer from the product's current values.
/// An unknown id yields an empty result with no form.
pub fn begin<B: StorageBackend>(store: &RecordStore<B>, id: ProductId) -> CmdResult {
    match store.get(id) {
        Some(product) => CmdResult::default()
            .with_form(ProductForm::from(product))
            .with_affected_products(vec![product.clone()]),
        None => CmdResult::default(),
    }
}
