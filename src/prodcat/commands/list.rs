use crate::commands::{CmdResult, DisplayProduct};
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> CmdResult {
    let listed = store
        .products()
        .iter()
        .enumerate()
        .map(|(i, product)| DisplayProduct {
            position: i + 1,
            product: product.clone(),
        })
        .collect();
    CmdResult::default().with_listed_products(listed)
}
