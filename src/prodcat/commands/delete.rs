use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Product, ProductId};
use crate::notification::Notification;
use crate::store::{RecordStore, StorageBackend};

pub const DELETED_MESSAGE: &str = "Product deleted.";

/// Removes the product with `id` once `confirm` agrees.
///
/// Unknown ids are ignored without asking. A declined confirmation changes nothing.
pub fn run<B, F>(store: &mut RecordStore<B>, id: ProductId, confirm: F) -> Result<CmdResult>
where
    B: StorageBackend,
    F: FnOnce(&Product) -> bool,
{
    let Some(target) = store.get(id).cloned() else {
        tracing::debug!(%id, "delete target not found");
        return Ok(CmdResult::default());
    };

    if !confirm(&target) {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    let remaining: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| p.id != id)
        .cloned()
        .collect();
    store.replace_all(remaining)?;

    tracing::info!(%id, name = %target.name, "product deleted");
    Ok(CmdResult::default()
        .with_affected_products(vec![target])
        .with_notification(Notification::success(DELETED_MESSAGE)))
}
