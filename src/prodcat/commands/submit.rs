use crate::commands::CmdResult;
use crate::error::Result;
use crate::form::{EditMode, ProductForm};
use crate::model::Product;
use crate::notification::Notification;
use crate::store::{RecordStore, StorageBackend};
use crate::validation::parse_form;
use chrono::NaiveDate;

pub const INVALID_MESSAGE: &str = "Please check your input, some fields are invalid.";
pub const ADDED_MESSAGE: &str = "Product added.";
pub const UPDATED_MESSAGE: &str = "Product updated.";

/// Validates `form` and, if it passes, creates (Idle) or updates (Editing) a product.
///
/// A rejected form leaves the store untouched and comes back with field errors and a
/// danger notification.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    mode: EditMode,
    form: &ProductForm,
    today: NaiveDate,
    now_millis: i64,
) -> Result<CmdResult> {
    let fields = match parse_form(form, store.products(), mode.editing_id(), today) {
        Ok(fields) => fields,
        Err(errors) => {
            tracing::debug!(invalid = ?errors.fields(), "form rejected");
            return Ok(CmdResult::default()
                .with_errors(errors)
                .with_notification(Notification::danger(INVALID_MESSAGE)));
        }
    };

    match mode {
        EditMode::Idle => {
            let product = Product::new(store.next_id(now_millis), fields);
            let mut products = Vec::with_capacity(store.len() + 1);
            products.push(product.clone());
            products.extend_from_slice(store.products());
            store.replace_all(products)?;

            tracing::info!(id = %product.id, name = %product.name, "product created");
            Ok(CmdResult::default()
                .with_affected_products(vec![product])
                .with_notification(Notification::success(ADDED_MESSAGE)))
        }
        EditMode::Editing(id) => {
            let Some(position) = store.position(id) else {
                tracing::debug!(%id, "edit target no longer exists");
                return Ok(CmdResult::default());
            };

            let mut products = store.products().to_vec();
            products[position].apply(fields);
            let updated = products[position].clone();
            store.replace_all(products)?;

            tracing::info!(%id, name = %updated.name, "product updated");
            Ok(CmdResult::default()
                .with_affected_products(vec![updated])
                .with_notification(Notification::success(UPDATED_MESSAGE)))
        }
    }
}
