//! # API Facade
//!
//! [`CatalogApi`] is the single entry point for every catalog operation, whatever the
//! UI. It owns the three pieces of live state:
//!
//! - the [`RecordStore`] (products, mirrored to storage),
//! - the [`EditMode`] (creating a new product, or editing an existing one),
//! - the [`NotificationSlot`] (the last outcome message and when it was raised).
//!
//! ## Editing State Machine
//!
//! ```text
//!            begin_edit(id)
//!   Idle ───────────────────► Editing(id)
//!    ▲                           │
//!    └── cancel_edit / valid submit / remove(id)
//! ```
//!
//! A rejected submit keeps the current mode so the user can fix the form.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O**: no stdout, no prompts; confirmation is a callback supplied by the UI
//! - **Presentation**: returns `CmdResult` data, not strings

use crate::commands;
use crate::error::Result;
use crate::form::{EditMode, ProductForm};
use crate::model::{Product, ProductId};
use crate::notification::{Notification, NotificationSlot};
use crate::store::{RecordStore, StorageBackend};
use crate::validation::today;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;
use std::time::Instant;

/// The main API facade for catalog operations.
///
/// Generic over `StorageBackend` so tests can run against `MemBackend`.
pub struct CatalogApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: commands::CatalogPaths,
    mode: EditMode,
    notification: NotificationSlot,
}

impl<B: StorageBackend> CatalogApi<B> {
    pub fn new(store: RecordStore<B>, paths: commands::CatalogPaths) -> Self {
        Self {
            store,
            paths,
            mode: EditMode::Idle,
            notification: NotificationSlot::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        self.store.products()
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn list(&self) -> commands::CmdResult {
        commands::list::run(&self.store)
    }

    pub fn view(&self, id: ProductId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    /// Submits a form in the current mode, validating against today's date.
    pub fn submit(&mut self, form: &ProductForm) -> Result<commands::CmdResult> {
        self.submit_on(form, today())
    }

    pub fn submit_on(
        &mut self,
        form: &ProductForm,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let now_millis = Utc::now().timestamp_millis();
        let result = commands::submit::run(&mut self.store, self.mode, form, today, now_millis)?;
        if result.is_ok() {
            self.mode = EditMode::Idle;
        }
        self.raise(&result);
        Ok(result)
    }

    /// Enters editing mode for `id` and hands back the seeded form buffer.
    /// Unknown ids leave the mode unchanged.
    pub fn begin_edit(&mut self, id: ProductId) -> commands::CmdResult {
        let result = commands::edit::begin(&self.store, id);
        if result.form.is_some() {
            self.mode = EditMode::Editing(id);
        }
        result
    }

    pub fn cancel_edit(&mut self) -> commands::CmdResult {
        self.mode = EditMode::Idle;
        commands::CmdResult::default()
    }

    /// Deletes `id` after `confirm` approves it. Deleting the product being edited also
    /// ends the edit.
    pub fn remove<F>(&mut self, id: ProductId, confirm: F) -> Result<commands::CmdResult>
    where
        F: FnOnce(&Product) -> bool,
    {
        let result = commands::delete::run(&mut self.store, id, confirm)?;
        if !result.affected_products.is_empty() && self.mode.editing_id() == Some(id) {
            self.mode = EditMode::Idle;
        }
        self.raise(&result);
        Ok(result)
    }

    /// The latest notification, if it has not expired by `now`.
    pub fn notification_at(&self, now: Instant) -> Option<&Notification> {
        self.notification.visible_at(now)
    }

    pub fn dismiss_notification(&mut self) {
        self.notification.dismiss();
    }

    pub fn storage_path(&self) -> Result<PathBuf> {
        self.store.backend().slot_path(self.store.key())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    fn raise(&mut self, result: &commands::CmdResult) {
        if let Some(notification) = &result.notification {
            self.notification.show(notification.clone(), Instant::now());
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CatalogPaths, CmdMessage, CmdResult, DisplayProduct, MessageLevel};
