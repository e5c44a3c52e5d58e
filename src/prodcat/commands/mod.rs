use crate::config::CatalogConfig;
use crate::form::ProductForm;
use crate::model::Product;
use crate::notification::Notification;
use crate::validation::FieldErrors;
use std::path::PathBuf;

pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod submit;
pub mod view;

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

/// Plain feedback that is not an outcome notification (config output, cancelled
/// prompts and the like).
#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A product together with its 1-based row in the current listing.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProduct {
    pub position: usize,
    pub product: Product,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<DisplayProduct>,
    pub form: Option<ProductForm>,
    pub errors: FieldErrors,
    pub notification: Option<Notification>,
    pub config: Option<CatalogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    /// False when the submitted form was rejected.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<DisplayProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_form(mut self, form: ProductForm) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_errors(mut self, errors: FieldErrors) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
