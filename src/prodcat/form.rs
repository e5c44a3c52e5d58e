//! # Form Buffers and Editing Mode
//!
//! A [`ProductForm`] is what a UI holds while the user types: every field is the raw
//! string entered, nothing is parsed yet. Parsing and checking happen in
//! [`crate::validation`] when the form is submitted.
//!
//! [`EditMode`] tracks whether a submitted form creates a new product or replaces the
//! fields of an existing one.

use crate::model::{Product, ProductId, DATE_FORMAT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub release_date: String,
    pub stock: String,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category: String::new(),
            release_date: String::new(),
            stock: String::new(),
            is_active: true,
        }
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.to_string(),
            release_date: product.release_date.format(DATE_FORMAT).to_string(),
            stock: product.stock.to_string(),
            is_active: product.is_active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing(ProductId),
}

impl EditMode {
    pub fn editing_id(&self) -> Option<ProductId> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_products;

    #[test]
    fn seeds_numeric_fields_as_display_strings() {
        let form = ProductForm::from(&seed_products()[0]);
        assert_eq!(form.price, "15000000");
        assert_eq!(form.stock, "25");
        assert_eq!(form.release_date, "2023-01-15");
        assert_eq!(form.category, "Elektronik");
        assert!(form.is_active);
    }

    #[test]
    fn fractional_price_keeps_decimals() {
        let mut product = seed_products().remove(1);
        product.price = 99.5;
        assert_eq!(ProductForm::from(&product).price, "99.5");
    }

    #[test]
    fn empty_form_defaults_to_active() {
        let form = ProductForm::default();
        assert!(form.is_active);
        assert!(form.name.is_empty());
    }

    #[test]
    fn edit_mode_reports_target() {
        assert_eq!(EditMode::Idle.editing_id(), None);
        assert_eq!(EditMode::Editing(ProductId(4)).editing_id(), Some(ProductId(4)));
    }
}
