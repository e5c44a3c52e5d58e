//! Field validation for product forms.
//!
//! Rules are independent: every failing field is reported at once, never just the first.
//!
//! - `name`: required, at most 100 characters, unique (case-insensitively) among the
//!   other products
//! - `description`: optional, but at least 20 characters when given
//! - `price`: required, a number greater than 0
//! - `category`: required, one of [`Category::ALL`]
//! - `releaseDate`: required, `YYYY-MM-DD`, not after today
//! - `stock`: required, a whole number of at least 0
//!
//! Whitespace around every text value is ignored.

use crate::form::ProductForm;
use crate::model::{
    Category, Product, ProductFields, ProductId, DATE_FORMAT, DESCRIPTION_MIN_CHARS,
    NAME_MAX_CHARS,
};
use chrono::{Local, NaiveDate};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
    ReleaseDate,
    Stock,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::ReleaseDate => "releaseDate",
            Field::Stock => "stock",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level error messages, ordered by field. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, String> {
        self.0.iter()
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a Field, &'a String);
    type IntoIter = btree_map::Iter<'a, Field, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validates `form` against today's local date.
///
/// `editing_id` is the product being edited, if any; its own name does not count as a
/// duplicate.
///
/// # Examples
/// ```
/// use prodcat::form::ProductForm;
/// use prodcat::model::seed_products;
/// use prodcat::validation::{validate, Field};
///
/// let form = ProductForm {
///     name: "laptop gaming".into(),
///     price: "abc".into(),
///     ..ProductForm::default()
/// };
/// let errors = validate(&form, &seed_products(), None);
/// assert!(errors.contains(Field::Name));
/// assert!(errors.contains(Field::Price));
/// assert!(!errors.contains(Field::Description));
/// ```
pub fn validate(
    form: &ProductForm,
    existing: &[Product],
    editing_id: Option<ProductId>,
) -> FieldErrors {
    validate_on(form, existing, editing_id, today())
}

/// Same as [`validate`], with an explicit "today" for the release date rule.
pub fn validate_on(
    form: &ProductForm,
    existing: &[Product],
    editing_id: Option<ProductId>,
    today: NaiveDate,
) -> FieldErrors {
    parse_form(form, existing, editing_id, today)
        .err()
        .unwrap_or_default()
}

/// Checks every rule and, when all pass, returns the trimmed and coerced field values.
pub fn parse_form(
    form: &ProductForm,
    existing: &[Product],
    editing_id: Option<ProductId>,
    today: NaiveDate,
) -> Result<ProductFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = check_name(form, existing, editing_id).map_err(|e| errors.insert(Field::Name, e));
    let description = check_description(form).map_err(|e| errors.insert(Field::Description, e));
    let price = check_price(form).map_err(|e| errors.insert(Field::Price, e));
    let category = check_category(form).map_err(|e| errors.insert(Field::Category, e));
    let release_date =
        check_release_date(form, today).map_err(|e| errors.insert(Field::ReleaseDate, e));
    let stock = check_stock(form).map_err(|e| errors.insert(Field::Stock, e));

    match (name, description, price, category, release_date, stock) {
        (Ok(name), Ok(description), Ok(price), Ok(category), Ok(release_date), Ok(stock)) => {
            Ok(ProductFields {
                name,
                description,
                price,
                category,
                release_date,
                stock,
                is_active: form.is_active,
            })
        }
        _ => Err(errors),
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn check_name(
    form: &ProductForm,
    existing: &[Product],
    editing_id: Option<ProductId>,
) -> Result<String, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Product name is required.");
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err("Product name must be at most 100 characters.");
    }

    let lowered = name.to_lowercase();
    let duplicate = existing
        .iter()
        .filter(|p| Some(p.id) != editing_id)
        .any(|p| p.name.trim().to_lowercase() == lowered);
    if duplicate {
        return Err("A product with this name already exists.");
    }

    Ok(name.to_string())
}

fn check_description(form: &ProductForm) -> Result<String, &'static str> {
    let description = form.description.trim();
    if !description.is_empty() && description.chars().count() < DESCRIPTION_MIN_CHARS {
        return Err("Description must be at least 20 characters.");
    }
    Ok(description.to_string())
}

fn check_price(form: &ProductForm) -> Result<f64, &'static str> {
    let raw = form.price.trim();
    if raw.is_empty() {
        return Err("Price is required.");
    }
    match parse_number(raw) {
        Some(price) if price > 0.0 => Ok(price),
        _ => Err("Price must be a number greater than 0."),
    }
}

fn check_category(form: &ProductForm) -> Result<Category, String> {
    let raw = form.category.trim();
    if raw.is_empty() {
        return Err("Category is required.".to_string());
    }
    raw.parse::<Category>().map_err(|_| {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        format!("Category must be one of: {}.", names.join(", "))
    })
}

fn check_release_date(form: &ProductForm, today: NaiveDate) -> Result<NaiveDate, &'static str> {
    let raw = form.release_date.trim();
    if raw.is_empty() {
        return Err("Release date is required.");
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| "Release date must be a valid date (YYYY-MM-DD).")?;
    if date > today {
        return Err("Release date cannot be in the future.");
    }
    Ok(date)
}

fn check_stock(form: &ProductForm) -> Result<u32, &'static str> {
    let raw = form.stock.trim();
    if raw.is_empty() {
        return Err("Stock is required.");
    }
    match parse_number(raw) {
        Some(stock) if stock >= 0.0 && stock.fract() == 0.0 && stock <= f64::from(u32::MAX) => {
            Ok(stock as u32)
        }
        _ => Err("Stock must be a whole number of at least 0."),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}
