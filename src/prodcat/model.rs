use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a product name, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// Minimum length of a non-empty description, in characters.
pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// Format used for release dates, both on disk and in forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    /// Picks an id that is unique among `existing` and never goes backwards,
    /// even if the clock does.
    ///
    /// Once the largest id is `i64::MAX` there is nothing above it, so the first free
    /// id counting up from `now_millis` (wrapping around) is taken instead.
    pub fn next<'a, I>(existing: I, now_millis: i64) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let taken: HashSet<i64> = existing.into_iter().map(|p| p.id.0).collect();
        let Some(&max) = taken.iter().max() else {
            return ProductId(now_millis);
        };

        match max.checked_add(1) {
            Some(floor) => ProductId(now_millis.max(floor)),
            None => (now_millis..=i64::MAX)
                .chain(i64::MIN..now_millis)
                .find(|id| !taken.contains(id))
                .map_or(ProductId(now_millis), ProductId),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Elektronik,
    Pakaian,
    Makanan,
    Minuman,
    Lainnya,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Elektronik,
        Category::Pakaian,
        Category::Makanan,
        Category::Minuman,
        Category::Lainnya,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Elektronik => "Elektronik",
            Category::Pakaian => "Pakaian",
            Category::Makanan => "Makanan",
            Category::Minuman => "Minuman",
            Category::Lainnya => "Lainnya",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A catalog record. Field names on disk follow the camelCase layout of the
/// storage slot (`releaseDate`, `isActive`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub release_date: NaiveDate,
    pub stock: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Every product field except the id, already trimmed and coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub release_date: NaiveDate,
    pub stock: u32,
    pub is_active: bool,
}

impl Product {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            release_date: fields.release_date,
            stock: fields.stock,
            is_active: fields.is_active,
        }
    }

    /// Replaces every field but the id.
    pub fn apply(&mut self, fields: ProductFields) {
        let id = self.id;
        *self = Product::new(id, fields);
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

/// The products a fresh catalog starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "Laptop Gaming".to_string(),
            description: "Laptop dengan spesifikasi tinggi untuk gaming dan desain grafis."
                .to_string(),
            price: 15_000_000.0,
            category: Category::Elektronik,
            release_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
            stock: 25,
            is_active: true,
        },
        Product {
            id: ProductId(2),
            name: "Kaos Polos".to_string(),
            description: "Kaos katun combed 30s, nyaman dipakai sehari-hari.".to_string(),
            price: 75_000.0,
            category: Category::Pakaian,
            release_date: NaiveDate::from_ymd_opt(2022, 8, 20).unwrap_or_default(),
            stock: 150,
            is_active: true,
        },
    ]
}
