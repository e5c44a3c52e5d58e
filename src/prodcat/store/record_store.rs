use super::backend::StorageBackend;
use crate::error::{CatalogError, Result};
use crate::model::{seed_products, Product, ProductId};
use std::collections::HashSet;
use std::io;

/// The ordered product list, mirrored to one storage slot.
///
/// Constructed once with [`RecordStore::open`]; every change goes through
/// [`RecordStore::replace_all`], which writes the full list before swapping it in.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    key: String,
    products: Vec<Product>,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn open(backend: B, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let products = Self::load(&backend, &key)?;
        Ok(Self {
            backend,
            key,
            products,
        })
    }

    /// Reads the persisted list. A missing or malformed slot yields the seed products.
    ///
    /// Bytes that are not UTF-8 and lists that repeat an id count as malformed too.
    /// Other read failures propagate.
    pub fn load(backend: &B, key: &str) -> Result<Vec<Product>> {
        let raw = match backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = key, "slot empty, using seed products");
                return Ok(seed_products());
            }
            Err(CatalogError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(slot = key, error = %e, "undecodable product slot, using seed products");
                return Ok(seed_products());
            }
            Err(e) => return Err(e),
        };

        let products = match serde_json::from_str::<Vec<Product>>(&raw) {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!(slot = key, error = %e, "unreadable product slot, using seed products");
                return Ok(seed_products());
            }
        };

        if let Some(dup) = first_duplicate(&products) {
            tracing::warn!(slot = key, id = %dup, "duplicate product id in slot, using seed products");
            return Ok(seed_products());
        }
        Ok(products)
    }

    /// Persists `products` and makes it the current list.
    ///
    /// The write happens first; if it fails the in-memory list is left as it was.
    pub fn replace_all(&mut self, products: Vec<Product>) -> Result<()> {
        if let Some(dup) = first_duplicate(&products) {
            return Err(CatalogError::DuplicateId(dup));
        }

        let content =
            serde_json::to_string_pretty(&products).map_err(CatalogError::Serialization)?;
        self.backend.write(&self.key, &content)?;
        tracing::debug!(slot = %self.key, count = products.len(), "product list persisted");

        self.products = products;
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn next_id(&self, now_millis: i64) -> ProductId {
        ProductId::next(&self.products, now_millis)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn first_duplicate(products: &[Product]) -> Option<ProductId> {
    let mut seen = HashSet::with_capacity(products.len());
    products.iter().map(|p| p.id).find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::DEFAULT_SLOT;

    #[test]
    fn missing_slot_loads_seed() {
        let store = RecordStore::open(MemBackend::new(), DEFAULT_SLOT).unwrap();
        assert_eq!(store.products(), seed_products().as_slice());
    }

    #[test]
    fn malformed_slot_loads_seed() {
        let backend = MemBackend::with_slot(DEFAULT_SLOT, "{not json");
        let store = RecordStore::open(backend, DEFAULT_SLOT).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.products()[0].name, "Laptop Gaming");
    }

    #[test]
    fn empty_list_is_respected() {
        let backend = MemBackend::with_slot(DEFAULT_SLOT, "[]");
        let store = RecordStore::open(backend, DEFAULT_SLOT).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn opening_does_not_write() {
        let store = RecordStore::open(MemBackend::new(), DEFAULT_SLOT).unwrap();
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn replace_all_round_trips_through_load() {
        let mut store = RecordStore::open(MemBackend::new(), DEFAULT_SLOT).unwrap();
        let mut products = seed_products();
        products[1].stock = 3;
        products.remove(0);
        store.replace_all(products.clone()).unwrap();

        let reloaded = RecordStore::load(store.backend(), DEFAULT_SLOT).unwrap();
        assert_eq!(reloaded, products);
        assert_eq!(store.products(), products.as_slice());
    }

    #[test]
    fn failed_write_keeps_previous_list() {
        let mut store = RecordStore::open(MemBackend::new(), DEFAULT_SLOT).unwrap();
        store.backend().set_simulate_write_error(true);

        let err = store.replace_all(Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::Store(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut store = RecordStore::open(MemBackend::new(), DEFAULT_SLOT).unwrap();
        let mut products = seed_products();
        products[1].id = products[0].id;

        let err = store.replace_all(products).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ProductId(1))));
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn lookup_by_id() {
        let store = RecordStore::open(MemBackend::new(), DEFAULT_SLOT).unwrap();
        assert_eq!(store.position(ProductId(2)), Some(1));
        assert_eq!(store.get(ProductId(9)), None);
        assert_eq!(store.next_id(0), ProductId(3));
    }

    #[test]
    fn repeated_ids_in_slot_load_seed() {
        let raw = r#"[
            {"id": 5, "name": "A", "price": 1, "category": "Lainnya", "releaseDate": "2024-01-01", "stock": 1},
            {"id": 5, "name": "B", "price": 1, "category": "Lainnya", "releaseDate": "2024-01-01", "stock": 1}
        ]"#;
        let store = RecordStore::open(MemBackend::with_slot(DEFAULT_SLOT, raw), DEFAULT_SLOT).unwrap();
        assert_eq!(store.products(), seed_products().as_slice());
    }
}
