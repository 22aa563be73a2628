//! Read-only domain catalogs.
//!
//! Records are seeded once at startup and immutable for the process
//! lifetime; there are no write endpoints. Lookup misses are `None`, not
//! errors; the gateway translates absence into its 404 shape.

use serde::Serialize;

/// Types that carry a collection-unique integer identifier.
pub trait Identified {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl Identified for User {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price_cents: u64,
}

impl Identified for Product {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Fixed, insertion-ordered in-memory collection.
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: Identified> Catalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// All records, in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Lookup by identifier.
    pub fn find(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Fixed seed set for the users catalog.
pub fn seed_users() -> Catalog<User> {
    Catalog::new(vec![
        User {
            id: 1,
            name: "Alice Carter".into(),
            email: "alice@example.com".into(),
        },
        User {
            id: 2,
            name: "Bruno Velez".into(),
            email: "bruno@example.com".into(),
        },
        User {
            id: 3,
            name: "Chiara Moreau".into(),
            email: "chiara@example.com".into(),
        },
    ])
}

/// Fixed seed set for the products catalog.
pub fn seed_products() -> Catalog<Product> {
    Catalog::new(vec![
        Product {
            id: 1,
            name: "Espresso Machine".into(),
            price_cents: 24_900,
        },
        Product {
            id: 2,
            name: "Burr Grinder".into(),
            price_cents: 8_950,
        },
        Product {
            id: 3,
            name: "Milk Frother".into(),
            price_cents: 2_400,
        },
    ])
}
