//! Product catalog service.

use serde::Deserialize;

use ecofinds_core::{ProductId, UserId};

use crate::auth::UserIdentity;
use crate::models::{NewProduct, Product, UserProfile, UserSummary};
use crate::services::{ServiceError, eco_score};
use crate::store::{self, KvStore};

/// Eco points awarded to the seller for each listed product.
pub const LISTING_AWARD_POINTS: i64 = 10;

/// Category filter value meaning "no filter".
const CATEGORY_ALL: &str = "all";

/// Listing filter from query parameters.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProductFilter {
    /// Exact category match; `all` (or absent) disables the filter.
    pub category: Option<String>,
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category
            && category != CATEGORY_ALL
            && product.category != *category
        {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let in_title = product.title.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }
}

/// Product catalog operations over the key-value store.
pub struct ProductService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> ProductService<'a> {
    /// Create a new product service.
    #[must_use]
    pub const fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// List a new product for sale.
    ///
    /// Computes the eco score from material and condition, persists the
    /// product, and awards [`LISTING_AWARD_POINTS`] to the seller's profile.
    /// The point award is a read-modify-write with no compare-and-swap, so
    /// two simultaneous listings by the same seller can lose one award
    /// (last writer wins). Accepted at this scale.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` for an empty title or a negative or
    /// non-finite price, and `ServiceError::Store` on persistence failure.
    pub async fn create(
        &self,
        seller: &UserIdentity,
        data: NewProduct,
    ) -> Result<Product, ServiceError> {
        if data.title.trim().is_empty() {
            return Err(ServiceError::Validation("title is required".to_owned()));
        }
        if !data.price.is_finite() || data.price < 0.0 {
            return Err(ServiceError::Validation(
                "price must be a non-negative number".to_owned(),
            ));
        }

        let product = Product {
            id: ProductId::generate(),
            seller_id: seller.id,
            eco_score: eco_score::compute_eco_score(&data.material, &data.condition),
            title: data.title,
            description: data.description,
            price: data.price,
            category: data.category,
            condition: data.condition,
            material: data.material,
            images: data.images,
            location: data.location,
            created_at: chrono::Utc::now(),
            views: 0,
            likes: 0,
        };

        self.store
            .set(&product.key(), store::encode(&product)?)
            .await?;

        self.award_listing_points(seller.id).await?;

        Ok(product)
    }

    /// List products, newest first, optionally filtered.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the scan fails or a record is
    /// corrupted.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError> {
        let mut products = self.scan_all().await?;
        products.retain(|p| filter.matches(p));
        sort_newest_first(&mut products);
        Ok(products)
    }

    /// Fetch one product, bumping its view counter, with a reduced seller
    /// projection.
    ///
    /// The view increment is a read-modify-write; two simultaneous fetches
    /// can record a single view. The seller projection is `None` when the
    /// seller's profile record no longer resolves.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::NotFound` if the product does not exist.
    pub async fn get(
        &self,
        id: ProductId,
    ) -> Result<(Product, Option<UserSummary>), ServiceError> {
        let key = Product::storage_key(id);
        let value = self
            .store
            .get(&key)
            .await?
            .ok_or_else(|| ServiceError::NotFound("product".to_owned()))?;

        let mut product: Product = store::decode(value)?;
        product.views += 1;
        self.store.set(&key, store::encode(&product)?).await?;

        let seller = match self
            .store
            .get(&UserProfile::storage_key(product.seller_id))
            .await?
        {
            Some(value) => Some(store::decode::<UserProfile>(value)?.summary()),
            None => None,
        };

        Ok((product, seller))
    }

    /// List all products owned by one seller.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` if the scan fails.
    pub async fn list_for_seller(&self, seller_id: UserId) -> Result<Vec<Product>, ServiceError> {
        let mut products = self.scan_all().await?;
        products.retain(|p| p.seller_id == seller_id);
        sort_newest_first(&mut products);
        Ok(products)
    }

    /// Write the demo catalog (eight sample listings under fresh ids).
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Store` on persistence failure.
    pub async fn seed_demo_products(&self) -> Result<usize, ServiceError> {
        let products = demo_products();
        let count = products.len();
        for product in products {
            self.store
                .set(&product.key(), store::encode(&product)?)
                .await?;
        }
        Ok(count)
    }

    async fn scan_all(&self) -> Result<Vec<Product>, ServiceError> {
        let values = self.store.get_by_prefix(Product::KEY_PREFIX).await?;
        let mut products = Vec::with_capacity(values.len());
        for value in values {
            products.push(store::decode::<Product>(value)?);
        }
        Ok(products)
    }

    /// Read-modify-write +10 on the seller's profile. A missing profile
    /// (demo sellers, deleted accounts) skips the award silently.
    async fn award_listing_points(&self, seller_id: UserId) -> Result<(), ServiceError> {
        let key = UserProfile::storage_key(seller_id);
        if let Some(value) = self.store.get(&key).await? {
            let mut profile: UserProfile = store::decode(value)?;
            profile.eco_points += LISTING_AWARD_POINTS;
            self.store.set(&key, store::encode(&profile)?).await?;
        }
        Ok(())
    }
}

fn sort_newest_first(products: &mut [Product]) {
    // Secondary sort on id keeps equal timestamps deterministic.
    products.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// The original demo catalog. Seller ids are freshly generated and dangle on
/// purpose; product detail fetches tolerate a missing seller record.
fn demo_products() -> Vec<Product> {
    let entries: [(&str, &str, f64, &str, &str, &str, &str, u64, u64); 8] = [
        (
            "Vintage Denim Jacket",
            "Beautiful vintage denim jacket in excellent condition. Perfect for sustainable fashion lovers.",
            45.0,
            "clothing",
            "excellent",
            "cotton",
            "San Francisco, CA",
            12,
            3,
        ),
        (
            "Bamboo Laptop Stand",
            "Eco-friendly bamboo laptop stand, adjustable height, perfect for remote work.",
            35.0,
            "electronics",
            "good",
            "bamboo",
            "Portland, OR",
            8,
            2,
        ),
        (
            "Reclaimed Wood Coffee Table",
            "Handcrafted coffee table made from reclaimed barn wood. Unique piece with character.",
            180.0,
            "furniture",
            "excellent",
            "recycled",
            "Austin, TX",
            15,
            7,
        ),
        (
            "Organic Cotton Sweater",
            "Cozy organic cotton sweater, size medium, barely worn. Soft and sustainable.",
            28.0,
            "clothing",
            "good",
            "organic",
            "Seattle, WA",
            6,
            1,
        ),
        (
            "Classic Literature Collection",
            "Set of 12 classic literature books in great condition. Perfect for book lovers.",
            25.0,
            "books",
            "good",
            "recycled",
            "Boston, MA",
            9,
            4,
        ),
        (
            "Wooden Building Blocks Set",
            "Natural wooden building blocks set, safe for children, eco-friendly paint.",
            22.0,
            "toys",
            "excellent",
            "organic",
            "Denver, CO",
            11,
            5,
        ),
        (
            "Yoga Mat - Eco-Friendly",
            "Non-toxic, biodegradable yoga mat made from natural rubber. Excellent grip.",
            42.0,
            "sports",
            "good",
            "organic",
            "Los Angeles, CA",
            7,
            2,
        ),
        (
            "Succulent Garden Starter Kit",
            "Complete starter kit with 6 different succulents and recycled planters.",
            32.0,
            "home",
            "excellent",
            "organic",
            "Miami, FL",
            14,
            8,
        ),
    ];

    entries
        .into_iter()
        .map(
            |(title, description, price, category, condition, material, location, views, likes)| {
                Product {
                    id: ProductId::generate(),
                    seller_id: UserId::generate(),
                    title: title.to_owned(),
                    description: description.to_owned(),
                    price,
                    category: category.to_owned(),
                    condition: condition.to_owned(),
                    material: material.to_owned(),
                    images: Vec::new(),
                    location: Some(location.to_owned()),
                    eco_score: eco_score::compute_eco_score(material, condition),
                    created_at: chrono::Utc::now(),
                    views,
                    likes,
                }
            },
        )
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ecofinds_core::Email;

    use super::*;
    use crate::store::MemoryKvStore;

    fn identity() -> UserIdentity {
        UserIdentity {
            id: UserId::generate(),
            email: Email::parse("seller@example.com").unwrap(),
            name: "Seller".to_string(),
        }
    }

    fn listing(title: &str, category: &str) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: format!("{title} description"),
            price: 10.0,
            category: category.to_string(),
            condition: "good".to_string(),
            material: "cotton".to_string(),
            images: Vec::new(),
            location: None,
        }
    }

    #[tokio::test]
    async fn test_create_persists_and_scores() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);

        let product = service
            .create(&identity(), listing("Jacket", "clothing"))
            .await
            .unwrap();

        // cotton + good = 50 + 15 + 15
        assert_eq!(product.eco_score.value(), 80);
        assert_eq!(product.views, 0);
        assert!(store.get(&product.key()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_rejects_negative_price() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);

        let mut data = listing("Jacket", "clothing");
        data.price = -1.0;
        let result = service.create(&identity(), data).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_awards_seller_points() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);
        let seller = identity();

        let profile = UserProfile::new(seller.id, seller.email.clone(), seller.name.clone());
        store
            .set(
                &UserProfile::storage_key(seller.id),
                store::encode(&profile).unwrap(),
            )
            .await
            .unwrap();

        service
            .create(&seller, listing("Jacket", "clothing"))
            .await
            .unwrap();

        let stored: UserProfile = store::decode(
            store
                .get(&UserProfile::storage_key(seller.id))
                .await
                .unwrap()
                .unwrap(),
        )
        .unwrap();
        assert_eq!(stored.eco_points, LISTING_AWARD_POINTS);
    }

    #[tokio::test]
    async fn test_list_category_filter_is_exact() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);
        let seller = identity();

        service
            .create(&seller, listing("Jacket", "clothing"))
            .await
            .unwrap();
        service
            .create(&seller, listing("Lamp", "home"))
            .await
            .unwrap();

        let filter = ProductFilter {
            category: Some("clothing".to_string()),
            search: None,
        };
        let products = service.list(&filter).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products.first().unwrap().category, "clothing");

        // "Clothing" is a different category; the match is case-sensitive
        let filter = ProductFilter {
            category: Some("Clothing".to_string()),
            search: None,
        };
        assert!(service.list(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_category_all_means_no_filter() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);
        let seller = identity();

        service
            .create(&seller, listing("Jacket", "clothing"))
            .await
            .unwrap();
        service
            .create(&seller, listing("Lamp", "home"))
            .await
            .unwrap();

        let filter = ProductFilter {
            category: Some("all".to_string()),
            search: None,
        };
        assert_eq!(service.list(&filter).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_search_case_insensitive() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);

        service
            .create(&identity(), listing("Vintage JACKET", "clothing"))
            .await
            .unwrap();

        let filter = ProductFilter {
            category: None,
            search: Some("jacket".to_string()),
        };
        assert_eq!(service.list(&filter).await.unwrap().len(), 1);

        let filter = ProductFilter {
            category: None,
            search: Some("bicycle".to_string()),
        };
        assert!(service.list(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_increments_views_each_fetch() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);

        let product = service
            .create(&identity(), listing("Jacket", "clothing"))
            .await
            .unwrap();

        let (first, _) = service.get(product.id).await.unwrap();
        let (second, _) = service.get(product.id).await.unwrap();
        assert_eq!(first.views, 1);
        assert_eq!(second.views, 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);

        let result = service.get(ProductId::generate()).await;
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_get_resolves_seller_summary() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);
        let seller = identity();

        let profile = UserProfile::new(seller.id, seller.email.clone(), seller.name.clone());
        store
            .set(
                &UserProfile::storage_key(seller.id),
                store::encode(&profile).unwrap(),
            )
            .await
            .unwrap();

        let product = service
            .create(&seller, listing("Jacket", "clothing"))
            .await
            .unwrap();

        let (_, summary) = service.get(product.id).await.unwrap();
        let summary = summary.unwrap();
        assert_eq!(summary.id, seller.id);
        assert_eq!(summary.name, "Seller");
    }

    #[tokio::test]
    async fn test_get_tolerates_missing_seller() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);

        // No profile record written for this seller
        let product = service
            .create(&identity(), listing("Jacket", "clothing"))
            .await
            .unwrap();

        let (_, summary) = service.get(product.id).await.unwrap();
        assert!(summary.is_none());
    }

    #[tokio::test]
    async fn test_list_for_seller_filters_ownership() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);
        let alice = identity();
        let bob = identity();

        service
            .create(&alice, listing("Jacket", "clothing"))
            .await
            .unwrap();
        service
            .create(&bob, listing("Lamp", "home"))
            .await
            .unwrap();

        let products = service.list_for_seller(alice.id).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products.first().unwrap().seller_id, alice.id);
    }

    #[tokio::test]
    async fn test_seed_writes_full_demo_catalog() {
        let store = MemoryKvStore::new();
        let service = ProductService::new(&store);

        let count = service.seed_demo_products().await.unwrap();
        assert_eq!(count, 8);
        assert_eq!(
            service.list(&ProductFilter::default()).await.unwrap().len(),
            8
        );
    }
}
