//! Catalog Queries
//!
//! Plan listing for buyers and price statistics for the admin dashboard.

use std::sync::Arc;

use crate::domain::plan::Plan;
use crate::domain::repository::CatalogRepository;

pub struct ListPlansUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
}

impl<C> ListPlansUseCase<C>
where
    C: CatalogRepository,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> Vec<Plan> {
        self.catalog.list_plans().await
    }
}

/// Price statistics; all zero for an empty catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductStats {
    pub total_products: usize,
    /// Sum of list prices, saturating at `u64::MAX`
    pub total_revenue: u64,
    /// Mean price rounded half up
    pub avg_price: u64,
    pub cheapest_product: u64,
    pub most_expensive: u64,
}

impl ProductStats {
    pub fn of(plans: &[Plan]) -> Self {
        if plans.is_empty() {
            return Self::default();
        }

        let prices = plans.iter().map(|p| p.price);
        let sum: u128 = prices.clone().map(u128::from).sum();
        let count = plans.len() as u128;
        // The mean never exceeds the largest price, so it fits in u64.
        let avg = (2 * sum + count) / (2 * count);

        Self {
            total_products: plans.len(),
            total_revenue: u64::try_from(sum).unwrap_or(u64::MAX),
            avg_price: u64::try_from(avg).unwrap_or(u64::MAX),
            cheapest_product: prices.clone().min().unwrap_or(0),
            most_expensive: prices.max().unwrap_or(0),
        }
    }
}

pub struct ProductStatsUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
}

impl<C> ProductStatsUseCase<C>
where
    C: CatalogRepository,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> ProductStats {
        ProductStats::of(&self.catalog.list_plans().await)
    }
}
