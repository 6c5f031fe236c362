//! Repository Traits

use crate::domain::order::{Fulfillment, FulfillmentStage, Order, Transition};
use crate::domain::plan::{Plan, ResourceSpec};

/// Product catalog, kept in insertion order
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    async fn list_plans(&self) -> Vec<Plan>;

    async fn find_plan(&self, id: &str) -> Option<Plan>;

    /// Append a plan. `false` if the id is taken.
    async fn insert_plan(&self, plan: Plan) -> bool;

    /// Replace price and specs in place, returning the previous version.
    async fn update_plan(&self, id: &str, price: u64, specs: ResourceSpec) -> Option<Plan>;

    /// Remove and return the plan
    async fn remove_plan(&self, id: &str) -> Option<Plan>;
}

/// Order store
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Store a new order. `false` if the order id is taken.
    async fn insert_order(&self, order: Order) -> bool;

    async fn find_order(&self, order_id: &str) -> Option<Order>;

    /// Move the order to `next` only if it is currently in `expected`.
    async fn transition(
        &self,
        order_id: &str,
        expected: FulfillmentStage,
        next: Fulfillment,
    ) -> Transition;
}
