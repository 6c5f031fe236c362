//! In-memory catalog and order store

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::order::{Fulfillment, FulfillmentStage, Order, Transition};
use crate::domain::plan::{Plan, ResourceSpec, default_catalog};
use crate::domain::repository::{CatalogRepository, OrderRepository};

#[derive(Debug, Default)]
struct State {
    plans: Vec<Plan>,
    orders: HashMap<String, Order>,
}

/// Volatile store; cloning shares the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryShopRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryShopRepository {
    /// Store seeded with [`default_catalog`]
    pub fn new() -> Self {
        Self::with_catalog(default_catalog())
    }

    pub fn with_catalog(plans: Vec<Plan>) -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                plans,
                orders: HashMap::new(),
            })),
        }
    }
}

impl CatalogRepository for MemoryShopRepository {
    async fn list_plans(&self) -> Vec<Plan> {
        self.state.read().await.plans.clone()
    }

    async fn find_plan(&self, id: &str) -> Option<Plan> {
        let state = self.state.read().await;
        state.plans.iter().find(|p| p.id == id).cloned()
    }

    async fn insert_plan(&self, plan: Plan) -> bool {
        let mut state = self.state.write().await;
        if state.plans.iter().any(|p| p.id == plan.id) {
            return false;
        }
        state.plans.push(plan);
        true
    }

    async fn update_plan(&self, id: &str, price: u64, specs: ResourceSpec) -> Option<Plan> {
        let mut state = self.state.write().await;
        let plan = state.plans.iter_mut().find(|p| p.id == id)?;
        let previous = plan.clone();
        plan.price = price;
        plan.specs = specs;
        Some(previous)
    }

    async fn remove_plan(&self, id: &str) -> Option<Plan> {
        let mut state = self.state.write().await;
        let index = state.plans.iter().position(|p| p.id == id)?;
        Some(state.plans.remove(index))
    }
}

impl OrderRepository for MemoryShopRepository {
    async fn insert_order(&self, order: Order) -> bool {
        let mut state = self.state.write().await;
        if state.orders.contains_key(&order.order_id) {
            return false;
        }
        state.orders.insert(order.order_id.clone(), order);
        true
    }

    async fn find_order(&self, order_id: &str) -> Option<Order> {
        self.state.read().await.orders.get(order_id).cloned()
    }

    async fn transition(
        &self,
        order_id: &str,
        expected: FulfillmentStage,
        next: Fulfillment,
    ) -> Transition {
        let mut state = self.state.write().await;
        let Some(order) = state.orders.get_mut(order_id) else {
            return Transition::Missing;
        };

        if order.fulfillment.stage() != expected {
            return Transition::Stale(order.clone());
        }

        order.fulfillment = next;
        Transition::Applied(order.clone())
    }
}
