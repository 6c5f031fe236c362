//! Admin Product Use Cases
//!
//! Create, update and delete catalog entries. Every change is announced on
//! the payments channel with the acting admin's name.

use std::sync::Arc;

use kernel::principal::AdminPrincipal;
use notify::{Channel, Notifier};
use serde_json::Value;

use crate::application::messages;
use crate::domain::plan::Plan;
use crate::domain::repository::CatalogRepository;
use crate::domain::value_object::{ProductFields, ProductId};
use crate::error::{ShopError, ShopResult};

/// Raw product form; numbers may be JSON numbers or numeric strings
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub price: Option<Value>,
    pub ram: Option<Value>,
    pub disk: Option<Value>,
    pub cpu: Option<Value>,
}

impl ProductInput {
    fn is_complete(&self) -> bool {
        self.price.is_some() && self.ram.is_some() && self.disk.is_some() && self.cpu.is_some()
    }

    fn parse(&self) -> ShopResult<ProductFields> {
        ProductFields::parse(
            self.price.as_ref(),
            self.ram.as_ref(),
            self.disk.as_ref(),
            self.cpu.as_ref(),
        )
    }
}

// ============================================================================
// Create
// ============================================================================

pub struct CreateProductUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
    notifier: Notifier,
}

impl<C> CreateProductUseCase<C>
where
    C: CatalogRepository,
{
    pub fn new(catalog: Arc<C>, notifier: Notifier) -> Self {
        Self { catalog, notifier }
    }

    pub async fn execute(
        &self,
        id: Option<String>,
        input: ProductInput,
        admin: &AdminPrincipal,
    ) -> ShopResult<Plan> {
        let id = id.unwrap_or_default();
        if id.is_empty() || !input.is_complete() {
            return Err(ShopError::MissingProductFields);
        }

        let id = ProductId::new(&id)?;
        if self.catalog.find_plan(id.as_str()).await.is_some() {
            return Err(ShopError::DuplicateProduct);
        }

        let fields = input.parse()?;
        let plan = Plan::new(id.into_inner(), fields.price, fields.specs);

        // A concurrent create may have taken the id since the check above
        if !self.catalog.insert_plan(plan.clone()).await {
            return Err(ShopError::DuplicateProduct);
        }

        self.notifier
            .send(Channel::Payments, messages::product_created(&plan, &admin.username));
        tracing::info!(product_id = %plan.id, price = plan.price, admin = %admin.username, "Product created");

        Ok(plan)
    }
}

// ============================================================================
// Update
// ============================================================================

pub struct UpdateProductUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
    notifier: Notifier,
}

impl<C> UpdateProductUseCase<C>
where
    C: CatalogRepository,
{
    pub fn new(catalog: Arc<C>, notifier: Notifier) -> Self {
        Self { catalog, notifier }
    }

    pub async fn execute(
        &self,
        id: &str,
        input: ProductInput,
        admin: &AdminPrincipal,
    ) -> ShopResult<Plan> {
        if self.catalog.find_plan(id).await.is_none() {
            return Err(ShopError::ProductNotFound);
        }

        let fields = input.parse()?;
        let previous = self
            .catalog
            .update_plan(id, fields.price, fields.specs)
            .await
            .ok_or(ShopError::ProductNotFound)?;
        let plan = Plan::new(previous.id.clone(), fields.price, fields.specs);

        self.notifier.send(
            Channel::Payments,
            messages::product_updated(&previous, &plan, &admin.username),
        );
        tracing::info!(product_id = %plan.id, price = plan.price, admin = %admin.username, "Product updated");

        Ok(plan)
    }
}

// ============================================================================
// Delete
// ============================================================================

pub struct DeleteProductUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
    notifier: Notifier,
}

impl<C> DeleteProductUseCase<C>
where
    C: CatalogRepository,
{
    pub fn new(catalog: Arc<C>, notifier: Notifier) -> Self {
        Self { catalog, notifier }
    }

    pub async fn execute(&self, id: &str, admin: &AdminPrincipal) -> ShopResult<Plan> {
        let removed = self
            .catalog
            .remove_plan(id)
            .await
            .ok_or(ShopError::ProductNotFound)?;

        self.notifier.send(
            Channel::Payments,
            messages::product_deleted(&removed, &admin.username),
        );
        tracing::info!(product_id = %removed.id, admin = %admin.username, "Product deleted");

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryShopRepository;
    use serde_json::json;

    fn admin() -> AdminPrincipal {
        AdminPrincipal::new("root")
    }

    fn input(price: Value, ram: Value, disk: Value, cpu: Value) -> ProductInput {
        ProductInput {
            price: Some(price),
            ram: Some(ram),
            disk: Some(disk),
            cpu: Some(cpu),
        }
    }

    #[tokio::test]
    async fn test_create_appends_and_notifies() {
        let repo = Arc::new(MemoryShopRepository::new());
        let (notifier, mut rx) = Notifier::channel(4);
        let use_case = CreateProductUseCase::new(repo.clone(), notifier);

        let plan = use_case
            .execute(
                Some("promo".into()),
                input(json!(0), json!("512"), json!(1024), json!(50)),
                &admin(),
            )
            .await
            .unwrap();
        assert_eq!(plan.price, 0);

        let plans = repo.list_plans().await;
        assert_eq!(plans.last().unwrap().id, "promo");

        let sent = rx.recv().await.unwrap();
        assert_eq!(sent.channel, Channel::Payments);
        assert!(sent.text.contains("PRODUK BARU DITAMBAHKAN"));
        assert!(sent.text.contains("<b>Oleh:</b> root"));
    }

    #[tokio::test]
    async fn test_create_rejections() {
        let repo = Arc::new(MemoryShopRepository::new());
        let use_case = CreateProductUseCase::new(repo.clone(), Notifier::disabled());
        let ok = || input(json!(1), json!(1), json!(1), json!(1));

        let err = use_case.execute(Some("Pro Plan".into()), ok(), &admin()).await.unwrap_err();
        assert!(matches!(err, ShopError::InvalidProductId));

        let err = use_case.execute(Some("1gb".into()), ok(), &admin()).await.unwrap_err();
        assert!(matches!(err, ShopError::DuplicateProduct));

        let err = use_case.execute(None, ok(), &admin()).await.unwrap_err();
        assert!(matches!(err, ShopError::MissingProductFields));

        let mut partial = ok();
        partial.cpu = None;
        let err = use_case.execute(Some("x".into()), partial, &admin()).await.unwrap_err();
        assert!(matches!(err, ShopError::MissingProductFields));

        let err = use_case
            .execute(Some("x".into()), input(json!("abc"), json!(1), json!(1), json!(1)), &admin())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::NonNumericField));

        let err = use_case
            .execute(Some("x".into()), input(json!(1), json!(-1), json!(1), json!(1)), &admin())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::NegativeField));

        assert_eq!(repo.list_plans().await.len(), 11);
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let repo = Arc::new(MemoryShopRepository::new());
        let (notifier, mut rx) = Notifier::channel(4);
        let use_case = UpdateProductUseCase::new(repo.clone(), notifier);

        let plan = use_case
            .execute("2gb", input(json!(2500), json!(2048), json!(10000), json!(60)), &admin())
            .await
            .unwrap();
        assert_eq!(plan.price, 2500);
        assert_eq!(repo.list_plans().await[1].price, 2500);

        let sent = rx.recv().await.unwrap();
        assert!(sent.text.contains("Lama: Rp 2.000"));
        assert!(sent.text.contains("Baru: Rp 2.500"));
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found_before_validation() {
        let repo = Arc::new(MemoryShopRepository::new());
        let use_case = UpdateProductUseCase::new(repo, Notifier::disabled());
        let err = use_case
            .execute("nope", ProductInput::default(), &admin())
            .await
            .unwrap_err();
        assert!(matches!(err, ShopError::ProductNotFound));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = Arc::new(MemoryShopRepository::new());
        let use_case = DeleteProductUseCase::new(repo.clone(), Notifier::disabled());

        let removed = use_case.execute("unlimited", &admin()).await.unwrap();
        assert_eq!(removed.price, 12_000);
        assert!(repo.find_plan("unlimited").await.is_none());

        let err = use_case.execute("unlimited", &admin()).await.unwrap_err();
        assert!(matches!(err, ShopError::ProductNotFound));
    }
}
