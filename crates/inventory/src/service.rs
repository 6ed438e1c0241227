//! Inventory ledger business logic.

use std::sync::Arc;

use merx_client::ProductApi;
use merx_core::{Clock, Page, PageParams, ServiceResult};

use crate::dto::{AdjustStockRequest, HistoryDto, InventoryDto};
use crate::model::{AdjustmentKind, AdjustmentRecord, DEFAULT_MIN_STOCK, StockStatus};
use crate::store::InventoryStore;

pub struct InventoryService {
    store: Arc<dyn InventoryStore>,
    products: Arc<dyn ProductApi>,
    clock: Arc<dyn Clock>,
}

impl InventoryService {
    pub fn new(
        store: Arc<dyn InventoryStore>,
        products: Arc<dyn ProductApi>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            products,
            clock,
        }
    }

    /// Apply a signed stock adjustment, lazily creating the ledger row.
    ///
    /// The delta is applied with no floor; quantity may go negative.
    pub async fn adjust_stock(&self, req: AdjustStockRequest) -> ServiceResult<()> {
        let record = AdjustmentRecord {
            product_id: req.product_id,
            quantity_changed: req.quantity_changed,
            kind: AdjustmentKind::classify(req.quantity_changed),
            reason: req.reason,
            reference_id: req.reference_id,
            created_at: self.clock.now(),
        };
        let row = self.store.apply_adjustment(record).await?;
        tracing::info!(
            product_id = row.product_id,
            quantity = row.quantity,
            "stock adjusted"
        );
        Ok(())
    }

    /// Single-product view. A productId with no persisted row is answered
    /// with a transient default row (quantity 0), not an error.
    pub async fn get_inventory(&self, product_id: i64) -> ServiceResult<InventoryDto> {
        let row = self.store.find_by_product(product_id).await?;
        let (name, category) = self.product_display(product_id).await;
        Ok(match row {
            Some(row) => InventoryDto::from_row(&row, name, category),
            None => InventoryDto {
                id: None,
                product_id,
                quantity: 0,
                min_stock: DEFAULT_MIN_STOCK,
                product_name: name,
                product_category: category,
                status: StockStatus::derive(0, DEFAULT_MIN_STOCK),
            },
        })
    }

    pub async fn get_inventories(&self, page: PageParams) -> ServiceResult<Page<InventoryDto>> {
        let (rows, total) = self.store.list(page).await?;
        let mut content = Vec::with_capacity(rows.len());
        for row in &rows {
            let (name, category) = self.product_display(row.product_id).await;
            content.push(InventoryDto::from_row(row, name, category));
        }
        Ok(Page::new(content, total, page))
    }

    pub async fn get_history(
        &self,
        product_id: Option<i64>,
        page: PageParams,
    ) -> ServiceResult<Page<HistoryDto>> {
        let (entries, total) = self.store.history(product_id, page).await?;
        let content = entries.into_iter().map(HistoryDto::from).collect();
        Ok(Page::new(content, total, page))
    }

    /// Best-effort display enrichment; a failed catalog lookup degrades to
    /// placeholder text instead of failing the read.
    async fn product_display(&self, product_id: i64) -> (String, Option<String>) {
        match self.products.product_by_id(product_id).await {
            Ok(product) => (product.name, product.category),
            Err(err) => {
                tracing::warn!(product_id, error = %err, "product lookup failed");
                ("Product Not Found".to_string(), Some("N/A".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryInventoryStore;
    use async_trait::async_trait;
    use chrono::Utc;
    use merx_client::{ClientError, ProductSummary};
    use merx_core::FixedClock;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    struct StubProducts {
        products: HashMap<i64, ProductSummary>,
    }

    impl StubProducts {
        fn empty() -> Self {
            Self {
                products: HashMap::new(),
            }
        }

        fn with(product_id: i64, name: &str, category: &str) -> Self {
            let mut products = HashMap::new();
            products.insert(
                product_id,
                ProductSummary {
                    id: product_id,
                    name: name.to_string(),
                    sku: format!("SKU-{product_id}"),
                    category: Some(category.to_string()),
                    price: Decimal::new(100, 2),
                    status: Some("ACTIVE".to_string()),
                },
            );
            Self { products }
        }
    }

    #[async_trait]
    impl ProductApi for StubProducts {
        async fn product_by_id(&self, id: i64) -> Result<ProductSummary, ClientError> {
            self.products
                .get(&id)
                .cloned()
                .ok_or(ClientError::Status {
                    status: 404,
                    url: format!("/products/{id}"),
                })
        }
    }

    fn service(products: StubProducts) -> (InventoryService, Arc<MemoryInventoryStore>) {
        let store = Arc::new(MemoryInventoryStore::new());
        let clock = Arc::new(FixedClock(Utc::now()));
        (
            InventoryService::new(store.clone(), Arc::new(products), clock),
            store,
        )
    }

    fn adjustment(product_id: i64, delta: i32) -> AdjustStockRequest {
        AdjustStockRequest {
            product_id,
            quantity_changed: delta,
            reason: Some("manual".to_string()),
            reference_id: None,
        }
    }

    #[tokio::test]
    async fn negative_adjustment_on_absent_row_creates_it_below_zero() {
        let (service, store) = service(StubProducts::with(1, "Widget", "Hardware"));

        service.adjust_stock(adjustment(1, -5)).await.unwrap();

        let dto = service.get_inventory(1).await.unwrap();
        assert_eq!(dto.quantity, -5);
        assert_eq!(dto.min_stock, DEFAULT_MIN_STOCK);
        assert_eq!(dto.status, StockStatus::OutOfStock);

        let history = store.all_history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, "OUTBOUND");
        assert_eq!(history[0].quantity_changed, -5);
    }

    #[tokio::test]
    async fn deltas_accumulate_and_reclassify_each_time() {
        let (service, store) = service(StubProducts::with(1, "Widget", "Hardware"));

        service.adjust_stock(adjustment(1, 20)).await.unwrap();
        service.adjust_stock(adjustment(1, -8)).await.unwrap();
        service.adjust_stock(adjustment(1, 0)).await.unwrap();

        let dto = service.get_inventory(1).await.unwrap();
        assert_eq!(dto.quantity, 12);
        assert_eq!(dto.status, StockStatus::Normal);

        let kinds: Vec<String> = store.all_history().into_iter().map(|h| h.kind).collect();
        assert_eq!(kinds, vec!["INBOUND", "OUTBOUND", "ADJUSTMENT"]);
    }

    #[tokio::test]
    async fn read_of_unknown_product_defaults_instead_of_failing() {
        let (service, _) = service(StubProducts::with(7, "Widget", "Hardware"));

        let dto = service.get_inventory(7).await.unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.quantity, 0);
        assert_eq!(dto.status, StockStatus::OutOfStock);
        assert_eq!(dto.product_name, "Widget");
    }

    #[tokio::test]
    async fn enrichment_failure_degrades_to_placeholders() {
        let (service, _) = service(StubProducts::empty());

        service.adjust_stock(adjustment(3, 4)).await.unwrap();

        let dto = service.get_inventory(3).await.unwrap();
        assert_eq!(dto.product_name, "Product Not Found");
        assert_eq!(dto.product_category.as_deref(), Some("N/A"));
        assert_eq!(dto.quantity, 4);
    }

    #[tokio::test]
    async fn history_filters_by_product_and_is_newest_first() {
        let (service, _) = service(StubProducts::empty());

        service.adjust_stock(adjustment(1, 5)).await.unwrap();
        service.adjust_stock(adjustment(2, 7)).await.unwrap();
        service.adjust_stock(adjustment(1, -2)).await.unwrap();

        let page = service
            .get_history(Some(1), PageParams::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.content[0].quantity_changed, -2);
        assert_eq!(page.content[1].quantity_changed, 5);

        let all = service.get_history(None, PageParams::default()).await.unwrap();
        assert_eq!(all.total_elements, 3);
    }
}
