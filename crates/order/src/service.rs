use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use merx_client::{ClientError, InventoryApi, PartnerApi, ProductApi, StockAdjustment};
use merx_core::{Clock, Error, Page, PageParams, ServiceResult};

use crate::dto::{CreateOrderRequest, OrderDto, OrderItemDto};
use crate::model::{ItemDraft, Order, OrderDraft};
use crate::number::OrderNumberGenerator;
use crate::store::OrderStore;

const INITIAL_STATUS: &str = "PENDING";

pub struct OrderService {
    store: Arc<dyn OrderStore>,
    partners: Arc<dyn PartnerApi>,
    products: Arc<dyn ProductApi>,
    inventory: Arc<dyn InventoryApi>,
    numbers: Arc<dyn OrderNumberGenerator>,
    clock: Arc<dyn Clock>,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        partners: Arc<dyn PartnerApi>,
        products: Arc<dyn ProductApi>,
        inventory: Arc<dyn InventoryApi>,
        numbers: Arc<dyn OrderNumberGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            partners,
            products,
            inventory,
            numbers,
            clock,
        }
    }

    /// Creates an order. The partner lookup and every line's pricing happen
    /// before anything is written, so a failed lookup leaves zero rows
    /// behind. Stock decrements run after the commit and are best effort;
    /// products whose decrement failed are reported on the response.
    pub async fn create_order(&self, req: CreateOrderRequest) -> ServiceResult<OrderDto> {
        if req.items.is_empty() {
            return Err(Error::validation("order must have at least one item"));
        }

        let partner = self
            .partners
            .partner_by_id(req.partner_id)
            .await
            .map_err(|e| lookup_error("partner", req.partner_id, e))?;

        // Price every line up front, before any row exists.
        let mut drafts = Vec::with_capacity(req.items.len());
        let mut names = Vec::with_capacity(req.items.len());
        let mut total = Decimal::ZERO;
        for line in &req.items {
            let product = self
                .products
                .product_by_id(line.product_id)
                .await
                .map_err(|e| lookup_error("product", line.product_id, e))?;
            let sub_total = product.price * Decimal::from(line.quantity);
            total += sub_total;
            drafts.push(ItemDraft {
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: product.price,
                sub_total,
            });
            names.push(product.name);
        }

        let now = self.clock.now();
        let draft = OrderDraft {
            order_number: self.numbers.next_number(),
            partner_id: req.partner_id,
            status: INITIAL_STATUS.to_owned(),
            total_amount: total,
            shipping_address: req.shipping_address,
            now,
        };
        let (order, items) = self.store.create(draft, drafts).await?;
        info!(
            order_id = order.id,
            order_number = %order.order_number,
            total = %order.total_amount,
            "order created"
        );

        // Decrement stock per line. A failed decrement never rolls the
        // order back; it is surfaced to the caller instead.
        let mut failures = Vec::new();
        for item in &items {
            let adjustment = StockAdjustment {
                product_id: item.product_id,
                quantity_changed: -item.quantity,
                reason: Some(format!("Order Created: {}", order.order_number)),
                reference_id: Some(order.id.to_string()),
            };
            if let Err(e) = self.inventory.adjust_stock(adjustment).await {
                warn!(
                    order_id = order.id,
                    product_id = item.product_id,
                    error = %e,
                    "stock adjustment failed"
                );
                failures.push(item.product_id);
            }
        }

        let item_dtos = items
            .iter()
            .zip(names)
            .map(|(item, name)| OrderItemDto::from_item(item, Some(name)))
            .collect();
        let mut dto = OrderDto::light(&order);
        dto.partner_name = Some(partner.name);
        dto.items = Some(item_dtos);
        dto.stock_adjustment_failures = failures;
        Ok(dto)
    }

    /// Single order with lines, enriched with partner and product names.
    /// Collaborator failures degrade to placeholders rather than failing
    /// the read.
    pub async fn get_order(&self, id: i64) -> ServiceResult<OrderDto> {
        let order = self.require(id).await?;
        let items = self.store.items_for(id).await?;

        let partner_name = match self.partners.partner_by_id(order.partner_id).await {
            Ok(partner) => partner.name,
            Err(e) => {
                warn!(order_id = id, error = %e, "partner enrichment failed");
                "Unknown partner".to_owned()
            }
        };
        let mut item_dtos = Vec::with_capacity(items.len());
        for item in &items {
            let name = match self.products.product_by_id(item.product_id).await {
                Ok(product) => product.name,
                Err(e) => {
                    warn!(order_id = id, product_id = item.product_id, error = %e,
                        "product enrichment failed");
                    "Unknown product".to_owned()
                }
            };
            item_dtos.push(OrderItemDto::from_item(item, Some(name)));
        }

        let mut dto = OrderDto::light(&order);
        dto.partner_name = Some(partner_name);
        dto.items = Some(item_dtos);
        Ok(dto)
    }

    /// Header-only page, newest first, optionally narrowed by an
    /// order-number fragment.
    pub async fn get_orders(
        &self,
        keyword: Option<&str>,
        page: PageParams,
    ) -> ServiceResult<Page<OrderDto>> {
        let (rows, total) = self.store.search(keyword, page).await?;
        let content = rows.iter().map(OrderDto::light).collect();
        Ok(Page::new(content, total, page))
    }

    /// Overwrites the status verbatim. Any string is accepted; callers own
    /// their state machines.
    pub async fn update_status(&self, id: i64, status: &str) -> ServiceResult<OrderDto> {
        let now = self.clock.now();
        match self.store.update_status(id, status, now).await? {
            Some(_) => self.get_order(id).await,
            None => Err(Error::not_found(format!("order not found: id {id}"))),
        }
    }

    async fn require(&self, id: i64) -> ServiceResult<Order> {
        self.store
            .find_active(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("order not found: id {id}")))
    }
}

fn lookup_error(what: &str, id: i64, err: ClientError) -> Error {
    match err {
        ClientError::Status { status: 404, .. } => {
            Error::not_found(format!("{what} not found: id {id}"))
        }
        other => Error::upstream(format!("{what} lookup failed for id {id}: {other}")),
    }
}
