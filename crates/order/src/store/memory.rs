use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use merx_core::{PageParams, ServiceResult};

use super::OrderStore;
use crate::model::{ItemDraft, Order, OrderDraft, OrderItem};

/// In-memory backend for unit and HTTP tests.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<Vec<Order>>,
    items: RwLock<Vec<OrderItem>>,
    next_order_id: AtomicI64,
    next_item_id: AtomicI64,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every header row, deleted included. Test accessor.
    pub fn all_rows(&self) -> Vec<Order> {
        self.orders.read().unwrap().clone()
    }

    /// Every line row. Test accessor.
    pub fn all_items(&self) -> Vec<OrderItem> {
        self.items.read().unwrap().clone()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(
        &self,
        draft: OrderDraft,
        items: Vec<ItemDraft>,
    ) -> ServiceResult<(Order, Vec<OrderItem>)> {
        let order = Order {
            id: self.next_order_id.fetch_add(1, Ordering::SeqCst) + 1,
            order_number: draft.order_number,
            partner_id: draft.partner_id,
            status: draft.status,
            total_amount: draft.total_amount,
            shipping_address: draft.shipping_address,
            created_at: draft.now,
            updated_at: draft.now,
            deleted: false,
        };
        let rows: Vec<OrderItem> = items
            .into_iter()
            .map(|item| OrderItem {
                id: self.next_item_id.fetch_add(1, Ordering::SeqCst) + 1,
                order_id: order.id,
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
                sub_total: item.sub_total,
            })
            .collect();
        self.orders.write().unwrap().push(order.clone());
        self.items.write().unwrap().extend(rows.clone());
        Ok((order, rows))
    }

    async fn find_active(&self, id: i64) -> ServiceResult<Option<Order>> {
        Ok(self
            .orders
            .read()
            .unwrap()
            .iter()
            .find(|o| o.id == id && !o.deleted)
            .cloned())
    }

    async fn items_for(&self, order_id: i64) -> ServiceResult<Vec<OrderItem>> {
        Ok(self
            .items
            .read()
            .unwrap()
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn search(
        &self,
        keyword: Option<&str>,
        page: PageParams,
    ) -> ServiceResult<(Vec<Order>, u64)> {
        let needle = keyword.map(|k| k.to_lowercase());
        let mut rows: Vec<Order> = self
            .orders
            .read()
            .unwrap()
            .iter()
            .filter(|o| !o.deleted)
            .filter(|o| {
                needle
                    .as_deref()
                    .is_none_or(|k| o.order_number.to_lowercase().contains(k))
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        let total = rows.len() as u64;
        let rows = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok((rows, total))
    }

    async fn update_status(
        &self,
        id: i64,
        status: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<Option<Order>> {
        let mut orders = self.orders.write().unwrap();
        let Some(order) = orders.iter_mut().find(|o| o.id == id && !o.deleted) else {
            return Ok(None);
        };
        order.status = status.to_owned();
        order.updated_at = now;
        Ok(Some(order.clone()))
    }
}
