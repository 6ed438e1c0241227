//! Product catalog business logic.

use std::sync::Arc;

use merx_core::{Clock, Error, Page, PageParams, ServiceResult};

use crate::dto::{CreateProductRequest, ProductDto, UpdateProductRequest};
use crate::model::ProductDraft;
use crate::store::{ProductFilter, ProductStore};

pub struct ProductService {
    store: Arc<dyn ProductStore>,
    clock: Arc<dyn Clock>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn create_product(&self, req: CreateProductRequest) -> ServiceResult<ProductDto> {
        if self.store.sku_exists(&req.sku).await? {
            return Err(Error::duplicate(format!(
                "product already exists with SKU: {}",
                req.sku
            )));
        }
        let now = self.clock.now();
        let draft = ProductDraft {
            name: req.name,
            sku: req.sku,
            category: req.category,
            price: req.price,
            stock_quantity: req.stock_quantity.unwrap_or(0),
            status: req.status.unwrap_or_else(|| "ACTIVE".to_string()),
            created_at: now,
            updated_at: now,
        };
        Ok(self.store.insert(draft).await?.into())
    }

    pub async fn get_product(&self, id: i64) -> ServiceResult<ProductDto> {
        self.store
            .find_active(id)
            .await?
            .map(ProductDto::from)
            .ok_or_else(|| Error::not_found(format!("product not found: {id}")))
    }

    pub async fn get_products(
        &self,
        filter: ProductFilter,
        page: PageParams,
    ) -> ServiceResult<Page<ProductDto>> {
        let (products, total) = self.store.search(&filter, page).await?;
        let content = products.into_iter().map(ProductDto::from).collect();
        Ok(Page::new(content, total, page))
    }

    /// Partial update: only supplied fields overwrite; SKU never changes.
    pub async fn update_product(
        &self,
        id: i64,
        req: UpdateProductRequest,
    ) -> ServiceResult<ProductDto> {
        let mut product = self
            .store
            .find_active(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("product not found: {id}")))?;

        if let Some(name) = req.name {
            product.name = name;
        }
        if let Some(category) = req.category {
            product.category = Some(category);
        }
        if let Some(price) = req.price {
            product.price = price;
        }
        if let Some(stock_quantity) = req.stock_quantity {
            product.stock_quantity = stock_quantity;
        }
        if let Some(status) = req.status {
            product.status = status;
        }
        product.updated_at = self.clock.now();

        Ok(self.store.update(product).await?.into())
    }

    pub async fn delete_product(&self, id: i64) -> ServiceResult<()> {
        if !self.store.soft_delete(id).await? {
            return Err(Error::not_found(format!("product not found: {id}")));
        }
        Ok(())
    }
}
