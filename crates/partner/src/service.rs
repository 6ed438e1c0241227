//! Partner directory business logic.

use std::sync::Arc;

use merx_core::{Clock, Error, Page, PageParams, ServiceResult};

use crate::dto::{PartnerDto, PartnerRequest};
use crate::model::PartnerDraft;
use crate::store::{PartnerFilter, PartnerStore};

pub struct PartnerService {
    store: Arc<dyn PartnerStore>,
    clock: Arc<dyn Clock>,
}

impl PartnerService {
    pub fn new(store: Arc<dyn PartnerStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn create_partner(&self, req: PartnerRequest) -> ServiceResult<PartnerDto> {
        let now = self.clock.now();
        let draft = PartnerDraft {
            name: req.name,
            kind: req.kind,
            contact_person: req.contact_person,
            email: req.email,
            phone: req.phone,
            address: req.address,
            status: req.status.unwrap_or_else(|| "Active".to_string()),
            created_at: now,
            updated_at: now,
        };
        Ok(self.store.insert(draft).await?.into())
    }

    pub async fn get_partner(&self, id: i64) -> ServiceResult<PartnerDto> {
        self.store
            .find_active(id)
            .await?
            .map(PartnerDto::from)
            .ok_or_else(|| Error::not_found(format!("partner not found: {id}")))
    }

    pub async fn get_partners(
        &self,
        filter: PartnerFilter,
        page: PageParams,
    ) -> ServiceResult<Page<PartnerDto>> {
        let (partners, total) = self.store.search(&filter, page).await?;
        let content = partners.into_iter().map(PartnerDto::from).collect();
        Ok(Page::new(content, total, page))
    }

    /// Whole-record update: every supplied field overwrites the row.
    pub async fn update_partner(&self, id: i64, req: PartnerRequest) -> ServiceResult<PartnerDto> {
        let mut partner = self
            .store
            .find_active(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("partner not found: {id}")))?;

        partner.name = req.name;
        partner.kind = req.kind;
        partner.contact_person = req.contact_person;
        partner.email = req.email;
        partner.phone = req.phone;
        partner.address = req.address;
        if let Some(status) = req.status {
            partner.status = status;
        }
        partner.updated_at = self.clock.now();

        Ok(self.store.update(partner).await?.into())
    }

    pub async fn delete_partner(&self, id: i64) -> ServiceResult<()> {
        if !self.store.soft_delete(id).await? {
            return Err(Error::not_found(format!("partner not found: {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryPartnerStore;
    use chrono::Utc;
    use merx_core::FixedClock;

    fn service_with_store() -> (PartnerService, Arc<MemoryPartnerStore>) {
        let store = Arc::new(MemoryPartnerStore::new());
        let clock = Arc::new(FixedClock(Utc::now()));
        (PartnerService::new(store.clone(), clock), store)
    }

    fn request(name: &str, kind: &str) -> PartnerRequest {
        PartnerRequest {
            name: name.to_string(),
            kind: kind.to_string(),
            contact_person: None,
            email: None,
            phone: None,
            address: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn create_defaults_status_to_active() {
        let (service, _) = service_with_store();
        let dto = service
            .create_partner(request("Acme", "Customer"))
            .await
            .unwrap();
        assert_eq!(dto.status, "Active");
        assert_eq!(dto.kind, "Customer");
    }

    #[tokio::test]
    async fn get_missing_partner_is_not_found() {
        let (service, _) = service_with_store();
        let err = service.get_partner(99).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn soft_delete_hides_partner_but_keeps_the_row() {
        let (service, store) = service_with_store();
        let dto = service
            .create_partner(request("Acme", "Supplier"))
            .await
            .unwrap();

        service.delete_partner(dto.id).await.unwrap();

        assert!(matches!(
            service.get_partner(dto.id).await.unwrap_err(),
            Error::NotFound(_)
        ));
        let page = service
            .get_partners(PartnerFilter::default(), PageParams::default())
            .await
            .unwrap();
        assert!(page.content.is_empty());

        // The row itself survives, flagged deleted.
        let rows = store.all_rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].deleted);
    }

    #[tokio::test]
    async fn search_filters_by_keyword_and_type() {
        let (service, _) = service_with_store();
        service.create_partner(request("Acme Corp", "Customer")).await.unwrap();
        service.create_partner(request("acme logistics", "Logistics")).await.unwrap();
        service.create_partner(request("Globex", "Customer")).await.unwrap();

        let filter = PartnerFilter {
            keyword: Some("ACME".to_string()),
            kind: None,
        };
        let page = service
            .get_partners(filter, PageParams::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 2);

        let filter = PartnerFilter {
            keyword: Some("acme".to_string()),
            kind: Some("Customer".to_string()),
        };
        let page = service
            .get_partners(filter, PageParams::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].name, "Acme Corp");
    }

    #[tokio::test]
    async fn list_is_sorted_newest_id_first_and_paged() {
        let (service, _) = service_with_store();
        for i in 0..5 {
            service
                .create_partner(request(&format!("Partner {i}"), "Customer"))
                .await
                .unwrap();
        }
        let page = service
            .get_partners(PartnerFilter::default(), PageParams { page: 0, size: 2 })
            .await
            .unwrap();
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.content[0].name, "Partner 4");
        assert_eq!(page.content[1].name, "Partner 3");
    }

    #[tokio::test]
    async fn update_overwrites_the_whole_record() {
        let (service, _) = service_with_store();
        let dto = service
            .create_partner(request("Acme", "Customer"))
            .await
            .unwrap();

        let mut req = request("Acme Renamed", "Supplier");
        req.email = Some("sales@acme.example".to_string());
        let updated = service.update_partner(dto.id, req).await.unwrap();

        assert_eq!(updated.name, "Acme Renamed");
        assert_eq!(updated.kind, "Supplier");
        assert_eq!(updated.email.as_deref(), Some("sales@acme.example"));
        // Contact person was not supplied, so it is cleared (whole-record).
        assert_eq!(updated.contact_person, None);
    }
}
