use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cantina_core::{DomainError, DomainResult, Entity, SupplierId};

/// Supplier contact record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: String,
    pub phone: String,
    pub email: String,
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One line of a supplier's price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub sku: String,
    pub product_label: String,
    pub price: f64,
}

/// In-memory supplier registry with per-supplier price lists.
///
/// The source system keeps this screen client-local; there is no backing
/// endpoint, so the registry itself is the store.
#[derive(Debug, Default)]
pub struct SupplierDirectory {
    suppliers: BTreeMap<SupplierId, Supplier>,
    price_lists: BTreeMap<SupplierId, Vec<PriceRow>>,
    next_id: i64,
}

impl SupplierDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<&Supplier> {
        self.suppliers.values().collect()
    }

    pub fn get(&self, id: SupplierId) -> DomainResult<&Supplier> {
        self.suppliers.get(&id).ok_or(DomainError::NotFound)
    }

    pub fn add(&mut self, name: &str, contact: &str, phone: &str, email: &str) -> DomainResult<SupplierId> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        self.next_id += 1;
        let id = SupplierId::new(self.next_id);
        self.suppliers.insert(
            id,
            Supplier {
                id,
                name: name.to_string(),
                contact: contact.to_string(),
                phone: phone.to_string(),
                email: email.to_string(),
            },
        );
        Ok(id)
    }

    pub fn update(&mut self, supplier: Supplier) -> DomainResult<()> {
        if !self.suppliers.contains_key(&supplier.id) {
            return Err(DomainError::NotFound);
        }
        self.suppliers.insert(supplier.id, supplier);
        Ok(())
    }

    pub fn remove(&mut self, id: SupplierId) -> DomainResult<()> {
        self.price_lists.remove(&id);
        self.suppliers
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound)
    }

    pub fn price_list(&self, id: SupplierId) -> &[PriceRow] {
        self.price_lists.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn set_price_list(&mut self, id: SupplierId, rows: Vec<PriceRow>) -> DomainResult<()> {
        if !self.suppliers.contains_key(&id) {
            return Err(DomainError::NotFound);
        }
        self.price_lists.insert(id, rows);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_fetch_supplier() {
        let mut dir = SupplierDirectory::new();
        let id = dir
            .add("Distribuciones El Cafetal", "Marta López", "320-123-4567", "ventas@cafetal.com")
            .unwrap();
        assert_eq!(dir.get(id).unwrap().name, "Distribuciones El Cafetal");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut dir = SupplierDirectory::new();
        assert!(dir.add(" ", "c", "p", "e").is_err());
    }

    #[test]
    fn remove_drops_price_list_too() {
        let mut dir = SupplierDirectory::new();
        let id = dir.add("Fruver", "Pedro", "310", "p@fruver.com").unwrap();
        dir.set_price_list(
            id,
            vec![PriceRow {
                sku: "SKU-11".to_string(),
                product_label: "Bananas".to_string(),
                price: 12.5,
            }],
        )
        .unwrap();

        dir.remove(id).unwrap();
        assert!(dir.price_list(id).is_empty());
        assert!(dir.get(id).is_err());
    }

    #[test]
    fn price_list_for_unknown_supplier_fails() {
        let mut dir = SupplierDirectory::new();
        assert!(dir.set_price_list(SupplierId::new(1), vec![]).is_err());
    }
}
