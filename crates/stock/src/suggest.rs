//! Ingredient availability for the meal-suggestion feature.

use std::collections::HashMap;

use cantina_catalog::Product;
use cantina_core::ProductId;
use cantina_inventory::InventoryRow;

/// Names of products with stock on hand, the input the suggestion backend
/// expects. Products without an inventory row count as unavailable.
pub fn available_ingredients(products: &[Product], inventory: &[InventoryRow]) -> Vec<String> {
    let on_hand: HashMap<ProductId, f64> = inventory
        .iter()
        .map(|row| (row.product_id, row.quantity))
        .collect();

    products
        .iter()
        .filter(|p| on_hand.get(&p.id).copied().unwrap_or(0.0) > 0.0)
        .map(|p| p.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantina_core::InventoryId;
    use chrono::Utc;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: None,
            unit: None,
            min_stock: 0.0,
            updated_at: Utc::now(),
        }
    }

    fn row(id: i64, product_id: i64, quantity: f64) -> InventoryRow {
        InventoryRow {
            id: InventoryId::new(id),
            product_id: ProductId::new(product_id),
            quantity,
        }
    }

    #[test]
    fn only_in_stock_products_are_suggested() {
        let products = vec![product(1, "Coffee"), product(2, "Milk"), product(3, "Sugar")];
        let inventory = vec![row(1, 1, 250.0), row(2, 2, 0.0)];

        let names = available_ingredients(&products, &inventory);
        assert_eq!(names, vec!["Coffee".to_string()]);
    }

    #[test]
    fn empty_inventory_suggests_nothing() {
        let products = vec![product(1, "Coffee")];
        assert!(available_ingredients(&products, &[]).is_empty());
    }
}
