//! Wire DTOs for the backend's JSON contract.
//!
//! Field names follow the backend exactly (`nombre`, `cantidad_actual`,
//! `tipo` with values `entrada`/`salida`). Conversions to and from the
//! domain types happen here and nowhere else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cantina_catalog::{NewProduct, Product, ProductPatch};
use cantina_core::{InventoryId, MoveId, ProductId, SupplierId, UserId};
use cantina_inventory::InventoryRow;
use cantina_ledger::{Direction, NewStockMove, StockMove};

// -------------------------
// Products
// -------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub nombre: String,
    pub categoria: Option<String>,
    pub unidad_medida: Option<String>,
    pub stock_minimo: f64,
    pub fecha_actualizacion: DateTime<Utc>,
}

impl From<ProductDto> for Product {
    fn from(dto: ProductDto) -> Self {
        Product {
            id: ProductId::new(dto.id),
            name: dto.nombre,
            category: dto.categoria,
            unit: dto.unidad_medida,
            min_stock: dto.stock_minimo,
            updated_at: dto.fecha_actualizacion,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewProductDto {
    pub nombre: String,
    pub categoria: Option<String>,
    pub unidad_medida: Option<String>,
    pub stock_minimo: f64,
}

impl From<NewProduct> for NewProductDto {
    fn from(draft: NewProduct) -> Self {
        Self {
            nombre: draft.name,
            categoria: draft.category,
            unidad_medida: draft.unit,
            stock_minimo: draft.min_stock,
        }
    }
}

/// Partial update body: absent fields stay untouched on the backend,
/// explicit `null` clears an optional field.
#[derive(Debug, Serialize)]
pub struct ProductPatchDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unidad_medida: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_minimo: Option<f64>,
}

impl From<ProductPatch> for ProductPatchDto {
    fn from(patch: ProductPatch) -> Self {
        Self {
            nombre: patch.name,
            categoria: patch.category,
            unidad_medida: patch.unit,
            stock_minimo: patch.min_stock,
        }
    }
}

// -------------------------
// Inventory
// -------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct InventoryDto {
    pub id: i64,
    pub producto_id: i64,
    pub cantidad_actual: f64,
}

impl From<InventoryDto> for InventoryRow {
    fn from(dto: InventoryDto) -> Self {
        InventoryRow {
            id: InventoryId::new(dto.id),
            product_id: ProductId::new(dto.producto_id),
            quantity: dto.cantidad_actual,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateInventoryDto {
    pub producto_id: i64,
    pub cantidad_actual: f64,
}

#[derive(Debug, Serialize)]
pub struct UpdateInventoryDto {
    pub cantidad_actual: f64,
}

// -------------------------
// Stock moves
// -------------------------

/// Movement direction on the wire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoDto {
    #[serde(rename = "entrada")]
    Entrada,
    #[serde(rename = "salida")]
    Salida,
}

impl From<Direction> for TipoDto {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Entrance => TipoDto::Entrada,
            Direction::Exit => TipoDto::Salida,
        }
    }
}

impl From<TipoDto> for Direction {
    fn from(tipo: TipoDto) -> Self {
        match tipo {
            TipoDto::Entrada => Direction::Entrance,
            TipoDto::Salida => Direction::Exit,
        }
    }
}

impl TipoDto {
    /// Query-parameter spelling.
    pub fn as_param(&self) -> &'static str {
        match self {
            TipoDto::Entrada => "entrada",
            TipoDto::Salida => "salida",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockMoveDto {
    pub id: i64,
    pub producto_id: i64,
    pub tipo: TipoDto,
    pub cantidad: f64,
    pub fecha: DateTime<Utc>,
    #[serde(default)]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub proveedor_id: Option<i64>,
}

impl From<StockMoveDto> for StockMove {
    fn from(dto: StockMoveDto) -> Self {
        StockMove {
            id: MoveId::new(dto.id),
            product_id: ProductId::new(dto.producto_id),
            direction: dto.tipo.into(),
            quantity: dto.cantidad,
            recorded_at: dto.fecha,
            actor: dto.usuario_id.map(UserId::new),
            supplier: dto.proveedor_id.map(SupplierId::new),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NewStockMoveDto {
    pub producto_id: i64,
    pub tipo: TipoDto,
    pub cantidad: f64,
    pub usuario_id: Option<i64>,
    pub proveedor_id: Option<i64>,
}

impl From<NewStockMove> for NewStockMoveDto {
    fn from(entry: NewStockMove) -> Self {
        Self {
            producto_id: entry.product_id.as_i64(),
            tipo: entry.direction.into(),
            cantidad: entry.quantity,
            usuario_id: entry.actor.map(|a| a.as_i64()),
            proveedor_id: entry.supplier.map(|s| s.as_i64()),
        }
    }
}

// -------------------------
// Meal suggestion
// -------------------------

#[derive(Debug, Serialize)]
pub struct SuggestRequestDto {
    pub ingredients: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestResponseDto {
    pub suggestion: String,
}
