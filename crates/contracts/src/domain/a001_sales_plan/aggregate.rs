use serde::{Deserialize, Serialize};
use std::fmt;

use super::naming::default_product_name;
use crate::shared::config::DisplaySettings;
use super::numeric_input::{FieldBounds, InputError, NumericInput};

/// ID of a product within one planning session.
///
/// Issued from a per-session counter; an ID is never handed out twice, even
/// after the product holding it has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable numeric field of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductField {
    ProductValue,
    SalesRatio,
    Price,
    ConversionRatio,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::ProductValue,
        ProductField::SalesRatio,
        ProductField::Price,
        ProductField::ConversionRatio,
    ];

    pub fn bounds(&self) -> FieldBounds {
        match self {
            ProductField::Price => FieldBounds::NON_NEGATIVE,
            _ => FieldBounds::PERCENT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductField::ProductValue => "Product Value (% of Revenue)",
            ProductField::SalesRatio => "Sales Ratio (Past %)",
            ProductField::Price => "Product Price",
            ProductField::ConversionRatio => "Sales Conversion Ratio (%)",
        }
    }

    /// Form label; money fields carry the configured currency symbol
    pub fn display_label(&self, display: &DisplaySettings) -> String {
        match self {
            ProductField::Price => display.currency_label(self.label()),
            _ => self.label().to_string(),
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ProductField::ProductValue => {
                "Percentage of total revenue goal this product should contribute"
            }
            ProductField::SalesRatio => "Historical sales ratio for this product",
            ProductField::Price => "Unit price of this product",
            ProductField::ConversionRatio => "Percentage of leads that convert to sales",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ProductField::ProductValue => "e.g., 40",
            ProductField::SalesRatio => "e.g., 35",
            ProductField::Price => "e.g., 1000",
            ProductField::ConversionRatio => "e.g., 15",
        }
    }
}

/// One product row of the planner form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub id: ProductId,
    pub name: String,
    /// Share of the revenue goal, %
    pub product_value: NumericInput,
    /// Historical sales ratio, %. Stored and exported, not used in any formula.
    pub sales_ratio: NumericInput,
    /// Unit price
    pub price: NumericInput,
    /// Share of leads expected to convert, %
    pub conversion_ratio: NumericInput,
}

impl ProductInput {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            product_value: NumericInput::unset(),
            sales_ratio: NumericInput::unset(),
            price: NumericInput::unset(),
            conversion_ratio: NumericInput::unset(),
        }
    }

    pub fn field(&self, field: ProductField) -> &NumericInput {
        match field {
            ProductField::ProductValue => &self.product_value,
            ProductField::SalesRatio => &self.sales_ratio,
            ProductField::Price => &self.price,
            ProductField::ConversionRatio => &self.conversion_ratio,
        }
    }

    fn field_mut(&mut self, field: ProductField) -> &mut NumericInput {
        match field {
            ProductField::ProductValue => &mut self.product_value,
            ProductField::SalesRatio => &mut self.sales_ratio,
            ProductField::Price => &mut self.price,
            ProductField::ConversionRatio => &mut self.conversion_ratio,
        }
    }

    /// Parse `text` into `field`. On error the field keeps its previous value.
    pub fn set_field(&mut self, field: ProductField, text: &str) -> Result<(), InputError> {
        let parsed = NumericInput::parse(text, field.bounds())?;
        *self.field_mut(field) = parsed;
        Ok(())
    }

    /// Fields still unset, in form order
    pub fn missing_fields(&self) -> Vec<ProductField> {
        ProductField::ALL
            .into_iter()
            .filter(|f| !self.field(*f).is_set())
            .collect()
    }

    pub fn has_all_required_fields(&self) -> bool {
        ProductField::ALL.iter().all(|f| self.field(*f).is_set())
    }
}

/// Planner form state for one user session: revenue goal plus ordered products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSession {
    revenue_goal: NumericInput,
    products: Vec<ProductInput>,
    next_id: u64,
}

impl Default for PlanSession {
    fn default() -> Self {
        Self::empty()
    }
}

impl PlanSession {
    /// Session with no products
    pub fn empty() -> Self {
        Self {
            revenue_goal: NumericInput::unset(),
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Session pre-populated with `initial_products` blank products
    pub fn new(initial_products: usize) -> Self {
        let mut session = Self::empty();
        for _ in 0..initial_products {
            session.add_product();
        }
        session
    }

    pub fn revenue_goal(&self) -> &NumericInput {
        &self.revenue_goal
    }

    pub fn set_revenue_goal(&mut self, text: &str) -> Result<(), InputError> {
        self.revenue_goal = NumericInput::parse(text, FieldBounds::NON_NEGATIVE)?;
        Ok(())
    }

    pub fn products(&self) -> &[ProductInput] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&ProductInput> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Append a blank product named after the current product count
    pub fn add_product(&mut self) -> ProductId {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;
        let name = default_product_name(self.products.len());
        self.products.push(ProductInput::new(id, name));
        id
    }

    /// Remove by id, keeping the order of the rest. Returns false if absent.
    pub fn remove_product(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    pub fn update_field(
        &mut self,
        id: ProductId,
        field: ProductField,
        text: &str,
    ) -> Result<(), InputError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InputError::UnknownProduct(id))?;
        product.set_field(field, text)
    }

    pub fn rename_product(&mut self, id: ProductId, name: &str) -> Result<(), InputError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(InputError::UnknownProduct(id))?;
        product.name = name.to_string();
        Ok(())
    }

    /// Clear every input and start over with `initial_products` blank products.
    /// IDs keep counting up from where they were.
    pub fn reset(&mut self, initial_products: usize) {
        self.revenue_goal = NumericInput::unset();
        self.products.clear();
        for _ in 0..initial_products {
            self.add_product();
        }
    }
}
