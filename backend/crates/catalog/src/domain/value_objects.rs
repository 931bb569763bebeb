//! Domain Value Objects
//!
//! Validated wrappers for user-supplied product fields. Validation runs
//! here, before any store access.

use rust_decimal::Decimal;

use crate::error::{CatalogError, CatalogResult};

/// Maximum product name length (characters)
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum description length (characters)
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Number of fractional digits a price may carry
pub const PRICE_SCALE: u32 = 2;

/// Validated product name: non-empty, at most [`MAX_NAME_LENGTH`] chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(raw: impl Into<String>) -> CatalogResult<Self> {
        let raw = raw.into();

        if raw.trim().is_empty() {
            return Err(CatalogError::Validation(
                "Product name is required".to_string(),
            ));
        }

        let char_count = raw.chars().count();
        if char_count > MAX_NAME_LENGTH {
            return Err(CatalogError::Validation(format!(
                "Product name must be at most {} characters (got {})",
                MAX_NAME_LENGTH, char_count
            )));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated price: strictly positive, at most [`PRICE_SCALE`] fractional
/// digits. More precision is rejected rather than rounded so that a
/// created product reads back exactly as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    pub fn new(value: Decimal) -> CatalogResult<Self> {
        if value <= Decimal::ZERO {
            return Err(CatalogError::Validation(
                "Price must be greater than zero".to_string(),
            ));
        }

        if value.normalize().scale() > PRICE_SCALE {
            return Err(CatalogError::Validation(format!(
                "Price must have at most {} fractional digits",
                PRICE_SCALE
            )));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Fully validated product input, shared by create and update.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: ProductName,
    pub description: Option<String>,
    pub price: Price,
}

impl ProductDraft {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: Decimal,
    ) -> CatalogResult<Self> {
        let name = ProductName::new(name)?;

        if let Some(desc) = &description {
            let char_count = desc.chars().count();
            if char_count > MAX_DESCRIPTION_LENGTH {
                return Err(CatalogError::Validation(format!(
                    "Description must be at most {} characters (got {})",
                    MAX_DESCRIPTION_LENGTH, char_count
                )));
            }
        }

        let price = Price::new(price)?;

        Ok(Self {
            name,
            description,
            price,
        })
    }
}
