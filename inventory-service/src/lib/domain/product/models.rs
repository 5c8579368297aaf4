use std::fmt;

use crate::domain::product::errors::ProductNameError;
use crate::domain::product::errors::QuantityError;

/// Product record as held by the inventory store.
///
/// `quantity` may legitimately be zero here; only mutation input is
/// required to be positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i32,
}

impl Product {
    /// Build the stored shape of a product from validated input.
    pub fn from_details(id: ProductId, details: ProductDetails) -> Self {
        Self {
            id,
            name: details.name.into_inner(),
            quantity: details.quantity.value(),
        }
    }
}

/// Store-assigned product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product not yet persisted; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i32,
}

impl From<ProductDetails> for NewProduct {
    fn from(details: ProductDetails) -> Self {
        Self {
            name: details.name.into_inner(),
            quantity: details.quantity.value(),
        }
    }
}

/// Product name value type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, ProductNameError> {
        if name.trim().is_empty() {
            return Err(ProductNameError::Empty);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Quantity accepted by create and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i32);

impl Quantity {
    /// # Errors
    /// * `NotPositive` - Value is zero or negative
    /// * `TooLarge` - Value does not fit the quantity column
    pub fn new(value: i64) -> Result<Self, QuantityError> {
        if value <= 0 {
            return Err(QuantityError::NotPositive(value));
        }

        i32::try_from(value)
            .map(Self)
            .map_err(|_| QuantityError::TooLarge {
                max: i64::from(i32::MAX),
                actual: value,
            })
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Validated name and quantity shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub name: ProductName,
    pub quantity: Quantity,
}

impl ProductDetails {
    pub fn new(name: ProductName, quantity: Quantity) -> Self {
        Self { name, quantity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_rejects_non_positive() {
        assert_eq!(Quantity::new(0), Err(QuantityError::NotPositive(0)));
        assert_eq!(Quantity::new(-5), Err(QuantityError::NotPositive(-5)));
        assert_eq!(Quantity::new(1).map(|q| q.value()), Ok(1));
    }

    #[test]
    fn test_quantity_rejects_overflow() {
        let result = Quantity::new(i64::from(i32::MAX) + 1);
        assert!(matches!(result, Err(QuantityError::TooLarge { .. })));
    }

    #[test]
    fn test_product_name_rejects_blank() {
        assert_eq!(ProductName::new(String::new()), Err(ProductNameError::Empty));
        assert_eq!(ProductName::new("   ".to_string()), Err(ProductNameError::Empty));
    }

    #[test]
    fn test_details_mapping() {
        let details = ProductDetails::new(
            ProductName::new("Book A".to_string()).unwrap(),
            Quantity::new(1200).unwrap(),
        );

        assert_eq!(
            NewProduct::from(details.clone()),
            NewProduct {
                name: "Book A".to_string(),
                quantity: 1200
            }
        );
        assert_eq!(
            Product::from_details(ProductId(3), details),
            Product {
                id: ProductId(3),
                name: "Book A".to_string(),
                quantity: 1200
            }
        );
    }
}
