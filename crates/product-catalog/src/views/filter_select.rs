use crate::product_slice::{ProductError, ProductFilter};

/// The "All / Is Available" select above the product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSelect {
    value: ProductFilter,
}

impl FilterSelect {
    /// Option labels and the filters they stand for, in display order.
    pub const OPTIONS: [(&'static str, ProductFilter); 2] = [
        ("All", ProductFilter::All),
        ("Is Available", ProductFilter::IsAvailable),
    ];

    pub fn value(&self) -> ProductFilter {
        self.value
    }

    /// Handles a change event carrying the option value, e.g. `"isAvailable"`.
    ///
    /// An unknown value leaves the selection unchanged.
    pub fn select(&mut self, option: &str) -> Result<ProductFilter, ProductError> {
        self.value = option.parse()?;
        Ok(self.value)
    }
}
