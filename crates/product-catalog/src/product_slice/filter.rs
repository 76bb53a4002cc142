use super::ProductError;
use crate::model::Product;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Which products the list shows.
///
/// Parsed from the option values of the filter select: `"all"` and `"isAvailable"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductFilter {
    #[default]
    All,
    IsAvailable,
}

impl ProductFilter {
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::IsAvailable => product.is_available,
        }
    }

    /// The products that pass the filter, in their original order.
    pub fn apply(self, products: &[Product]) -> impl Iterator<Item = &Product> {
        products.iter().filter(move |product| self.matches(product))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::IsAvailable => "isAvailable",
        }
    }
}

impl FromStr for ProductFilter {
    type Err = ProductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "isAvailable" => Ok(Self::IsAvailable),
            other => Err(ProductError::UnknownFilter(other.to_string())),
        }
    }
}

impl Display for ProductFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
