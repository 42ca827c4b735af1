use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a listed security.
/// e.g. "TCS", "INFY", "RELIANCE"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecurityId(String);

impl SecurityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SecurityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Listing {
    security: SecurityId,
    price: f64,
}

/// Current price per listed security.
///
/// Backed by a `Vec` rather than a map: iteration order is the listing
/// order given at construction, which is also the display order. The key
/// set is fixed once the market opens; only prices change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceBoard {
    listings: Vec<Listing>,
}

impl PriceBoard {
    /// Inserts a listing, or overwrites its price if the id is already
    /// listed.
    pub fn insert(&mut self, security: SecurityId, price: f64) {
        match self.listings.iter_mut().find(|l| l.security == security) {
            Some(listing) => listing.price = price,
            None => self.listings.push(Listing { security, price }),
        }
    }

    pub fn get(&self, security: &SecurityId) -> Option<f64> {
        self.listings
            .iter()
            .find(|l| &l.security == security)
            .map(|l| l.price)
    }

    pub fn contains(&self, security: &SecurityId) -> bool {
        self.listings.iter().any(|l| &l.security == security)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SecurityId, f64)> + '_ {
        self.listings.iter().map(|l| (&l.security, l.price))
    }

    pub(crate) fn prices_mut(&mut self) -> impl Iterator<Item = &mut f64> + '_ {
        self.listings.iter_mut().map(|l| &mut l.price)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
