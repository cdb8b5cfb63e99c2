//! Share ownership ledger built from purchase lots.

use serde::Serialize;

use crate::lots::Lot;

/// One purchase lot together with the sale lots drawn against it.
///
/// The available count starts at the purchased count and shrinks with every
/// sale. Entries are never deleted: a fully sold ownership stays in the
/// portfolio with an available count of zero.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareOwnership {
    purchase_lot: Lot,
    sale_lots: Vec<Lot>,
    available_count: u32,
}

impl ShareOwnership {
    pub fn new(purchase_lot: Lot) -> Self {
        let available_count = purchase_lot.count();
        ShareOwnership {
            purchase_lot,
            sale_lots: Vec::new(),
            available_count,
        }
    }

    /// Records a sale against this ownership.
    ///
    /// Callers must size `sale_lot` within the current available count; the
    /// calculator guarantees this by clamping every draw.
    pub fn sell(&mut self, sale_lot: Lot) {
        debug_assert!(
            sale_lot.count() <= self.available_count,
            "sale lot of {} shares exceeds the {} available",
            sale_lot.count(),
            self.available_count
        );
        self.available_count -= sale_lot.count();
        self.sale_lots.push(sale_lot);
    }

    pub fn purchase_lot(&self) -> &Lot {
        &self.purchase_lot
    }

    pub fn sale_lots(&self) -> &[Lot] {
        &self.sale_lots
    }

    /// Shares still held: the purchased count minus every sale so far.
    pub fn available_count(&self) -> u32 {
        self.available_count
    }
}

/// Ordered collection of share ownerships, one per purchase lot.
///
/// Insertion order is purchase order, which is what order-sensitive
/// selection strategies rely on. The collection only ever grows.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPortfolio {
    share_ownerships: Vec<ShareOwnership>,
}

impl InvestmentPortfolio {
    pub fn new() -> Self {
        InvestmentPortfolio::default()
    }

    /// Appends an ownership entry for a purchased lot.
    pub fn purchase(&mut self, lot: Lot) {
        self.share_ownerships.push(ShareOwnership::new(lot));
    }

    pub fn ownerships(&self) -> &[ShareOwnership] {
        &self.share_ownerships
    }

    pub(crate) fn ownership_mut(&mut self, index: usize) -> &mut ShareOwnership {
        &mut self.share_ownerships[index]
    }

    /// Total shares currently available across all ownerships, saturating at
    /// `u32::MAX` when a book extends past the representable range.
    pub fn available_shares(&self) -> u32 {
        let total: u64 = self
            .share_ownerships
            .iter()
            .map(|ownership| u64::from(ownership.available_count()))
            .sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }
}
