use crate::errors::Result;
use crate::lots::lots_model::Lot;
use async_trait::async_trait;

/// Trait for purchase lot repository operations.
///
/// Implementations keep every lot ever written, hand them back in write
/// order, and must be safe to share across concurrently writing tasks.
#[async_trait]
pub trait PurchaseLotRepositoryTrait: Send + Sync {
    async fn append_purchase_lot(&self, lot: Lot) -> Result<()>;
    async fn load_ordered_purchase_lots(&self) -> Result<Vec<Lot>>;
}
