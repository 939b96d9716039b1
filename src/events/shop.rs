//! Shop purchase event.

use serde::Serialize;

use super::{EventName, GameEvent};

/// A purchase went through and the wallet was debited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseCompleted {
    pub item: String,
    pub price: u64,
    /// Credits left in the wallet.
    pub balance: u64,
}

impl super::sealed::Sealed for PurchaseCompleted {}

impl GameEvent for PurchaseCompleted {
    const NAME: EventName = EventName::PurchaseCompleted;
}
