// HomeGrid state managers
// Managers handle stateful operations over the authoritative collection:
// mutation and drag-reorder reconciliation.

pub mod page_store;
pub mod reorder;
