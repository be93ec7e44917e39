pub mod in_memory_ledger;
