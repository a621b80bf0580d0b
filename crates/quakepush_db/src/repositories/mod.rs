//! Repository modules for token storage

pub mod token;
pub mod token_memory;
pub mod token_sql;

pub use token::{is_valid_table_name, TokenRecord, TokenStore};
pub use token_memory::MemoryTokenStore;
pub use token_sql::SqlTokenStore;
