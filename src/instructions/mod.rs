pub mod bank_operations;
pub mod guard_admin_operations;
pub mod initialize_guard;
pub mod vault_operations;

pub use bank_operations::*;
pub use guard_admin_operations::*;
pub use initialize_guard::*;
pub use vault_operations::*;
