mod dp_state;
mod dp_table;
mod instance;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use dp_table::DPTable;

#[doc(inline)]
pub use dp_state::DPState;
