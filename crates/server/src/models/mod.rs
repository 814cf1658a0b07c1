//! Database row types for the server.
//!
//! These map one-to-one onto table rows. Repositories convert them into the
//! wire types from `sabzi_core` before anything leaves a handler, so clients
//! never see storage-only columns such as `password_hash`.

pub mod address;
pub mod order;
pub mod product;
pub mod user;

pub use address::AddressRecord;
pub use order::{OrderItemRecord, OrderRecord};
pub use product::ProductRecord;
pub use user::UserRecord;
