//! SeaORM entities for the aoba web service.

pub mod items;
pub mod order_items;
pub mod orders;
pub mod users;
