pub mod order_structs;
pub mod user_structs;
