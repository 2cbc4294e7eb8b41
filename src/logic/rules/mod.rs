//! ソリティアのルール関連モジュールをまとめるよ！

pub mod foundation;
pub mod move_validation;
pub mod stock;
pub mod tableau;
pub mod win_condition;


pub use foundation::can_move_to_foundation;
pub use move_validation::is_move_valid;
pub use stock::{can_deal_from_stock, receives_row_deal};
pub use tableau::can_move_to_tableau;
pub use win_condition::check_win_condition;
