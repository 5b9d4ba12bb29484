pub mod group_buy;

pub use group_buy::GroupBuy;
