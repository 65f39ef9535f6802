pub mod factory;
pub mod order;
pub mod session;

pub use crate::domain::model::{
    format_amount, Facade, FacadeKind, Material, OrderLine, OrderSummary, CURRENCY_SUFFIX,
};
pub use crate::domain::ports::{Console, MaterialFactory, OutputFormat, SessionConfig};
pub use crate::utils::error::Result;
pub use order::Order;
