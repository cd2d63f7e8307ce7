pub mod helpers;
pub mod matchers;
pub mod mock_exchange;

pub use helpers::*;
pub use matchers::{NoQueryParam, ValidSignature};
pub use mock_exchange::MockExchange;
