pub mod book;
pub mod enums;
pub mod order;
pub mod pair;
pub mod ticker;
pub mod trade;

pub use book::{BookLevel, GateBook, MexcDepth, OrderBook};
pub use enums::{Side, VenueId};
pub use order::{CurrencyPairInfo, GateBalance, GateOrder, OrderRequest};
pub use pair::Pair;
pub use ticker::{GateTicker, MexcPrice};
pub use trade::{GateTrade, MexcTrade, Trade};
