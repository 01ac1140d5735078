//! Path routing and the handlers behind each route.

pub mod handlers;
pub mod table;

pub use handlers::{Fill, HomePage, ToggleReply};
pub use table::{Handler, Route, RouteTable};
