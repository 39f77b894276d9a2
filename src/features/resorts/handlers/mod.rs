mod resort_handler;

pub use resort_handler::*;
