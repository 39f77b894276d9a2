mod resort_dto;

pub use resort_dto::*;
