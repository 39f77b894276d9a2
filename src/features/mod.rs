pub mod cities;
pub mod pages;
pub mod resorts;
