pub mod aggregate_service;
pub mod currency_service;
pub mod region_service;
