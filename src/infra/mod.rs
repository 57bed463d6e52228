pub mod case_api;
