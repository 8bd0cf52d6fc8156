pub mod bite;
