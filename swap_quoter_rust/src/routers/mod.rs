pub mod one_inch;
pub mod swap;
