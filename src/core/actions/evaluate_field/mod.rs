pub mod evaluate_field;
pub mod ports;
