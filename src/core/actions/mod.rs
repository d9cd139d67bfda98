pub mod colourise_field;
pub mod evaluate_field;
