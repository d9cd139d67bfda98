pub mod colourise_field;
pub mod ports;
