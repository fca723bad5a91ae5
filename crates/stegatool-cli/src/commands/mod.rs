pub mod createwm;
pub mod extract_raw;
pub mod verifywm;
