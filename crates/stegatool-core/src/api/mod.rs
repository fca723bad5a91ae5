pub mod create;
pub mod extract_raw;
pub mod shared;
pub mod verify;
