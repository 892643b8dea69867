pub mod audio;
pub mod detection;
pub mod observability;
