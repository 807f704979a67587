pub mod bearer;

pub use bearer::MissingTokenPolicy;
