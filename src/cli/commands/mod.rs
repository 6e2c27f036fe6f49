pub mod combine;
pub mod self_check;

pub use combine::*;
pub use self_check::*;
