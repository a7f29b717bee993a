pub mod grocery;
pub mod interaction;
pub mod recipe;

pub use grocery::*;
pub use interaction::*;
pub use recipe::*;
