pub mod cart;
pub mod catalog;
pub mod product;
pub mod session;

pub use cart::*;
pub use catalog::*;
pub use product::*;
pub use session::*;
