pub mod article;
pub mod brand;
pub mod category;
pub mod common;
pub mod order;
pub mod product;
pub mod query;

pub use article::*;
pub use brand::*;
pub use category::*;
pub use common::*;
pub use order::*;
pub use product::*;
pub use query::*;
