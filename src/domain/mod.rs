pub mod error;
pub mod event;
pub mod layout;

pub use error::AppError;
pub use event::{ScaffoldEvent, ScaffoldReport};
pub use layout::Layout;
