pub mod alert;
pub mod navbar;
pub mod page;

pub use alert::ErrorAlert;
pub use navbar::Navbar;
pub use page::Page;
