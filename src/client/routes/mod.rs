pub mod admin;
pub mod checklist;
pub mod diagnostic;
pub mod history;
pub mod home;
pub mod manuals;
pub mod not_found;

pub use admin::Admin;
pub use checklist::Checklist;
pub use diagnostic::Diagnostic;
pub use history::History;
pub use home::Home;
pub use manuals::Manuals;
pub use not_found::NotFound;
