//! Test doubles shared by the integration tests.

mod mock_contact_repository;
mod scripted_chooser;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use scripted_chooser::ScriptedChooser;
