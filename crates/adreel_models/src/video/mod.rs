//! Clip providers.

mod luma;
mod mock;
mod pika;
mod polling;
mod remote;
mod runway;

pub use luma::LumaBackend;
pub use mock::MockClipProvider;
pub use pika::PikaBackend;
pub use polling::{PollPolicy, TaskStatus, poll_until_terminal};
pub use remote::{RemoteBackend, RemoteClipProvider};
pub use runway::RunwayBackend;
