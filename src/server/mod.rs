// Server module entry point
// Listener setup, the accept loop, and per-connection handling

pub mod connection;
pub mod listener;

// `loop` is a keyword, so the module is named server_loop
#[path = "loop.rs"]
pub mod server_loop;

pub use listener::{create_listener, LISTEN_BACKLOG};
pub use server_loop::start_server_loop;
