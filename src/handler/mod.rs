// Handler module entry point
// HTTP request routing and the run/read endpoints

mod read;
mod router;
mod run;

pub use router::handle_request;
