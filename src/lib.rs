extern crate chrono;
extern crate serde;
extern crate serde_json;
extern crate uuid;

mod config;
mod error;
mod todo;

pub mod board;
pub mod collection;
pub mod id;
pub mod project;
pub mod storage;
pub mod store;
pub mod task;
pub mod time;
pub mod traits;

pub use config::Config;
pub use error::{Error, Result};
pub use todo::*;
