#[macro_use]
extern crate error_chain;
pub mod errors {

    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain! {
        errors {
            UnknownDemo(name: String) {
                description("Unknown Demo")
                display("Unknown Demo: '{}', expected one of volume, power, truthiness", name)
            }
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
pub use errors::*;

pub mod coerce;
pub mod demo;
pub mod entity;
pub mod value;

pub use entity::{Entity, EntityHandle};
pub use value::{Kind, Value};

// Initialize logger for tests
// Pass RUST_LOG=trace for getting trace logs
#[cfg(test)]
#[ctor::ctor]
fn init() {
    env_logger::init();
}
