// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

extern crate chrono;
extern crate libflate;
extern crate reqwest;
extern crate serde;
extern crate serde_json;

pub mod replay;
pub mod archive;

/*
    Common error_chain for all of lib to use so the ? operator passes things around real well.

    Add `use ::errors::*;` to the sub-modules to gain access to it.
*/
pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain!{
        foreign_links {
            Io(::std::io::Error);
            Reqwest(::reqwest::Error);
        }

        errors {
            Decode {
                description("malformed replay")
                display("replay is not valid replay json")
            }
            MissingTime(field: &'static str) {
                description("missing time")
                display("missing {} time", field)
            }
            MissingPlayer(seat: usize) {
                description("missing player")
                display("missing player {} info", seat)
            }
            OutOfRange(what: &'static str, index: usize, len: usize) {
                description("index out of range")
                display("{} index {} is out of range for length {}", what, index, len)
            }
            Fetch(code: String, status: u16) {
                description("replay fetch failed")
                display("archive answered {} for replay {}", status, code)
            }
        }
    }
}
