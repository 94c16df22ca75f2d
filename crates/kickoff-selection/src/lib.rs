//! Kickoff: Selection bounded context.
//!
//! Responsible for recording which predicted events a user expects to
//! happen in a fixture, and for answering who is playing a fixture.

pub mod application;
pub mod domain;
