//! End-to-end tests of the conversion pipeline

mod pipeline;
