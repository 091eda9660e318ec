//! Unit and behaviour tests for the `grafter` facade.

mod fakes;

mod body_tests;
mod collection_tests;
