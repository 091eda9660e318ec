//! Unit and behaviour tests for `grafter_syntax`.

mod printing;
