//! Typed client for the registration workflow: the API client, the pure
//! form state machine, and the page component that ties them together.

pub mod api;
pub mod component;
pub mod form;
