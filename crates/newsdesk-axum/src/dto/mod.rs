//! Data Transfer Objects (DTOs) for the HTTP contract.
//!
//! Page contexts define what each GET route serves; request/response
//! types define the mutation payloads. They decouple the wire shape from
//! the domain types where the two differ.

pub mod pages;
pub mod requests;

pub use pages::{
    AuthForm, CommentDeletePage, CommentEditPage, CommentForm, HomePage, LoginPage,
    NewsDetailPage, SignupPage,
};
pub use requests::{AuthResponse, CommentRequest, CredentialsRequest};
