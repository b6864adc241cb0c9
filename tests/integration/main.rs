//! HTTP-level integration tests against the in-memory store.

mod helpers;

mod auth_test;
mod card_test;
mod static_test;
