//! Integration tests, grouped by endpoint family

mod auth_test;
mod posts_test;
mod routing_test;
