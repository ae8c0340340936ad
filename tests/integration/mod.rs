//! Integration tests for contactbook
//!
//! These tests verify that the store, bulk transfer and binary work together.

#[path = "../common/mod.rs"]
pub mod common;

pub mod contact_flow;
pub mod properties;
