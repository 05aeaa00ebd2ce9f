//! Data models for extracted statement records.

pub mod statement;
