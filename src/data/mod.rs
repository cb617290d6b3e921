//! Corpus input module

pub mod corpus;
