//! Core library for the graph poet: a weighted directed graph ADT and a
//! word-affinity poem generator built on it

pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod poet;
pub mod storage;

pub use anyhow::{Result, anyhow};
pub use error::PoetError;
pub use graph::{AdjacencyGraph, EdgeListGraph, Graph, Representation};
pub use poet::GraphPoet;
