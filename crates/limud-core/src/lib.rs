//! # limud-core
//!
//! Core types, conjugation codec, and error types for Limud.
//!
//! This crate provides the foundational types shared across all Limud crates:
//! - Entity structs for vocabulary words, conjugated verbs, and scraped words
//! - Grammatical enums with their string and bit encodings
//! - The packed conjugation key and its label tables
//! - Word construction and update from raw form fields
//! - Cross-cutting error types

pub mod conjugation;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod fields;
