//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod dictionary;

pub use dictionary::{
    GetDefinitionsParams, GetDefinitionsTool, GetWordDetailsParams, GetWordDetailsTool,
    SearchWordParams, SearchWordTool,
};
