//! # Macgen Core
//!
//! Pure generation logic. Nothing here touches the terminal; the only I/O is
//! [`persist::save`].
//!
//! `resolve prefix → generate addresses → render → persist`

pub mod generator;
pub mod persist;
pub mod resolver;
pub mod vendors;
