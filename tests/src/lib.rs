//! End-to-end checks across `macgen-common` and `macgen-core`.

mod generation;
mod persistence;
