//! Workspace root package. It carries no code of its own and exists so that
//! `rusty-hook` can install the pre-commit hooks configured in `Cargo.toml`.
