//! Workspace-level integration tests for fibbench.
