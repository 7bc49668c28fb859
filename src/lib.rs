//! Workspace-level integration tests for cardgen live in `tests/`.
