//! End-to-end tests across snapshot import/export and rendering.

mod dot_export_test;
