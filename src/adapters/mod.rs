// Adapters layer: concrete implementations of the host-facing ports
// (filesystem writer, diagnostic sinks).

pub mod diagnostics;
pub mod fs_writer;
