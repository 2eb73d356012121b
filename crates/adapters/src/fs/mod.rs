mod clock;
mod exporter;

pub use clock::SystemClock;
pub use exporter::FsExportSink;
