pub mod listing;
pub mod model;

// Re-export commonly used types/functions for the CLI and tests
pub use listing::{disassemble, render_text, Entry};
pub use model::{labels_by_addr, load_labels, load_raw_image, Image};
