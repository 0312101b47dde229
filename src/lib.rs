// Core modules - always available
mod config;
mod convert;
mod core;
mod error;
mod font;
mod node;
mod overlay;
mod params;
mod placeholder;
mod stack;

// Python bindings - only when feature is enabled
#[cfg(feature = "python-bindings")]
mod python_bindings;


// Re-export core functionality for native Rust usage
pub use crate::core::*;
pub use crate::font::BitmapFont;

// Python module definition - only when python-bindings feature is enabled
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
#[pymodule]
fn imagebatch_nodes(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use crate::python_bindings::*;

    m.add_function(wrap_pyfunction!(put_overlay, m)?)?;
    m.add_function(wrap_pyfunction!(stack_images, m)?)?;
    m.add_function(wrap_pyfunction!(generate_empty_images, m)?)?;
    m.add_function(wrap_pyfunction!(node_definitions, m)?)?;

    Ok(())
}
