#![allow(clippy::useless_conversion)]

#[cfg(feature = "python-bindings")]
use numpy::{PyArray3, PyArray4, PyReadonlyArray4};
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;
#[cfg(feature = "python-bindings")]
use pyo3::types::{PyDict, PyList};

#[cfg(feature = "python-bindings")]
use crate::core::{ImageBatch, LabelInputs, NodeDescriptor, OverlayStyle, PlaceholderConfig};

#[cfg(feature = "python-bindings")]
fn to_batches(images: &[PyReadonlyArray4<f32>]) -> Vec<ImageBatch> {
    images.iter().map(|arr| arr.as_array().to_owned()).collect()
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (images, float_labels=None, int_labels=None, str_labels=None))]
pub fn put_overlay<'py>(
    py: Python<'py>,
    images: Vec<PyReadonlyArray4<f32>>,
    float_labels: Option<Vec<f64>>,
    int_labels: Option<Vec<i64>>,
    str_labels: Option<Vec<String>>,
) -> PyResult<Vec<Bound<'py, PyArray4<f32>>>> {
    let batches = to_batches(&images);
    let labels = LabelInputs {
        float_labels,
        int_labels,
        str_labels,
    };

    let overlaid = crate::overlay::put_overlay(&batches, &labels, &OverlayStyle::default())
        .map_err(|e| {
            pyo3::exceptions::PyValueError::new_err(format!("Label overlay failed: {}", e))
        })?;

    Ok(overlaid
        .iter()
        .map(|batch| PyArray4::from_array_bound(py, batch))
        .collect())
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
pub fn stack_images<'py>(
    py: Python<'py>,
    images: Vec<PyReadonlyArray4<f32>>,
    splits: Vec<usize>,
    stack_mode: Vec<String>,
    batch_stack_mode: Vec<String>,
) -> PyResult<Bound<'py, PyArray3<f32>>> {
    let batches = to_batches(&images);

    match crate::stack::stack_images(&batches, &splits, &stack_mode, &batch_stack_mode) {
        Ok(composite) => Ok(PyArray3::from_array_bound(py, &composite)),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "Stacking failed: {}",
            e
        ))),
    }
}

#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (num_images=None, splits=None, batch_size=None))]
pub fn generate_empty_images<'py>(
    py: Python<'py>,
    num_images: Option<Vec<usize>>,
    splits: Option<Vec<usize>>,
    batch_size: Option<Vec<usize>>,
) -> PyResult<Vec<Bound<'py, PyArray4<f32>>>> {
    let placeholders = crate::placeholder::generate_empty_images(
        num_images.as_deref(),
        splits.as_deref(),
        batch_size.as_deref(),
        &PlaceholderConfig::default(),
    )
    .map_err(|e| {
        pyo3::exceptions::PyValueError::new_err(format!("Placeholder generation failed: {}", e))
    })?;

    log::debug!("generated placeholders for splits {:?}", placeholders.splits);
    Ok(placeholders
        .batches
        .iter()
        .map(|batch| PyArray4::from_array_bound(py, batch))
        .collect())
}

#[cfg(feature = "python-bindings")]
fn describe_node<'py>(py: Python<'py>, node: &NodeDescriptor) -> PyResult<Bound<'py, PyDict>> {
    let inputs = PyList::empty_bound(py);
    for input in node.inputs {
        let spec = PyDict::new_bound(py);
        spec.set_item("name", input.name)?;
        spec.set_item("type", input.ty.tag())?;
        if let crate::node::ParamType::Choice(choices) = input.ty {
            spec.set_item("choices", choices.to_vec())?;
        }
        spec.set_item("required", input.required)?;
        spec.set_item("force_input", input.force_input)?;
        spec.set_item("min", input.min)?;
        spec.set_item("default", input.default)?;
        inputs.append(spec)?;
    }

    let dict = PyDict::new_bound(py);
    dict.set_item("name", node.name)?;
    dict.set_item("function", node.function)?;
    dict.set_item("category", node.category)?;
    dict.set_item("inputs", inputs)?;
    dict.set_item(
        "return_types",
        node.return_types.iter().map(|ty| ty.tag()).collect::<Vec<_>>(),
    )?;
    dict.set_item("return_names", node.return_names.to_vec())?;
    dict.set_item("input_is_list", node.input_is_list)?;
    dict.set_item("output_is_list", node.output_is_list)?;
    dict.set_item("output_node", node.output_node)?;
    Ok(dict)
}

/// Registration data for every node, one dictionary per node.
#[cfg(feature = "python-bindings")]
#[pyfunction]
pub fn node_definitions(py: Python<'_>) -> PyResult<Vec<Bound<'_, PyDict>>> {
    crate::node::descriptors()
        .iter()
        .map(|node| describe_node(py, node))
        .collect()
}
