//! Static descriptions of the three nodes, in the shape a node-graph host
//! expects when registering them.

use crate::params::StackMode;

pub const CATEGORY: &str = "List Stuff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Image,
    Int,
    Float,
    Str,
    Choice(&'static [&'static str]),
}

impl ParamType {
    /// Type tag used by the host.
    pub fn tag(&self) -> &'static str {
        match self {
            ParamType::Image => "IMAGE",
            ParamType::Int => "INT",
            ParamType::Float => "FLOAT",
            ParamType::Str => "STR",
            ParamType::Choice(_) => "CHOICE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub required: bool,
    /// Only accepts a connection, never a widget value.
    pub force_input: bool,
    pub min: Option<i64>,
    pub default: Option<&'static str>,
}

impl InputSpec {
    const fn required(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            required: true,
            force_input: false,
            min: None,
            default: None,
        }
    }

    const fn optional(name: &'static str, ty: ParamType) -> Self {
        Self {
            required: false,
            ..Self::required(name, ty)
        }
    }

    const fn forced(self) -> Self {
        Self {
            force_input: true,
            ..self
        }
    }

    const fn min(self, min: i64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDescriptor {
    pub name: &'static str,
    pub function: &'static str,
    pub category: &'static str,
    pub inputs: &'static [InputSpec],
    pub return_types: &'static [ParamType],
    pub return_names: &'static [&'static str],
    pub input_is_list: bool,
    pub output_is_list: bool,
    pub output_node: bool,
}

impl NodeDescriptor {
    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|input| input.name == name)
    }
}

pub const LABEL_OVERLAY: NodeDescriptor = NodeDescriptor {
    name: "ImageLabelOverlay",
    function: "put_overlay",
    category: CATEGORY,
    inputs: &[
        InputSpec::required("images", ParamType::Image),
        InputSpec::optional("float_labels", ParamType::Float).forced(),
        InputSpec::optional("int_labels", ParamType::Int).forced(),
        InputSpec::optional("str_labels", ParamType::Str).forced(),
    ],
    return_types: &[ParamType::Image],
    return_names: &["Images"],
    input_is_list: true,
    output_is_list: true,
    output_node: false,
};

pub const STACK_IMAGES: NodeDescriptor = NodeDescriptor {
    name: "StackImages",
    function: "stack_images",
    category: CATEGORY,
    inputs: &[
        InputSpec::required("images", ParamType::Image),
        InputSpec::required("splits", ParamType::Int).forced().min(1),
        InputSpec::required("stack_mode", ParamType::Choice(&StackMode::CHOICES))
            .with_default("horizontal"),
        InputSpec::required("batch_stack_mode", ParamType::Choice(&StackMode::CHOICES))
            .with_default("horizontal"),
    ],
    return_types: &[ParamType::Image],
    return_names: &["Image"],
    input_is_list: true,
    output_is_list: false,
    output_node: true,
};

pub const EMPTY_IMAGES: NodeDescriptor = NodeDescriptor {
    name: "EmptyImages",
    function: "generate_empty_images",
    category: CATEGORY,
    inputs: &[
        InputSpec::optional("num_images", ParamType::Int).forced().min(1),
        InputSpec::optional("splits", ParamType::Int).forced().min(1),
        InputSpec::optional("batch_size", ParamType::Int).min(1).with_default("1"),
    ],
    return_types: &[ParamType::Image],
    return_names: &["Image"],
    input_is_list: true,
    output_is_list: true,
    output_node: true,
};

/// Every node this crate provides, in registration order.
pub fn descriptors() -> [NodeDescriptor; 3] {
    [LABEL_OVERLAY, STACK_IMAGES, EMPTY_IMAGES]
}

pub fn descriptor(name: &str) -> Option<NodeDescriptor> {
    descriptors().into_iter().find(|node| node.name == name)
}
