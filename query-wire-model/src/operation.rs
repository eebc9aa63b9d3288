/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Binds an operation name to its optional output shape and declared error
/// shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSpec {
    name: String,
    output: Option<OutputSpec>,
    errors: Vec<String>,
}

impl OperationSpec {
    /// Creates an `OperationSpec` builder for the named operation.
    pub fn builder(name: impl Into<String>) -> OperationSpecBuilder {
        OperationSpecBuilder {
            inner: OperationSpec {
                name: name.into(),
                output: None,
                errors: Vec::new(),
            },
        }
    }

    /// The operation name. Success envelopes nest the output under
    /// `"<name>Response"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The output binding, if the operation has modeled output.
    pub fn output(&self) -> Option<&OutputSpec> {
        self.output.as_ref()
    }

    /// The declared error shape names, in declaration order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

/// Builder for [`OperationSpec`].
#[derive(Debug)]
pub struct OperationSpecBuilder {
    inner: OperationSpec,
}

impl OperationSpecBuilder {
    /// Sets the output binding.
    pub fn output(mut self, output: OutputSpec) -> Self {
        self.inner.output = Some(output);
        self
    }

    /// Declares an error shape for this operation.
    pub fn error(mut self, shape: impl Into<String>) -> Self {
        self.inner.errors.push(shape.into());
        self
    }

    /// Creates the operation spec.
    pub fn build(self) -> OperationSpec {
        self.inner
    }
}

/// An operation's output binding: the output shape name plus the optional
/// envelope key its fields are nested under.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSpec {
    shape: String,
    result_wrapper: Option<String>,
}

impl OutputSpec {
    /// Creates an output binding for the named shape.
    pub fn new(shape: impl Into<String>) -> Self {
        OutputSpec {
            shape: shape.into(),
            result_wrapper: None,
        }
    }

    /// Sets the result wrapper envelope key.
    pub fn result_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.result_wrapper = Some(wrapper.into());
        self
    }

    /// The output shape name.
    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// The envelope key the output fields are nested under: the result
    /// wrapper when given, otherwise the output shape name.
    pub fn wrapper_key(&self) -> &str {
        self.result_wrapper.as_deref().unwrap_or(&self.shape)
    }
}
