use crate::Arguments;

use serde::{Deserialize, Serialize};

/// One boundary request: a method name plus its argument bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Arguments,
}

impl MethodCall {
    pub fn new<S: Into<String>>(method: S, arguments: Arguments) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// A call without arguments.
    pub fn bare<S: Into<String>>(method: S) -> Self {
        Self::new(method, Arguments::new())
    }
}
