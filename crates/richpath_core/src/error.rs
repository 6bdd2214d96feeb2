//! Path error types

use std::io;
use std::sync::Arc;
use thiserror::Error;

use crate::property::{PathProperty, PropertyKind};

/// Errors raised when reading, writing or loading paths
#[derive(Error, Debug, Clone)]
pub enum PathError {
    /// The property name does not match any animatable property
    #[error("unknown path property: {0}")]
    UnknownProperty(String),

    /// A value of the wrong kind was written to a property
    #[error("property {property} expects a {expected} value")]
    TypeMismatch {
        property: PathProperty,
        expected: PropertyKind,
    },

    /// IO error when reading an SVG file
    #[error("IO error: {0}")]
    Io(#[source] Arc<io::Error>),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),
}

impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        PathError::Io(Arc::new(err))
    }
}
