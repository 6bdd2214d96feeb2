//! Animation error types

use std::io;
use std::sync::Arc;
use thiserror::Error;

use richpath_core::{PathError, PropertyKind};

/// Errors raised while building or configuring animations
#[derive(Error, Debug, Clone)]
pub enum AnimationError {
    /// Error from the path layer
    #[error(transparent)]
    Path(#[from] PathError),

    /// The property name does not match any animatable property
    #[error("unknown path property: {0}")]
    UnknownProperty(String),

    /// A property call received no keyframe values
    #[error("no values given for property {property}")]
    EmptyValues { property: String },

    /// The call's value kind does not match the property's kind
    #[error("property {property} is not a {expected} property")]
    PropertyKind {
        property: String,
        expected: PropertyKind,
    },

    /// Only width and height can be scaled against the original size
    #[error("property {0} cannot be scaled; use width or height")]
    NotScalable(String),

    /// Invalid configuration file
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error when reading a configuration file
    #[error("IO error: {0}")]
    Io(#[source] Arc<io::Error>),
}

impl From<io::Error> for AnimationError {
    fn from(err: io::Error) -> Self {
        AnimationError::Io(Arc::new(err))
    }
}

impl AnimationError {
    /// Map a path-level lookup failure to its builder-level variant
    pub(crate) fn from_lookup(err: PathError) -> Self {
        match err {
            PathError::UnknownProperty(name) => AnimationError::UnknownProperty(name),
            other => AnimationError::Path(other),
        }
    }
}
