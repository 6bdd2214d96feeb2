//! RichPath Core
//!
//! Animatable vector path targets for the RichPath animator.
//!
//! - **RichPath**: a named path record with fill/stroke styling, size,
//!   rotation, translation and trim properties
//! - **PathProperty**: the closed set of animatable property names
//! - **Argb**: packed `0xAARRGGBB` colors
//! - **PathDocument**: loads named paths from SVG text
//!
//! # Example
//!
//! ```rust
//! use richpath_core::{Argb, PathProperty, PropertyValue, RichPath};
//!
//! let mut heart = RichPath::new("heart", 100.0, 80.0);
//! heart.set(PathProperty::FillColor, PropertyValue::Color(Argb::RED)).unwrap();
//!
//! let width: PathProperty = "width".parse().unwrap();
//! assert_eq!(heart.get(width), PropertyValue::Float(100.0));
//! ```

pub mod color;
pub mod document;
pub mod error;
pub mod path;
pub mod property;

pub use color::Argb;
pub use document::PathDocument;
pub use error::PathError;
pub use path::{PathUpdatedListener, RichPath, SharedPath};
pub use property::{PathProperty, PropertyKind, PropertyValue};
