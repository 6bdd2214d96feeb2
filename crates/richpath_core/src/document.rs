//! Loading paths from SVG documents
//!
//! Each `<path>` element becomes a [`RichPath`] named after its `id`. Solid
//! fill and stroke paints become the path's colors, paint opacity becomes the
//! fill/stroke alpha, and the path's bounding box becomes its original size.

use std::fs;
use std::path::Path as FilePath;
use std::sync::Arc;

use usvg::{Options, Tree};

use crate::color::Argb;
use crate::error::PathError;
use crate::path::{RichPath, SharedPath};

/// A set of animatable paths loaded from an SVG document
#[derive(Clone, Debug)]
pub struct PathDocument {
    paths: Vec<SharedPath>,
    /// Size of the SVG canvas
    pub width: f32,
    pub height: f32,
}

impl PathDocument {
    /// Load paths from an SVG file
    pub fn from_file(path: impl AsRef<FilePath>) -> Result<Self, PathError> {
        let data = fs::read(path)?;
        Self::from_data(&data)
    }

    /// Load paths from raw SVG bytes
    pub fn from_data(data: &[u8]) -> Result<Self, PathError> {
        let options = Options::default();
        let tree = Tree::from_data(data, &options).map_err(|e| PathError::Parse(e.to_string()))?;
        let size = tree.size();

        let mut paths = Vec::new();
        collect_paths(tree.root(), &mut paths);
        tracing::debug!(
            "PathDocument: loaded {} paths ({}x{})",
            paths.len(),
            size.width(),
            size.height()
        );

        Ok(Self {
            paths,
            width: size.width(),
            height: size.height(),
        })
    }

    /// Load paths from an SVG string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(svg_str: &str) -> Result<Self, PathError> {
        Self::from_data(svg_str.as_bytes())
    }

    /// All paths in document order
    pub fn paths(&self) -> &[SharedPath] {
        &self.paths
    }

    /// Find the first path with the given name
    pub fn find_path(&self, name: &str) -> Option<SharedPath> {
        if name.is_empty() {
            return None;
        }
        self.paths
            .iter()
            .find(|p| p.lock().unwrap().name() == name)
            .map(Arc::clone)
    }

    /// Look up several paths at once; missing names yield `None`
    pub fn find_paths(&self, names: &[&str]) -> Vec<Option<SharedPath>> {
        names.iter().map(|name| self.find_path(name)).collect()
    }
}

fn collect_paths(group: &usvg::Group, paths: &mut Vec<SharedPath>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => collect_paths(g, paths),
            usvg::Node::Path(p) => paths.push(convert_path(p).shared()),
            // Text is converted to paths by usvg; images carry no path data
            usvg::Node::Image(_) | usvg::Node::Text(_) => {}
        }
    }
}

fn convert_path(p: &usvg::Path) -> RichPath {
    let bounds = p.data().bounds();
    let mut path = RichPath::new(p.id(), bounds.width(), bounds.height());

    if let Some(fill) = p.fill() {
        if let Some(color) = solid_color(fill.paint()) {
            path = path
                .with_fill_color(color)
                .with_fill_alpha(fill.opacity().get());
        } else {
            tracing::trace!("PathDocument: non-solid fill on '{}' ignored", p.id());
        }
    }

    if let Some(stroke) = p.stroke() {
        if let Some(color) = solid_color(stroke.paint()) {
            path = path
                .with_stroke_color(color)
                .with_stroke_alpha(stroke.opacity().get());
        }
        path = path.with_stroke_width(stroke.width().get());
    }

    path
}

fn solid_color(paint: &usvg::Paint) -> Option<Argb> {
    match paint {
        usvg::Paint::Color(color) => Some(Argb::from_channels(
            0xFF,
            color.red,
            color.green,
            color.blue,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEART: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">
        <path id="body" d="M 0 0 L 100 0 L 100 50 Z" fill="#ff0000"/>
        <g>
            <path id="outline" d="M 10 10 L 30 10 L 30 40" fill="none" stroke="#0000ff" stroke-width="4" stroke-opacity="0.5"/>
        </g>
    </svg>"##;

    #[test]
    fn test_load_document() {
        let doc = PathDocument::from_str(HEART).unwrap();
        assert_eq!(doc.paths().len(), 2);
        assert!((doc.width - 200.0).abs() < 1e-4);
        assert!((doc.height - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_fill_and_bounds() {
        let doc = PathDocument::from_str(HEART).unwrap();
        let body = doc.find_path("body").unwrap();
        let body = body.lock().unwrap();
        assert_eq!(body.fill_color(), Argb::RED);
        assert!((body.original_width() - 100.0).abs() < 1e-4);
        assert!((body.original_height() - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_nested_stroke() {
        let doc = PathDocument::from_str(HEART).unwrap();
        let outline = doc.find_path("outline").unwrap();
        let outline = outline.lock().unwrap();
        assert_eq!(outline.stroke_color(), Argb::BLUE);
        assert!((outline.stroke_width() - 4.0).abs() < 1e-4);
        assert!((outline.stroke_alpha() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_find_paths_reports_missing() {
        let doc = PathDocument::from_str(HEART).unwrap();
        let found = doc.find_paths(&["body", "missing"]);
        assert!(found[0].is_some());
        assert!(found[1].is_none());
    }

    #[test]
    fn test_invalid_svg() {
        let err = PathDocument::from_str("<not-svg").unwrap_err();
        assert!(matches!(err, PathError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = PathDocument::from_file("does/not/exist.svg").unwrap_err();
        assert!(matches!(err, PathError::Io(_)));
        assert!(matches!(err.clone(), PathError::Io(_)));
    }
}
