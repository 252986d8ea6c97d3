//! Layout description parsing and lookup

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::lexer::scan_directive;
use super::properties::LayoutProperties;

/// Error types for layout loading
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("failed to open layout {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Mapping from widget identifier to its layout properties
///
/// Read-only once built. Duplicate identifiers in the source resolve to the
/// last directive parsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutDescription {
    entries: HashMap<String, LayoutProperties>,
}

impl LayoutDescription {
    /// Create an empty layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a layout from a string
    pub fn parse(source: &str) -> Self {
        Self::from_lines(source.lines().map(Ok))
    }

    /// Parse a layout from a reader, one line at a time
    ///
    /// A read error ends parsing; directives read up to that point are kept.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::from_lines(reader.lines())
    }

    /// Load a layout from a file
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let file = File::open(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = Self::from_reader(BufReader::new(file));
        crate::log!("Loaded layout {:?}: {} entries", path, layout.len());
        Ok(layout)
    }

    /// Load a layout from a file, falling back to an empty layout
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(layout) => layout,
            Err(e) => {
                crate::log!("Failed to load layout: {}, using empty layout", e);
                Self::new()
            }
        }
    }

    fn from_lines<S, I>(lines: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = std::io::Result<S>>,
    {
        let mut entries = HashMap::new();
        for line in lines {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    crate::log!("Layout read stopped early: {}", e);
                    break;
                }
            };
            if let Some((id, props)) = parse_line(line.as_ref()) {
                entries.insert(id, props);
            }
        }
        Self { entries }
    }

    /// Get the properties for an identifier
    pub fn properties(&self, identifier: &str) -> Option<&LayoutProperties> {
        self.entries.get(identifier)
    }

    /// Get the layer for an identifier, if it is part of this layout
    pub fn layer_of(&self, identifier: &str) -> Option<i32> {
        self.properties(identifier).map(|p| p.layer())
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all identifiers (unordered)
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Parse one source line into an identifier and its properties
///
/// Returns `None` for comments, blank lines, non-directives and directives
/// without a usable `id`.
pub fn parse_line(line: &str) -> Option<(String, LayoutProperties)> {
    let body = scan_directive(line)?;
    let body: String = body.chars().filter(|c| !c.is_whitespace()).collect();

    let mut id = String::new();
    let mut pos_x = 0.0;
    let mut pos_y = 0.0;
    let mut width = 0.0;
    let mut height = 0.0;
    let mut layer = 0;
    let mut enterable = false;

    for field in body.split(';') {
        let Some((key, value)) = field.split_once(':') else {
            continue;
        };
        let key = key.to_lowercase();

        if key.starts_with("id") {
            id = value.replace('"', "");
        } else if key.starts_with("posx") {
            pos_x = parse_fraction(value).unwrap_or(pos_x);
        } else if key.starts_with("posy") {
            pos_y = parse_fraction(value).unwrap_or(pos_y);
        } else if key.starts_with("width") {
            width = parse_fraction(value).unwrap_or(width);
        } else if key.starts_with("height") {
            height = parse_fraction(value).unwrap_or(height);
        } else if key.starts_with("zscore") {
            layer = parse_layer(value).unwrap_or(layer);
        } else if key.starts_with("enterable") {
            enterable = parse_flag(value).unwrap_or(enterable);
        }
    }

    if id.is_empty() {
        return None;
    }
    Some((
        id,
        LayoutProperties::new(pos_x, pos_y, width, height, layer, enterable),
    ))
}

/// "50%" or "50" -> 0.5
fn parse_fraction(value: &str) -> Option<f64> {
    value
        .replace('%', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v / 100.0)
}

fn parse_layer(value: &str) -> Option<i32> {
    value.parse().ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
