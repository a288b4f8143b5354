//! FILENAME: core/engine/src/style.rs
//! PURPOSE: Defines the style data structures and registry for cell formatting.
//! CONTEXT: This file implements the Flyweight Pattern for efficient style storage.
//! Instead of storing full style data on every cell, a style plan stores a
//! style_index (usize) that points to a shared Style object in the central
//! StyleRegistry. A report page with hundreds of cells typically needs fewer
//! than a dozen unique styles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Text alignment options for cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextAlign {
    #[default]
    General, // Auto: numbers right, text left
    Left,
    Center,
    Right,
}

/// Number format types for displaying numeric values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NumberFormat {
    #[default]
    General,
    Number {
        decimal_places: u8,
        use_thousands_separator: bool,
    },
}

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8, // Alpha channel (255 = opaque)
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    pub const fn black() -> Self {
        Color::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Color::new(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Color::with_alpha(0, 0, 0, 0)
    }

    /// Convert to CSS rgba() string.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

/// Border style for a single edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct BorderStyle {
    pub width: u8, // 0 = no border, 1 = thin, 2 = medium, 3 = thick
    pub color: Color,
    pub style: BorderLineStyle,
}

impl BorderStyle {
    /// A thin solid black edge.
    pub fn thin() -> Self {
        BorderStyle {
            width: 1,
            color: Color::black(),
            style: BorderLineStyle::Solid,
        }
    }
}

/// Line style for borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BorderLineStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

/// Complete border configuration for a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Borders {
    pub top: BorderStyle,
    pub right: BorderStyle,
    pub bottom: BorderStyle,
    pub left: BorderStyle,
}

impl Borders {
    /// No borders on any edge.
    pub fn none() -> Self {
        Borders::default()
    }

    /// Thin borders on all four edges.
    pub fn thin_box() -> Self {
        Borders {
            top: BorderStyle::thin(),
            right: BorderStyle::thin(),
            bottom: BorderStyle::thin(),
            left: BorderStyle::thin(),
        }
    }

    /// A bottom edge only. Used to underline cells on total rows whose
    /// other edges are deliberately left open.
    pub fn underline_only() -> Self {
        Borders {
            bottom: BorderStyle::thin(),
            ..Borders::default()
        }
    }

    /// Bottom and right edges only.
    pub fn bottom_right() -> Self {
        Borders {
            bottom: BorderStyle::thin(),
            right: BorderStyle::thin(),
            ..Borders::default()
        }
    }

    /// Returns true if no edge is drawn.
    pub fn is_none(&self) -> bool {
        self.top.width == 0
            && self.right.width == 0
            && self.bottom.width == 0
            && self.left.width == 0
    }
}

/// Font style configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub size: u8, // Font size in points
    pub bold: bool,
    pub italic: bool,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle {
            family: "Helvetica".to_string(),
            size: 8,
            bold: false,
            italic: false,
            color: Color::black(),
        }
    }
}

/// Complete cell style definition.
/// This is what gets stored in the StyleRegistry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CellStyle {
    pub font: FontStyle,
    pub background: Color,
    pub text_align: TextAlign,
    pub number_format: NumberFormat,
    pub borders: Borders,
}

impl CellStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        CellStyle {
            font: FontStyle::default(),
            background: Color::white(),
            text_align: TextAlign::General,
            number_format: NumberFormat::General,
            borders: Borders::default(),
        }
    }

    /// Create a style with bold text.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Create a style with a specific font size.
    pub fn with_font_size(mut self, size: u8) -> Self {
        self.font.size = size;
        self
    }

    /// Create a style with a specific text alignment.
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    /// Create a style with a specific background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Create a style with a specific number format.
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Create a style with specific borders.
    pub fn with_borders(mut self, borders: Borders) -> Self {
        self.borders = borders;
        self
    }
}

/// The StyleRegistry implements the Flyweight Pattern.
/// It stores unique styles and returns indices for plans to reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleRegistry {
    /// Vector of unique styles. Index 0 is always the default style.
    styles: Vec<CellStyle>,
    /// Reverse lookup: style -> index for deduplication.
    #[serde(skip)]
    style_to_index: HashMap<CellStyle, usize>,
}

impl StyleRegistry {
    /// Create a new registry with the default style at index 0.
    pub fn new() -> Self {
        let default_style = CellStyle::new();
        let mut style_to_index = HashMap::new();
        style_to_index.insert(default_style.clone(), 0);

        StyleRegistry {
            styles: vec![default_style],
            style_to_index,
        }
    }

    /// Get or create a style index for the given style.
    /// If the style already exists, returns its index.
    /// Otherwise, adds the style and returns the new index.
    pub fn get_or_create(&mut self, style: CellStyle) -> usize {
        if let Some(&index) = self.style_to_index.get(&style) {
            return index;
        }

        let index = self.styles.len();
        self.style_to_index.insert(style.clone(), index);
        self.styles.push(style);
        index
    }

    /// Get a style by its index.
    /// Returns the default style (index 0) if index is out of bounds.
    pub fn get(&self, index: usize) -> &CellStyle {
        self.styles.get(index).unwrap_or(&self.styles[0])
    }

    /// Get the default style (index 0).
    pub fn default_style(&self) -> &CellStyle {
        &self.styles[0]
    }

    /// Get the total number of unique styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry only contains the default style.
    pub fn is_empty(&self) -> bool {
        self.styles.len() <= 1
    }

    /// Rebuild the reverse lookup map after deserialization.
    pub fn rebuild_index(&mut self) {
        self.style_to_index.clear();
        for (index, style) in self.styles.iter().enumerate() {
            self.style_to_index.insert(style.clone(), index);
        }
    }

    /// Get all styles (for serialization/debugging).
    pub fn all_styles(&self) -> &[CellStyle] {
        &self.styles
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        StyleRegistry::new()
    }
}
