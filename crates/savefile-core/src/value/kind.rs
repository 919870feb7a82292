use std::fmt;

/// Classification bucket driving which encoder and which extensions apply.
///
/// The declaration order is the classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Table,
    NumericArray,
    Json,
    Text,
    Binary,
    Figure,
}

const TABLE_EXTENSIONS: &[&str] = &[".csv", ".pkl", ".pickle"];
const ARRAY_EXTENSIONS: &[&str] = &[".npy"];
const JSON_EXTENSIONS: &[&str] = &[".json"];
const TEXT_EXTENSIONS: &[&str] = &[".txt"];
const BINARY_EXTENSIONS: &[&str] = &[".pkl", ".pickle"];
const FIGURE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".pdf", ".svg", ".tif", ".tiff"];

impl Kind {
    /// Every kind, in classification priority order.
    pub const ALL: [Kind; 6] = [
        Kind::Table,
        Kind::NumericArray,
        Kind::Json,
        Kind::Text,
        Kind::Binary,
        Kind::Figure,
    ];

    /// Human readable name used in messages
    pub fn name(self) -> &'static str {
        match self {
            Kind::Table => "Table",
            Kind::NumericArray => "NumericArray",
            Kind::Json => "JSONValue",
            Kind::Text => "Text",
            Kind::Binary => "BinaryBlob",
            Kind::Figure => "Figure",
        }
    }

    /// Extensions (with leading dot, lower case) this kind can be saved as.
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            Kind::Table => TABLE_EXTENSIONS,
            Kind::NumericArray => ARRAY_EXTENSIONS,
            Kind::Json => JSON_EXTENSIONS,
            Kind::Text => TEXT_EXTENSIONS,
            Kind::Binary => BINARY_EXTENSIONS,
            Kind::Figure => FIGURE_EXTENSIONS,
        }
    }

    /// Extension used when the target name carries none. Always the first
    /// accepted extension.
    pub fn default_extension(self) -> &'static str {
        self.accepted_extensions()[0]
    }

    /// Whether `extension` (normalized, with leading dot) is accepted.
    pub fn accepts(self, extension: &str) -> bool {
        self.accepted_extensions().contains(&extension)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
