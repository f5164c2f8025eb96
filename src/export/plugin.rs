/// Schema export formats the download endpoint knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchemaPlugin {
    Pdf,
    Svg,
    Eps,
    Dia,
}

impl SchemaPlugin {
    /// Value of the `export_type` form field selecting this plugin
    pub fn export_type(&self) -> &'static str {
        match self {
            SchemaPlugin::Pdf => "pdf",
            SchemaPlugin::Svg => "svg",
            SchemaPlugin::Eps => "eps",
            SchemaPlugin::Dia => "dia",
        }
    }

    /// File extension of the produced document
    pub fn extension(&self) -> &'static str {
        self.export_type()
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            SchemaPlugin::Pdf => "application/pdf",
            SchemaPlugin::Svg => "image/svg+xml",
            SchemaPlugin::Eps => "image/x-eps",
            SchemaPlugin::Dia => "application/x-dia-diagram",
        }
    }

    /// Short display name used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            SchemaPlugin::Pdf => "PDF",
            SchemaPlugin::Svg => "SVG",
            SchemaPlugin::Eps => "EPS",
            SchemaPlugin::Dia => "Dia",
        }
    }

    /// All supported plugins
    pub fn all() -> &'static [SchemaPlugin] {
        &[
            SchemaPlugin::Pdf,
            SchemaPlugin::Svg,
            SchemaPlugin::Eps,
            SchemaPlugin::Dia,
        ]
    }

    /// Parse from the `export_type` form value (exact match)
    pub fn from_export_type(name: &str) -> Option<SchemaPlugin> {
        match name {
            "pdf" => Some(SchemaPlugin::Pdf),
            "svg" => Some(SchemaPlugin::Svg),
            "eps" => Some(SchemaPlugin::Eps),
            "dia" => Some(SchemaPlugin::Dia),
            _ => None,
        }
    }
}
