use std::io::Write;

use geojson::GeoJson;
use tracing::debug;

use crate::feature::Feature;
use crate::output::{self, FeatureCollectionObject};
use crate::Result;

/// An ordered collection of features, rendered as a `FeatureCollection`.
///
/// The name is descriptive only and never appears in the output.
#[derive(Debug, Default)]
pub struct World {
    name: String,
    features: Vec<Box<dyn Feature>>,
}

impl World {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_features(name, Vec::new())
    }

    pub fn with_features(name: impl Into<String>, features: Vec<Box<dyn Feature>>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn features(&self) -> &[Box<dyn Feature>] {
        &self.features
    }

    /// Append a feature. Duplicates are kept.
    pub fn add_feature(&mut self, feature: impl Feature + 'static) {
        self.features.push(Box::new(feature));
        debug!(world = %self.name, count = self.features.len(), "added feature");
    }

    pub fn collection_object(&self) -> FeatureCollectionObject {
        debug!(world = %self.name, count = self.features.len(), "rendering feature collection");
        FeatureCollectionObject {
            features: self.features.iter().map(|f| f.feature_object()).collect(),
        }
    }

    /// Compact GeoJSON, one line, no whitespace between tokens.
    pub fn to_geojson(&self) -> String {
        self.collection_object().to_string()
    }

    /// Indented GeoJSON. Key order and number rendering match `to_geojson`.
    pub fn to_geojson_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.collection_object())?)
    }

    pub fn to_geojson_value(&self) -> GeoJson {
        output::to_geojson(&self.collection_object())
    }

    /// Write the collection followed by a newline.
    pub fn write_geojson<W: Write>(&self, mut writer: W, pretty: bool) -> Result<()> {
        let collection = self.collection_object();
        if pretty {
            serde_json::to_writer_pretty(&mut writer, &collection)?;
        } else {
            serde_json::to_writer(&mut writer, &collection)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
