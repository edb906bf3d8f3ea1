//! Named annotation layers with independent visibility and opacity.
//!
//! Layers are keyed by name in creation order. Mutation entry points
//! auto-create the layer they target; read-only lookup never does —
//! [`AnnotationLayers::get_layer`] returns `None` for an unknown name.
//! Hiding or showing an unknown name is a tolerated no-op.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::models::annotation::Annotation;
use crate::models::record::DataRecord;
use crate::options::ConfigError;

/// Name of the layer [`AnnotationLayers::add`] targets.
pub const DEFAULT_LAYER: &str = "default";

/// One annotation layer: an ordered annotation list plus display state.
#[derive(Debug, Clone)]
pub struct AnnotationLayer {
    annotations: Vec<Annotation>,
    visible: bool,
    opacity: f64,
}

impl Default for AnnotationLayer {
    fn default() -> Self {
        Self {
            annotations: Vec::new(),
            visible: true,
            opacity: 1.0,
        }
    }
}

impl AnnotationLayer {
    /// The annotations, in insertion order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Append an annotation.
    pub fn push(&mut self, annotation: Annotation) -> &mut Self {
        self.annotations.push(annotation);
        self
    }

    /// Whether the layer is drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The layer opacity.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Set the layer opacity; must lie in `0..=1`.
    pub fn set_opacity(&mut self, value: f64) -> Result<&mut Self, ConfigError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidValue {
                field: "opacity",
                reason: format!("expected a fraction in 0..=1, got {value}"),
            });
        }
        self.opacity = value;
        Ok(self)
    }

    fn to_wire(&self, name: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::from(name));
        map.insert(
            "annotations".to_string(),
            Value::Array(
                self.annotations
                    .iter()
                    .map(|a| Value::Object(a.to_wire()))
                    .collect(),
            ),
        );
        map.insert("visible".to_string(), Value::from(self.visible));
        map.insert(
            "opacity".to_string(),
            serde_json::Number::from_f64(self.opacity)
                .map(Value::Number)
                .unwrap_or_else(|| Value::from(1)),
        );
        map
    }
}

/// The set of a chart's annotation layers, in creation order.
#[derive(Debug, Clone, Default)]
pub struct AnnotationLayers {
    layers: IndexMap<String, AnnotationLayer>,
}

impl AnnotationLayers {
    /// An empty layer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only lookup; never creates the layer.
    pub fn get_layer(&self, name: &str) -> Option<&AnnotationLayer> {
        self.layers.get(name)
    }

    /// Mutable access, creating the layer if absent.
    pub fn create_layer(&mut self, name: &str) -> &mut AnnotationLayer {
        self.layers.entry(name.to_string()).or_default()
    }

    /// Add an annotation to the [`DEFAULT_LAYER`], creating it if absent.
    pub fn add(&mut self, annotation: Annotation) -> &mut Self {
        self.add_to(DEFAULT_LAYER, annotation)
    }

    /// Add an annotation to a named layer, creating it if absent.
    pub fn add_to(&mut self, layer_name: &str, annotation: Annotation) -> &mut Self {
        self.create_layer(layer_name).push(annotation);
        self
    }

    /// Hide a layer. Unknown names are a no-op.
    pub fn hide(&mut self, name: &str) -> &mut Self {
        if let Some(layer) = self.layers.get_mut(name) {
            layer.visible = false;
        }
        self
    }

    /// Show a layer. Unknown names are a no-op.
    pub fn show(&mut self, name: &str) -> &mut Self {
        if let Some(layer) = self.layers.get_mut(name) {
            layer.visible = true;
        }
        self
    }

    /// `clear(Some(name))` empties that layer but keeps it (visibility and
    /// opacity intact); `clear(None)` removes every layer entirely.
    pub fn clear(&mut self, name: Option<&str>) -> &mut Self {
        match name {
            Some(name) => {
                if let Some(layer) = self.layers.get_mut(name) {
                    layer.annotations.clear();
                }
            }
            None => self.layers.clear(),
        }
        self
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layer exists.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// One wire mapping per layer, in creation order.
    pub fn to_wire(&self) -> Vec<Value> {
        self.layers
            .iter()
            .map(|(name, layer)| Value::Object(layer.to_wire(name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn note(time: i64, price: f64) -> Annotation {
        Annotation::new(time, price).unwrap()
    }

    #[test]
    fn add_auto_creates_the_default_layer() {
        let mut layers = AnnotationLayers::new();
        layers.add(note(0, 1.0).with_text("entry"));
        assert_eq!(
            Value::Array(layers.to_wire()),
            json!([{
                "name": "default",
                "annotations": [{"time": 0, "price": 1.0, "text": "entry"}],
                "visible": true,
                "opacity": 1.0
            }])
        );
    }

    #[test]
    fn get_layer_never_creates() {
        let mut layers = AnnotationLayers::new();
        assert!(layers.get_layer("trades").is_none());
        layers.create_layer("trades");
        assert!(layers.get_layer("trades").is_some());
    }

    #[test]
    fn hide_and_show_unknown_names_are_no_ops() {
        let mut layers = AnnotationLayers::new();
        layers.hide("nonexistent").show("also-nonexistent");
        assert!(layers.to_wire().is_empty());
    }

    #[test]
    fn hide_flips_visibility_only() {
        let mut layers = AnnotationLayers::new();
        layers.add_to("signals", note(0, 1.0));
        layers.hide("signals");
        let wire = layers.to_wire();
        assert_eq!(wire[0]["visible"], json!(false));
        assert_eq!(wire[0]["annotations"].as_array().unwrap().len(), 1);
        layers.show("signals");
        assert_eq!(layers.to_wire()[0]["visible"], json!(true));
    }

    #[test]
    fn clear_one_keeps_the_layer_and_its_state() {
        let mut layers = AnnotationLayers::new();
        layers.add_to("signals", note(0, 1.0));
        layers.create_layer("signals").set_opacity(0.5).unwrap();
        layers.hide("signals");
        layers.clear(Some("signals"));

        let layer = layers.get_layer("signals").unwrap();
        assert!(layer.annotations().is_empty());
        assert!(!layer.is_visible());
        assert_eq!(layer.opacity(), 0.5);
    }

    #[test]
    fn clear_all_removes_every_layer() {
        let mut layers = AnnotationLayers::new();
        layers.add(note(0, 1.0));
        layers.add_to("signals", note(60, 2.0));
        layers.clear(None);
        assert!(layers.is_empty());
        assert!(layers.get_layer(DEFAULT_LAYER).is_none());
        assert!(layers.to_wire().is_empty());
    }

    #[test]
    fn layers_serialize_in_creation_order() {
        let mut layers = AnnotationLayers::new();
        layers.add_to("b", note(0, 1.0));
        layers.add_to("a", note(0, 2.0));
        let wire = layers.to_wire();
        assert_eq!(wire[0]["name"], json!("b"));
        assert_eq!(wire[1]["name"], json!("a"));
    }

    #[test]
    fn opacity_validator_rejects_out_of_range() {
        let mut layers = AnnotationLayers::new();
        let layer = layers.create_layer("x");
        assert!(layer.set_opacity(1.5).is_err());
        assert_eq!(layer.opacity(), 1.0);
    }
}
