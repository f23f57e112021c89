//! The ordered catalog of available layers.

use forecast_common::{ForecastError, ForecastResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::layer::{Layer, LayerContext, ReactiveComponents};
use crate::variables::{
    BoundaryLayerDepthLayer, CapeLayer, CloudCoverLayer, RainLayer, SurfaceTemperatureLayer,
    ThermalVelocityLayer, WindLayer,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate layer key: {0}")]
    DuplicateKey(String),
}

/// Layers in menu order, indexed by key.
pub struct LayerRegistry {
    layers: Vec<Box<dyn Layer>>,
    /// Key to position in `layers`
    index: HashMap<&'static str, usize>,
}

impl LayerRegistry {
    /// Build a registry, keeping the given order. Keys must be unique.
    pub fn new(layers: Vec<Box<dyn Layer>>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(layers.len());
        for (position, layer) in layers.iter().enumerate() {
            if index.insert(layer.key(), position).is_some() {
                return Err(RegistryError::DuplicateKey(layer.key().to_string()));
            }
        }
        Ok(Self { layers, index })
    }

    /// The built-in soaring catalog.
    pub fn standard() -> Result<Self, RegistryError> {
        let registry = Self::new(vec![
            Box::new(ThermalVelocityLayer),
            Box::new(BoundaryLayerDepthLayer),
            Box::new(CapeLayer),
            Box::new(WindLayer::SURFACE),
            Box::new(WindLayer::AT_2000M),
            Box::new(SurfaceTemperatureLayer),
            Box::new(CloudCoverLayer),
            Box::new(RainLayer),
        ])?;

        // Build every palette now rather than on first render
        for layer in registry.iter() {
            debug!(key = layer.key(), stops = layer.color_scale().len(), "Registered layer");
        }
        Ok(registry)
    }

    pub fn get(&self, key: &str) -> Option<&dyn Layer> {
        self.index.get(key).map(|&i| self.layers[i].as_ref())
    }

    /// Like [`get`](Self::get), failing with [`ForecastError::LayerNotFound`].
    pub fn require(&self, key: &str) -> ForecastResult<&dyn Layer> {
        self.get(key)
            .ok_or_else(|| ForecastError::LayerNotFound(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Layer> {
        self.layers.iter().map(|layer| layer.as_ref())
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layers.iter().map(|layer| layer.key())
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Components of the layer `key` for `ctx`.
    pub fn components(
        &self,
        key: &str,
        ctx: &LayerContext<'_>,
    ) -> ForecastResult<ReactiveComponents> {
        let layer = self.require(key)?;
        debug!(?ctx, key, "Building layer components");
        Ok(layer.reactive_components(ctx))
    }
}

impl std::fmt::Debug for LayerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

static REGISTRY: Lazy<LayerRegistry> = Lazy::new(|| {
    LayerRegistry::standard().unwrap_or_else(|e| panic!("Built-in layer catalog is invalid: {}", e))
});

/// The process-wide built-in catalog.
pub fn registry() -> &'static LayerRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_keys_rejected() {
        let result = LayerRegistry::new(vec![Box::new(CapeLayer), Box::new(CapeLayer)]);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateKey("cape".to_string())
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = LayerRegistry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
        assert!(registry.get("cape").is_none());
    }
}
