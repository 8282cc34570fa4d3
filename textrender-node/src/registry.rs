//! Class-name → node mapping handed to the host.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use textrender_fonts::FontCatalogCache;
use textrender_raster::ImageTensor;

use crate::error::NodeError;
use crate::node::{Node, TextRenderNode, VerticalTextRenderNode};

/// Registered nodes and their display names.
#[derive(Default)]
pub struct NodeRegistry {
    nodes: HashMap<&'static str, Box<dyn Node>>,
    display_names: HashMap<&'static str, &'static str>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node` under its class name, replacing any previous entry.
    pub fn register(&mut self, node: Box<dyn Node>) {
        let class = node.class_name();
        if self.nodes.contains_key(class) {
            log::warn!("NodeRegistry: replacing '{class}'");
        }
        self.display_names.insert(class, node.display_name());
        self.nodes.insert(class, node);
    }

    pub fn get(&self, class_name: &str) -> Option<&dyn Node> {
        self.nodes.get(class_name).map(|node| node.as_ref())
    }

    pub fn display_name(&self, class_name: &str) -> Option<&'static str> {
        self.display_names.get(class_name).copied()
    }

    /// Class name → display name, as the host expects it.
    pub fn display_names(&self) -> &HashMap<&'static str, &'static str> {
        &self.display_names
    }

    /// Registered class names, sorted.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.nodes.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up `class_name` and execute it.
    pub fn execute(&self, class_name: &str, inputs: &Value) -> Result<ImageTensor, NodeError> {
        self.get(class_name)
            .ok_or_else(|| NodeError::UnknownNode(class_name.to_string()))?
            .execute(inputs)
    }
}

/// Both text-render nodes, sharing one catalog cache.
pub fn register_nodes(catalog: Arc<FontCatalogCache>) -> NodeRegistry {
    let mut registry = NodeRegistry::new();
    registry.register(Box::new(TextRenderNode::new(catalog.clone())));
    registry.register(Box::new(VerticalTextRenderNode::new(catalog)));
    log::info!("NodeRegistry: registered {:?}", registry.class_names());
    registry
}

// ===================================================================
// Tests
// ===================================================================
