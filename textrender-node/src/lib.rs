//! # textrender-node
//!
//! Host-facing node layer: two text-to-image nodes, their input forms, and
//! the registry the host loads them from.
//!
//! ## Architecture
//!
//! ```text
//! register_nodes(Arc<FontCatalogCache>)
//!     ├── TextRenderNode          "Render Text to Image"             (horizontal)
//!     └── VerticalTextRenderNode  "Render Text to Image (Vertical)"  (+ direction, quotes)
//!
//! inputs (JSON) ──► decode_request ──► RenderRequest ──► textrender_raster::render
//!                                                              │
//!                                                              ▼
//!                                                 ImageTensor [1, H, W, 3]
//! ```

pub mod error;
pub mod node;
pub mod registry;
pub mod schema;

// Re-exports for ergonomic use.
pub use error::NodeError;
pub use node::{decode_request, Node, TextRenderNode, VerticalTextRenderNode};
pub use registry::{register_nodes, NodeRegistry};
pub use schema::{input_types, SchemaOptions};
pub use textrender_raster::ImageTensor;
