//! IDE features: high-level APIs for editor requests.
//!
//! Each function takes the workspace and a [`DeclarationBuilder`](crate::declaration::DeclarationBuilder)
//! and returns plain data; conversion to protocol types happens at the boundary.

mod declarations;

pub use declarations::{WorkspaceDeclaration, absolute_range, declaration_at, document_declarations};
