//! Posts Module
//!
//! Posts are the example owned resource: each has exactly one owner, set at
//! creation. Anyone may read; only the owner may update or delete.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs        - Module exports and documentation
//! ├── db.rs         - Post model, PostStore trait, Postgres and in-memory stores
//! ├── ownership.rs  - authorize(owner, caller) -> Allow | Deny
//! ├── types.rs      - Request/response types
//! └── handlers.rs   - HTTP handlers
//! ```

pub mod db;
pub mod ownership;
pub mod types;
pub mod handlers;

pub use db::{MemoryPostStore, PgPostStore, Post, PostStore};
pub use handlers::{create_post, delete_post, get_post, list_posts, update_post};
pub use ownership::{authorize, Access};
