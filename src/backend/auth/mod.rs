//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! tokens. It provides HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and credential stores
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - Session token issuing and validation
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → password hashed → user stored
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Get Me**: bearer token → token verified → user info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs carrying the user ID and an expiry
//! - Invalid credentials return 401 (no information leakage)

/// User data model and credential stores
pub mod users;

/// Password hashing
pub mod password;

/// Session token issuing and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use handlers::{get_me, login, register};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{TokenError, TokenService};
pub use users::{MemoryUserStore, PgUserStore, User, UserStore};
