//! In-memory record store.
//!
//! # Data Flow
//! ```text
//! POST /users        → UserStore::append
//! GET /users         → UserStore::all
//! GET /users/{v}     → UserStore::filter_by_rule | UserStore::find_by_email
//! DELETE /users/{v}  → UserStore::remove_by_email
//! ```
//!
//! # Design Decisions
//! - One ordered Vec behind one Mutex; every operation holds the lock end to end
//! - Records are cloned out; handlers never hold a borrow across an await
//! - Email uniqueness is not enforced; lookups act on the first match in order

pub mod memory;
pub mod seed;
pub mod user;

pub use memory::UserStore;
pub use seed::demo_users;
pub use user::User;
