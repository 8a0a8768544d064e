//! Pure route tables: path mapping, access classes, and role targets.
//!
//! ARCHITECTURE
//! ============
//! Nothing here touches the browser or holds state. `state::router` composes
//! these functions into the navigation state machine.

pub mod classify;
pub mod path;
pub mod redirect;

pub use classify::{is_auth_route, is_protected_route, is_public_route};
pub use path::{Page, admin_sub_page, page_for_path, path_for_page};
pub use redirect::target_for;
