/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Session credentials on top of a credential store
pub mod context;
/// Login redirection capability
pub mod navigator;

pub use context::SessionContext;
pub use navigator::{LogNavigator, Navigator};
