//! Launch actions

pub mod declare_argument;
pub mod node;

pub use declare_argument::DeclareLaunchArgument;
pub use node::{NodeDescriptor, Output, ParamDecl, RemapDecl};
