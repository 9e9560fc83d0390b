mod field;
mod project_input;
mod project_item;
mod project_list;
mod tree;

pub use field::InputField;
pub use project_input::{FormField, MAX_PEOPLE, MIN_PEOPLE, ProjectInput};
pub use project_item::ProjectItem;
pub use project_list::{ProjectList, host_id};
pub use tree::{Host, InsertPosition, MountedItem, NodeId, ViewTree};
