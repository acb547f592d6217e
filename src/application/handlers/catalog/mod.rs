//! Catalog query handlers.

mod get_category;
mod get_module;
mod list_categories;
mod list_modules;

pub use get_category::{GetCategoryHandler, GetCategoryQuery};
pub use get_module::{GetModuleHandler, GetModuleQuery};
pub use list_categories::ListCategoriesHandler;
pub use list_modules::ListModulesHandler;
