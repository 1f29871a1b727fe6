pub mod aggregate;
pub mod naming;
pub mod numeric_input;

pub use aggregate::{PlanSession, ProductField, ProductId, ProductInput};
pub use naming::{default_product_name, product_label};
pub use numeric_input::{FieldBounds, InputError, NumericInput};
