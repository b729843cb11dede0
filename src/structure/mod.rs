// Tue Oct 13 2026 - Alex

pub mod alignment;
pub mod dsect;
pub mod layout;
pub mod registry;
pub mod type_info;

pub use alignment::Alignment;
pub use dsect::{DsectModel, Equ, Member};
pub use layout::{EmissionPlan, LayoutSynthesizer, PlanEntry};
pub use registry::{ConstantScoping, StructureRegistry};
pub use type_info::{ElementType, FieldType};
