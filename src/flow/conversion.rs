use super::definition::Flow;
use crate::error::FlowConversionError;

/// A trait for custom data models that can be converted into a keiro [`Flow`].
///
/// This is the primary extension point for keeping keiro format-agnostic. A
/// host that stores automations in its own builder-export shape implements
/// this trait on its structs to provide a translation layer into the canonical
/// document the validator consumes.
///
/// # Example
///
/// ```rust
/// use keiro::prelude::*;
/// use keiro::error::FlowConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, label: String }
/// struct MyAutomation { id: String, name: String, steps: Vec<MyStep> }
///
/// // 2. Implement `IntoFlow` for your top-level struct.
/// impl IntoFlow for MyAutomation {
///     fn into_flow(self) -> std::result::Result<Flow, FlowConversionError> {
///         let mut flow = Flow::new(self.id, self.name, TriggerType::Manual);
///         for (index, step) in self.steps.into_iter().enumerate() {
///             // First step becomes the trigger, the rest become actions.
///             let config = if index == 0 {
///                 NodeConfig::trigger()
///             } else {
///                 NodeConfig::action()
///             };
///             flow = flow.with_node(Node::new(step.id, step.label, config));
///         }
///         Ok(flow)
///     }
/// }
/// ```
pub trait IntoFlow {
    /// Consumes the object and converts it into a keiro-compatible flow document.
    fn into_flow(self) -> Result<Flow, FlowConversionError>;
}
