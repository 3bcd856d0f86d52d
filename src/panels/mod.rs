mod central_panel;
mod tools_panel;

pub use central_panel::{central_panel, route_event};
pub use tools_panel::{PanelAction, tools_panel};
