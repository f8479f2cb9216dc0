pub mod gadgets;
pub mod widgets;
