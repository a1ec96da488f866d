//! Widget components for the NovaCrust checkout TUI.
//!
//! Widgets are stateless renderers over borrowed screen state. Anything a
//! click must resolve against (tab cells, picker rows, field frames) is
//! laid out by [`crate::ui::layout`], never computed here on its own.
//!
//! # Module Structure
//!
//! - [`helpers`]: icon spans, hex colors, spinner frames
//! - [`amount_input`]: amount text plus token/currency trigger
//! - [`dropdown`]: closed-picker trigger for any selector
//! - [`picker_list`]: open-picker overlay with search line
//! - [`phone_input`]: country-code trigger plus formatted number
//! - [`tab_nav`]: conversion-type tabs
//! - [`button`]: primary action button

pub mod amount_input;
pub mod button;
pub mod dropdown;
pub mod helpers;
pub mod phone_input;
pub mod picker_list;
pub mod tab_nav;

pub use amount_input::{AmountFocus, AmountInput};
pub use button::Button;
pub use dropdown::DropdownTrigger;
pub use phone_input::PhoneInput;
pub use picker_list::{NO_OPTIONS_MESSAGE, NO_TOKENS_MESSAGE, PickerList, RowLabel};
pub use tab_nav::TabNav;
