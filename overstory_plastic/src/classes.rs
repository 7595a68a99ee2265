// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names used in widget markup.
//!
//! Style sheets target these names, so they are part of the public contract.

/// Marker class on every widget wrapper.
pub const BASE: &str = "plasticInput";
/// Wrapper class of single-line text widgets.
pub const TEXT: &str = "plasticInput-text";
/// Wrapper class of password widgets.
pub const PASSWORD: &str = "plasticInput-password";
/// Wrapper class of multi-line text widgets.
pub const TEXTAREA: &str = "plasticInput-textarea";
/// Wrapper class of select widgets.
pub const SELECT: &str = "plasticInput-select";
/// Wrapper class of file widgets.
pub const FILE: &str = "plasticInput-file";
/// Wrapper class of radio widgets.
pub const RADIO: &str = "plasticInput-radio";
/// Wrapper class of checkbox widgets.
pub const CHECKBOX: &str = "plasticInput-checkbox";

/// Box holding the visible part of a widget.
pub const TEXT_WRAPPER: &str = "textwrapper";
/// Decorative overlay inside the text wrapper.
pub const OVERLAY: &str = "overlay";
/// The inner form control or the text box.
pub const TEXT_BOX: &str = "text";
/// Element holding displayed text.
pub const TEXT_DATA: &str = "text-data";
/// The widget has focus.
pub const FOCUS: &str = "focus";
/// The pointer is over the widget (or its label, or an option).
pub const HOVER: &str = "hover";
/// The widget is disabled.
pub const DISABLED: &str = "disabled";

/// Checkbox/radio frame.
pub const INNER_BORDER: &str = "inner-border";
/// Checkbox/radio tick.
pub const FILL: &str = "fill";
/// Checkbox/radio is checked.
pub const CHECKED: &str = "checked";

/// File clear button.
pub const CLEAR_FILE: &str = "clear";
/// A file has been chosen.
pub const HAS_FILE: &str = "has-file";
/// The inner file input.
pub const FILE_INPUT: &str = "file";
/// File icon.
pub const FILE_ICON: &str = "icon";

/// Select arrow.
pub const SELECT_ARROW: &str = "arrow";
/// Select dropdown.
pub const DROPDOWN: &str = "dropdown";
/// List inside the dropdown.
pub const DROPDOWN_CONTENT: &str = "dropdown-content";
/// One option.
pub const SELECT_OPTION: &str = "option";
/// An option group.
pub const SELECT_OPTION_GROUP: &str = "option-group";
/// The dropdown opens upwards.
pub const SELECT_BOTTOM: &str = "bottom";
/// The selected option.
pub const SELECT_ACTIVE: &str = "active";
