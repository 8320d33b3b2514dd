//! Inline SVG icons.
//!
//! Simple filled glyphs on a 256x256 grid, drawn with the even-odd rule so
//! cut-outs need no winding care.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_ENVELOPE size="16" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Fill color (CSS color value)
    #[prop(default = "currentColor")]
    color: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill=color
            viewBox="0 0 256 256"
            class=format!("icon {class}")
            aria-hidden="true"
        >
            <path fill-rule="evenodd" d=path></path>
        </svg>
    }
}

/// Hamburger / sidebar toggle
pub const ICON_LIST: &str = "M32,56H224V80H32Zm0,60H224v24H32Zm0,60H224v24H32Z";

/// Envelope (mail)
pub const ICON_ENVELOPE: &str =
    "M32,56H224V200H32ZM52,76l76,56,76-56ZM48,96V184H208V96l-80,58Z";

/// Mobile phone
pub const ICON_PHONE: &str = "M72,24H184a16,16,0,0,1,16,16V216a16,16,0,0,1-16,16H72a16,16,0,0,1-16-16V40A16,16,0,0,1,72,24Zm8,24V192h96V48Zm36,156v12h24V204Z";

/// Group of people
pub const ICON_USERS: &str = "M96,64a40,40,0,1,1,0,80a40,40,0,1,1,0-80ZM24,216c0-44,32-64,72-64s72,20,72,64ZM176,72a32,32,0,1,1,0,64a32,32,0,1,1,0-64Zm8,80c28,4,48,24,48,64H184c0-24-6-44-20-56Z";

/// Office building
pub const ICON_BUILDING: &str = "M48,32H160V224H48ZM72,56V80H96V56Zm40,0V80h24V56ZM72,104v24H96V104Zm40,0v24h24V104ZM72,152v24H96V152Zm40,0v24h24V152ZM92,196v28h24V196Zm84-100h48V224H176Z";

/// Shield
pub const ICON_SHIELD: &str = "M128,16l88,32v72c0,64-40,104-88,120C80,224,40,184,40,120V48Z";

/// Map pin
pub const ICON_MAP_PIN: &str = "M128,16a72,72,0,0,1,72,72c0,56-72,152-72,152S56,144,56,88A72,72,0,0,1,128,16Zm0,40a32,32,0,1,0,0,64a32,32,0,1,0,0-64Z";

/// Info circle
pub const ICON_INFO: &str = "M128,24a104,104,0,1,1,0,208a104,104,0,1,1,0-208Zm-12,88v72h24V112Zm12-48a16,16,0,1,0,0,32a16,16,0,1,0,0-32Z";

/// Briefcase
pub const ICON_BRIEFCASE: &str = "M96,40h64a16,16,0,0,1,16,16V72h40a16,16,0,0,1,16,16V200a16,16,0,0,1-16,16H40a16,16,0,0,1-16-16V88A16,16,0,0,1,40,72H80V56A16,16,0,0,1,96,40Zm8,16V72h48V56Z";

/// House
pub const ICON_HOUSE: &str = "M128,24,240,120H208V224H152V160H104v64H48V120H16Z";
