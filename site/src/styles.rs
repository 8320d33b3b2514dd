//! CSS for the homepage.
//!
//! Inlined into the server-rendered document and injected by the browser
//! build. Class names mirror the layout primitives used by the components:
//! segments, grids, menus, cards, statistics, forms and the off-canvas
//! sidebar. Avoid `>` and `&` here: the text is escaped when rendered.

use crate::config::LayoutConfig;

/// Stylesheet without the narrow-screen rules.
pub const SITE_CSS: &str = r#"
:root {
    --brand-blue: #3b5998;
    --brand-blue-dark: #304d8a;
    --ink: #1b1c1d;
    --ink-soft: rgba(0, 0, 0, 0.6);
    --paper: #ffffff;
    --rule: rgba(34, 36, 38, 0.15);
    --inverted: #1b1c1d;
    --font: 'Lato', 'Helvetica Neue', Arial, Helvetica, sans-serif;
    --sidebar-width: 260px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font);
    font-size: 14px;
    line-height: 1.4285em;
    color: rgba(0, 0, 0, 0.87);
    background: var(--paper);
}

a {
    color: #4183c4;
    text-decoration: none;
}

/* Layout */
.container {
    max-width: 1127px;
    margin: 0 auto;
    padding: 0 1em;
}

.container-text {
    max-width: 700px;
    font-size: 1.14285714rem;
    line-height: 1.5;
}

.segment {
    position: relative;
    padding: 1em;
}

.segment-vertical {
    border-bottom: 1px solid var(--rule);
}

.segment-raised {
    box-shadow: 0 2px 4px 0 rgba(34, 36, 38, 0.12), 0 2px 10px 0 rgba(34, 36, 38, 0.15);
}

.segment-inverted {
    background: var(--inverted);
    color: rgba(255, 255, 255, 0.9);
}

.hero {
    text-align: center;
}

/* Grid */
.grid {
    display: flex;
    flex-direction: column;
    margin: 0 auto;
    max-width: 1127px;
}

.grid .row {
    display: flex;
    flex-wrap: wrap;
    width: 100%;
    padding: 1em 0;
}

.grid .column {
    flex: 1 1 0;
    padding: 0 1em;
}

.grid-middle {
    align-items: center;
}

.grid .wide-3 { flex: 0 0 18.75%; }
.grid .wide-4 { flex: 0 0 25%; }
.grid .wide-5 { flex: 0 0 31.25%; }
.grid .wide-6 { flex: 0 0 37.5%; }
.grid .wide-8 { flex: 0 0 50%; }

.floated-right {
    margin-left: auto;
}

.centered {
    text-align: center;
}

.grid-celled-internally .column + .column {
    box-shadow: -1px 0 0 0 var(--rule);
}

.grid-divided .column + .column {
    box-shadow: -1px 0 0 0 rgba(255, 255, 255, 0.1);
}

/* Typography */
.header {
    font-weight: 700;
    line-height: 1.2857em;
    margin: 0 0 1rem;
}

.header-icon {
    display: flex;
    align-items: center;
    gap: 0.5em;
}

.header-sub {
    font-size: 1rem;
    font-weight: normal;
    color: var(--ink-soft);
}

.header-inverted {
    color: #ffffff;
}

.divider-horizontal {
    display: flex;
    align-items: center;
    gap: 1em;
    white-space: nowrap;
}

.divider-horizontal::before,
.divider-horizontal::after {
    content: '';
    flex: 1;
    border-top: 1px solid var(--rule);
}

/* Images */
.image { display: block; max-width: 100%; height: auto; }
.image-mini { width: 35px; }
.image-small { width: 150px; }
.image-large { width: 450px; }
.image-centered { margin-left: auto; margin-right: auto; }
.image-bordered { border: 1px solid var(--rule); }
.image-rounded { border-radius: 0.3125em; }
.image-avatar {
    display: inline-block;
    width: 2em;
    height: 2em;
    border-radius: 500rem;
    vertical-align: middle;
    margin-right: 0.25em;
}

.icon {
    display: inline-block;
    vertical-align: middle;
    margin-right: 0.35em;
}

/* Buttons */
.button {
    display: inline-flex;
    align-items: center;
    gap: 0.25em;
    cursor: pointer;
    border: none;
    border-radius: 0.28571429rem;
    padding: 0.78571429em 1.5em;
    background: #e0e1e2;
    color: rgba(0, 0, 0, 0.6);
    font-family: var(--font);
    font-weight: 700;
    font-size: 1rem;
}

.button:hover { background: #cacbcd; }
.button-large { font-size: 1.28571429rem; }
.button-huge { font-size: 1.42857143rem; }

.button-facebook {
    background: var(--brand-blue);
    color: #ffffff;
}

.button-facebook:hover {
    background: var(--brand-blue-dark);
}

.button-inverted {
    background: transparent;
    color: #ffffff;
    box-shadow: 0 0 0 2px #ffffff inset;
}

.button-animated-fade {
    position: relative;
    overflow: hidden;
}

.button-animated-fade .button-content {
    transition: opacity 0.3s ease;
}

.button-animated-fade .hidden {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    opacity: 0;
}

.button-animated-fade:hover .visible { opacity: 0; }
.button-animated-fade:hover .hidden { opacity: 1; }

/* Hero heading */
.heading-container {
    background: rgba(255, 255, 255, 0.7);
    color: var(--ink);
    padding-bottom: 10px;
    border-radius: 10px;
}

@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

.fade-in {
    animation: 5s fade-in;
}

/* Menus */
.menu {
    display: flex;
    align-items: center;
    min-height: 2.857em;
    font-size: 1.14285714rem;
    background: var(--paper);
    z-index: 101;
}

.menu-container {
    display: flex;
    align-items: center;
    width: 100%;
}

.menu-item {
    display: flex;
    align-items: center;
    padding: 0.92857143em 1.14285714em;
    color: rgba(0, 0, 0, 0.87);
    background: none;
    border: none;
    font: inherit;
    cursor: pointer;
}

.menu-item.active {
    font-weight: 700;
    border-bottom: 2px solid currentColor;
}

.menu-right {
    margin-left: auto;
}

.menu-inverted {
    background: transparent;
}

.menu-inverted .menu-item {
    color: rgba(255, 255, 255, 0.9);
}

.menu-secondary {
    box-shadow: none;
}

.menu-fixed-top {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    border-bottom: 1px solid var(--rule);
    box-shadow: 0 1px 2px 0 rgba(34, 36, 38, 0.15);
}

/* Off-canvas sidebar */
.pushable {
    position: relative;
    overflow-x: hidden;
}

.sidebar {
    position: fixed;
    top: 0;
    bottom: 0;
    left: 0;
    width: var(--sidebar-width);
    flex-direction: column;
    align-items: stretch;
    background: var(--inverted);
    transform: translate3d(-100%, 0, 0);
    transition: transform 0.5s ease;
    overflow-y: auto;
    z-index: 102;
}

.sidebar.visible {
    transform: translate3d(0, 0, 0);
}

.sidebar .menu-item {
    color: rgba(255, 255, 255, 0.9);
    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
}

.pusher {
    position: relative;
    transition: transform 0.5s ease;
}

.pusher.dimmed {
    transform: translate3d(var(--sidebar-width), 0, 0);
}

.dimmer {
    position: absolute;
    inset: 0;
    background: rgba(0, 0, 0, 0.4);
    z-index: 1000;
}

/* Statistics */
.statistic {
    display: inline-flex;
    flex-direction: column;
    align-items: center;
    margin: 1em 0;
}

.statistic-value {
    font-size: 4rem;
    font-weight: 400;
    line-height: 1;
}

.statistic-label {
    font-size: 1em;
    font-weight: 700;
    text-transform: uppercase;
    margin-top: 0.5em;
}

/* Cards */
.card {
    width: 290px;
    max-width: 100%;
    margin: 0 auto 1em;
    border-radius: 0.28571429rem;
    box-shadow: 0 1px 3px 0 #d4d4d5, 0 0 0 1px #d4d4d5;
    overflow: hidden;
    background: var(--paper);
}

.card-content {
    padding: 1em;
}

.card-header {
    font-weight: 700;
    font-size: 1.28571429em;
    margin-bottom: 0.5em;
}

.card-description {
    color: var(--ink-soft);
}

/* Forms */
.form .fields {
    display: flex;
    gap: 1em;
}

.form .fields-equal .field {
    flex: 1 1 0;
}

.form .field {
    margin-bottom: 1em;
}

.form label {
    display: flex;
    flex-direction: column;
    gap: 0.28571429rem;
    font-weight: 700;
    font-size: 0.92857143em;
}

.form input,
.form select,
.form textarea {
    font: inherit;
    font-weight: normal;
    padding: 0.67857143em 1em;
    border: 1px solid var(--rule);
    border-radius: 0.28571429rem;
}

.form textarea {
    min-height: 8em;
    resize: vertical;
}

/* Lists */
.list-item {
    display: block;
    padding: 0.21428571em 0;
}

.list-inverted .list-item {
    color: rgba(255, 255, 255, 0.7);
}

.list-inverted .list-item:hover {
    color: #ffffff;
}
"#;

/// Rules applied below the desktop breakpoint, wrapped by [`site_css`].
const STACKED_LAYOUT: &str = r#"
    .grid .row {
        flex-direction: column;
    }

    .grid .column,
    .grid .wide-3,
    .grid .wide-4,
    .grid .wide-5,
    .grid .wide-6,
    .grid .wide-8 {
        flex: 1 1 auto;
        width: 100%;
        padding: 1em;
        box-shadow: none;
    }

    .form .fields {
        flex-direction: column;
        gap: 0;
    }
"#;

/// Complete stylesheet for `layout`.
///
/// Widths below `desktop_min_width` mount the mobile presentation, so the
/// stacked grid rules start one pixel under it.
pub fn site_css(layout: &LayoutConfig) -> String {
    let max_width = layout.desktop_min_width.saturating_sub(1);
    format!("{SITE_CSS}\n@media only screen and (max-width: {max_width}px) {{\n{STACKED_LAYOUT}}}\n")
}
