//! # Pattern Table
//!
//! The table is a single ordered slice; position in the slice is precedence.
//! Classification is first-group-wins over substring containment, so moving a
//! group changes the outcome for ambiguous tokens (`top-0` contains the
//! Spacing trigger `p-` but resolves to Coordinates, which is scanned first).

use crate::{
    patterns::ClassGroup,
    types::GroupTier::{self, DarkMode, PseudoElement, Responsive, StateVariant, Utility},
};

/// Label of the catch-all bucket for unclassified tokens.
pub const OTHER_LABEL: &str = "Other";

const fn group(
    label: &'static str,
    tier: GroupTier,
    patterns: &'static [&'static str],
) -> ClassGroup {
    ClassGroup {
        label,
        tier,
        patterns,
    }
}

/// Every class group, in precedence order.
pub static CLASS_GROUPS: &[ClassGroup] = &[
    group(
        "Layout",
        Utility,
        &[
            "container",
            "box-border",
            "box-content",
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ],
    ),
    group(
        "Position",
        Utility,
        &["static", "fixed", "absolute", "relative", "sticky"],
    ),
    group(
        "Coordinates",
        Utility,
        &["inset-", "top-", "right-", "bottom-", "left-", "z-"],
    ),
    group(
        "Display",
        Utility,
        &[
            "visible",
            "invisible",
            "collapse",
            "overflow-",
            "overscroll-",
        ],
    ),
    group(
        "Flexbox",
        Utility,
        &[
            "flex-row",
            "flex-col",
            "flex-wrap",
            "flex-1",
            "flex-auto",
            "flex-initial",
            "flex-none",
            "grow",
            "shrink",
        ],
    ),
    group(
        "Grid",
        Utility,
        &[
            "grid-cols-",
            "grid-rows-",
            "col-",
            "row-",
            "grid-flow-",
            "auto-cols-",
            "auto-rows-",
        ],
    ),
    group("Gap", Utility, &["gap-", "space-"]),
    group(
        "Alignment",
        Utility,
        &["justify-", "items-", "content-", "self-", "place-"],
    ),
    group(
        "Sizing",
        Utility,
        &["w-", "min-w-", "max-w-", "h-", "min-h-", "max-h-", "size-"],
    ),
    group(
        "Spacing",
        Utility,
        &[
            "p-", "px-", "py-", "pt-", "pr-", "pb-", "pl-", "m-", "mx-", "my-", "mt-", "mr-", "mb-",
            "ml-",
        ],
    ),
    group(
        "Typography",
        Utility,
        &[
            "font-",
            "text-",
            "leading-",
            "tracking-",
            "line-clamp-",
            "whitespace-",
            "break-",
            "hyphens-",
        ],
    ),
    group(
        "Text Style",
        Utility,
        &[
            "uppercase",
            "lowercase",
            "capitalize",
            "normal-case",
            "underline",
            "overline",
            "line-through",
            "no-underline",
            "antialiased",
            "subpixel-antialiased",
            "italic",
            "not-italic",
        ],
    ),
    group("Background", Utility, &["bg-"]),
    group(
        "Border",
        Utility,
        &["border", "divide-", "outline-", "ring-"],
    ),
    group("Border Radius", Utility, &["rounded-"]),
    group(
        "Effects",
        Utility,
        &["shadow-", "opacity-", "mix-blend-", "bg-blend-"],
    ),
    group(
        "Filters",
        Utility,
        &[
            "blur-",
            "brightness-",
            "contrast-",
            "grayscale",
            "hue-rotate-",
            "invert",
            "saturate-",
            "sepia",
            "backdrop-",
            "drop-shadow-",
        ],
    ),
    group(
        "Transitions",
        Utility,
        &["transition-", "duration-", "ease-", "delay-", "animate-"],
    ),
    group(
        "Transform",
        Utility,
        &[
            "scale-",
            "rotate-",
            "translate-",
            "skew-",
            "origin-",
            "transform",
        ],
    ),
    group(
        "Interactivity",
        Utility,
        &[
            "appearance-",
            "cursor-",
            "pointer-events-",
            "resize-",
            "scroll-",
            "select-",
            "user-select-",
            "touch-",
            "will-change-",
        ],
    ),
    group("SVG", Utility, &["fill-", "stroke-"]),
    group("Accessibility", Utility, &["sr-only", "not-sr-only"]),
    group("Hover", StateVariant, &["hover:"]),
    group("Focus", StateVariant, &["focus:"]),
    group("Active", StateVariant, &["active:"]),
    group("Disabled", StateVariant, &["disabled:"]),
    group("Visited", StateVariant, &["visited:"]),
    group("Checked", StateVariant, &["checked:"]),
    group("Group", StateVariant, &["group-"]),
    group("Peer", StateVariant, &["peer-"]),
    group("Before/After", PseudoElement, &["before:", "after:"]),
    group("Placeholder", PseudoElement, &["placeholder:"]),
    group("Selection", PseudoElement, &["selection:"]),
    group(
        "First/Last",
        PseudoElement,
        &["first:", "last:", "odd:", "even:"],
    ),
    group("Responsive", Responsive, &["sm:", "md:", "lg:", "xl:", "2xl:"]),
    group("Dark Mode", DarkMode, &["dark:"]),
];

/// Iterate the groups of one tier, in precedence order.
pub fn groups_in(tier: GroupTier) -> impl Iterator<Item = &'static ClassGroup> {
    CLASS_GROUPS.iter().filter(move |g| g.tier == tier)
}

/// Look up a group by label.
pub fn find_group(label: &str) -> Option<&'static ClassGroup> {
    CLASS_GROUPS.iter().find(|g| g.label == label)
}

/// All labels in precedence order, followed by [`OTHER_LABEL`].
pub fn precedence_labels() -> impl Iterator<Item = &'static str> {
    CLASS_GROUPS
        .iter()
        .map(|g| g.label)
        .chain(core::iter::once(OTHER_LABEL))
}
