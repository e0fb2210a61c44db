//! UI node behaviours.
//!
//! Every UI node type has a behaviour that may extend another one. A node
//! accepts the event properties of its own behaviour and of every behaviour
//! it extends, so `optionlist` gets `onviewchange` from `abstractoption` and
//! the mouse events from `abstractnode`.

/// Static description of a UI node type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeBehaviour {
    /// Node type keyword.
    pub name: &'static str,
    /// Behaviour this one extends.
    pub extends: Option<&'static str>,
    /// Event properties introduced by this behaviour.
    pub events: &'static [&'static str],
    /// Whether the node holds other UI nodes.
    pub container: bool,
    /// Whether the node holds `option` entries.
    pub options: bool,
}

impl NodeBehaviour {
    const fn new(name: &'static str, extends: Option<&'static str>) -> Self {
        Self {
            name,
            extends,
            events: &[],
            container: false,
            options: false,
        }
    }

    const fn events(mut self, events: &'static [&'static str]) -> Self {
        self.events = events;
        self
    }

    const fn container(mut self) -> Self {
        self.container = true;
        self
    }

    const fn options(mut self) -> Self {
        self.options = true;
        self
    }
}

const BASE: Option<&str> = Some("abstractnode");

/// Every known behaviour, abstract ones included.
pub const BEHAVIOURS: &[NodeBehaviour] = &[
    NodeBehaviour::new("abstractnode", None).events(&[
        "onclick",
        "onrclick",
        "onmclick",
        "onwheel",
        "onwheelup",
        "onwheeldown",
        "onmouseenter",
        "onmouseleave",
        "onchange",
    ]),
    NodeBehaviour::new("abstractvalue", BASE),
    NodeBehaviour::new("abstractscrollbar", BASE).events(&["onviewchange"]),
    NodeBehaviour::new("abstractoption", BASE)
        .events(&["onviewchange"])
        .options(),
    NodeBehaviour::new("window", BASE)
        .events(&["oninit", "onclose", "onevent"])
        .container(),
    NodeBehaviour::new("component", BASE).container(),
    NodeBehaviour::new("panel", BASE).container(),
    NodeBehaviour::new("button", BASE),
    NodeBehaviour::new("checkbox", Some("abstractvalue")),
    NodeBehaviour::new("spinner", Some("abstractvalue")),
    NodeBehaviour::new("bar", Some("abstractvalue")),
    NodeBehaviour::new("vscrollbar", Some("abstractscrollbar")),
    NodeBehaviour::new("string", BASE),
    NodeBehaviour::new("text", BASE).events(&["onviewchange"]),
    NodeBehaviour::new("textlist", Some("text")),
    NodeBehaviour::new("messagelist", BASE).events(&["onviewchange"]),
    NodeBehaviour::new("textentry", BASE).events(&["onabort"]),
    NodeBehaviour::new("image", BASE),
    NodeBehaviour::new("model", BASE),
    NodeBehaviour::new("radar", BASE),
    NodeBehaviour::new("container", BASE),
    NodeBehaviour::new("video", BASE).events(&["onend"]),
    NodeBehaviour::new("zone", BASE),
    NodeBehaviour::new("rows", BASE),
    NodeBehaviour::new("data", BASE),
    NodeBehaviour::new("optionlist", Some("abstractoption")),
    NodeBehaviour::new("optiontree", Some("abstractoption")),
    NodeBehaviour::new("selectbox", Some("abstractoption")),
    NodeBehaviour::new("tab", Some("abstractoption")),
    NodeBehaviour::new("option", BASE).options(),
];

/// Looks up a behaviour by node type.
#[must_use]
pub fn behaviour(name: &str) -> Option<&'static NodeBehaviour> {
    BEHAVIOURS.iter().find(|b| b.name == name)
}

/// Returns `name` followed by every behaviour it extends.
///
/// Unknown names yield an empty chain. A cycle in the table ends the walk.
#[must_use]
pub fn lineage(name: &str) -> Vec<&'static NodeBehaviour> {
    let mut chain: Vec<&'static NodeBehaviour> = Vec::new();
    let mut next = behaviour(name);
    while let Some(current) = next {
        if chain.iter().any(|b| b.name == current.name) {
            break;
        }
        chain.push(current);
        next = current.extends.and_then(behaviour);
    }
    chain
}

/// Returns the event properties a node type accepts, inherited ones first.
#[must_use]
pub fn events_for(name: &str) -> Vec<&'static str> {
    let mut events = Vec::new();
    for b in lineage(name).into_iter().rev() {
        for event in b.events {
            if !events.contains(event) {
                events.push(*event);
            }
        }
    }
    events
}

/// Returns true if the node type holds other UI nodes.
#[must_use]
pub fn is_container(name: &str) -> bool {
    lineage(name).iter().any(|b| b.container)
}

/// Returns true if the node type holds `option` entries.
#[must_use]
pub fn accepts_options(name: &str) -> bool {
    lineage(name).iter().any(|b| b.options)
}
