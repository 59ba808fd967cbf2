//! Node descriptors, element kinds, and forwarded refs.
//!
//! A [`Node`] is the renderer-facing description of "create an element of
//! kind K with props P and ref R". Component kinds are expanded lazily by
//! whatever mounts the node.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::props::{PropValue, Props};

/// Something that renders props into a node.
///
/// Every component receives the caller's forwarded ref alongside its props,
/// and decides where to attach it.
pub trait Component {
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Node;

    /// Name used in diagnostics and debug output.
    fn display_name(&self) -> &str {
        "Component"
    }
}

/// The kind of element a node creates.
#[derive(Clone)]
pub enum ElementKind {
    /// A plain element tag such as `div` or `button`.
    Intrinsic(String),
    /// A component that renders to another node.
    Component(Rc<dyn Component>),
}

impl ElementKind {
    pub fn intrinsic(tag: impl Into<String>) -> Self {
        ElementKind::Intrinsic(tag.into())
    }

    pub fn component<C: Component + 'static>(component: C) -> Self {
        ElementKind::Component(Rc::new(component))
    }

    /// Wrap a render closure as a component kind.
    pub fn from_fn<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(Props, Option<NodeRef>) -> Node + 'static,
    {
        ElementKind::component(FnComponent::new(name, render))
    }

    /// Tag for intrinsic kinds, display name for components.
    pub fn name(&self) -> &str {
        match self {
            ElementKind::Intrinsic(tag) => tag,
            ElementKind::Component(component) => component.display_name(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            ElementKind::Intrinsic(tag) => Some(tag),
            ElementKind::Component(_) => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, ElementKind::Intrinsic(_))
    }
}

impl fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Intrinsic(tag) => f.debug_tuple("Intrinsic").field(tag).finish(),
            ElementKind::Component(component) => f
                .debug_tuple("Component")
                .field(&component.display_name())
                .finish(),
        }
    }
}

impl PartialEq for ElementKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ElementKind::Intrinsic(a), ElementKind::Intrinsic(b)) => a == b,
            // Components compare by identity.
            (ElementKind::Component(a), ElementKind::Component(b)) => {
                Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl From<&str> for ElementKind {
    fn from(tag: &str) -> Self {
        ElementKind::Intrinsic(tag.to_string())
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        ElementKind::Intrinsic(tag)
    }
}

impl From<Rc<dyn Component>> for ElementKind {
    fn from(component: Rc<dyn Component>) -> Self {
        ElementKind::Component(component)
    }
}

/// A component backed by a closure.
pub struct FnComponent<F> {
    name: String,
    render: F,
}

impl<F> FnComponent<F>
where
    F: Fn(Props, Option<NodeRef>) -> Node,
{
    pub fn new(name: impl Into<String>, render: F) -> Self {
        Self {
            name: name.into(),
            render,
        }
    }
}

impl<F> Component for FnComponent<F>
where
    F: Fn(Props, Option<NodeRef>) -> Node,
{
    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Node {
        (self.render)(props, node_ref)
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// A forwarded reference.
///
/// Clones share the same slot. Once the node carrying the ref is mounted onto
/// an intrinsic element, the slot records that element's tag.
#[derive(Clone, Default)]
pub struct NodeRef {
    current: Rc<RefCell<Option<String>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the ref at a mounted element.
    pub fn attach(&self, tag: impl Into<String>) {
        *self.current.borrow_mut() = Some(tag.into());
    }

    /// Tag of the element the ref is attached to.
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// True when both handles share the same slot.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.current, &other.current)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("current", &*self.current.borrow())
            .finish()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

/// A node descriptor: element kind, props, and the ref slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: ElementKind,
    pub props: Props,
    pub node_ref: Option<NodeRef>,
}

impl Node {
    /// Create a node of `kind` with `props`, attaching `node_ref` to the ref slot.
    pub fn create(kind: impl Into<ElementKind>, props: Props, node_ref: Option<NodeRef>) -> Self {
        Self {
            kind: kind.into(),
            props,
            node_ref,
        }
    }

    pub fn new(kind: impl Into<ElementKind>, props: Props) -> Self {
        Self::create(kind, props, None)
    }

    pub fn with_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    pub fn class_name(&self) -> Option<&str> {
        self.props.class_name()
    }
}
