use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    sync::{Arc, Weak},
};

/// An object owned by some other subsystem (a scene, a world, a registry).
/// Values only ever hold an [`EntityHandle`] to it.
pub trait Entity: Display + Send + Sync {}

impl<T: Display + Send + Sync> Entity for T {}

/// Non-owning handle to an [`Entity`]. Holding one never keeps the entity
/// alive; identity is the address of the entity.
#[derive(Clone, Default)]
pub struct EntityHandle {
    target: Option<Weak<dyn Entity>>,
}

impl EntityHandle {
    pub fn new<T: Entity + 'static>(entity: &Arc<T>) -> Self {
        let weak: Weak<T> = Arc::downgrade(entity);
        let target: Weak<dyn Entity> = weak;
        EntityHandle {
            target: Some(target),
        }
    }

    /// A handle that refers to nothing.
    pub fn none() -> Self {
        EntityHandle { target: None }
    }

    pub fn is_none(&self) -> bool {
        self.target.is_none()
    }

    /// `false` for an empty handle or once the owner has dropped the entity.
    pub fn is_alive(&self) -> bool {
        match &self.target {
            Some(weak) => weak.strong_count() > 0,
            None => false,
        }
    }

    /// Identity comparison. Two empty handles are identical.
    pub fn ptr_eq(&self, other: &EntityHandle) -> bool {
        match (&self.target, &other.target) {
            (Some(_), Some(_)) => self.address() == other.address(),
            (None, None) => true,
            _ => false,
        }
    }

    /// The entity's own text, or `"null"` when there is nothing to describe.
    pub fn describe(&self) -> String {
        match self.target.as_ref().and_then(Weak::upgrade) {
            Some(entity) => entity.to_string(),
            None => "null".to_string(),
        }
    }

    fn address(&self) -> usize {
        match &self.target {
            Some(weak) => weak.as_ptr() as *const () as usize,
            None => 0,
        }
    }
}

impl PartialEq for EntityHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for EntityHandle {}

impl Hash for EntityHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl Debug for EntityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.target {
            Some(_) => f
                .debug_struct("EntityHandle")
                .field("address", &format_args!("{:#x}", self.address()))
                .field("alive", &self.is_alive())
                .finish(),
            None => f.write_str("EntityHandle(none)"),
        }
    }
}

impl Display for EntityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
