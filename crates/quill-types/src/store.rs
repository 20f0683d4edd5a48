use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;
use quill_core::{Name, QualifiedName};
use serde::{Deserialize, Serialize};

use crate::builtins::WellKnownTypes;
use crate::error::{Result, TypeModelError};
use crate::ids::{ClassId, TypeVarId};
use crate::ty::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Class,
    Interface,
}

/// The declared body of a class or interface.
///
/// Supertype edges are stored exactly as declared: possibly parameterized,
/// possibly mentioning the class's own type parameters
/// (`Foo<T> implements List<List<T>>`). `super_class: None` means the object
/// root; the root itself is the only class whose effective superclass is
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    pub name: QualifiedName,
    pub kind: ClassKind,
    pub is_abstract: bool,
    pub type_params: Vec<TypeVarId>,
    pub super_class: Option<Type>,
    pub interfaces: Vec<Type>,
}

/// A declared type parameter: its name, the class declaring it, and an
/// optional upper bound (absent means the object root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParamDef {
    pub name: Name,
    pub owner: ClassId,
    pub bound: Option<Type>,
}

/// Read access to declarations, the seam between the store and the algebra.
pub trait TypeEnv {
    fn class(&self, id: ClassId) -> Option<&ClassDef>;
    fn type_param(&self, id: TypeVarId) -> Option<&TypeParamDef>;
    fn lookup_class(&self, name: &str) -> Option<ClassId>;
    fn class_name(&self, id: ClassId) -> Option<&QualifiedName>;
    fn well_known(&self) -> &WellKnownTypes;
}

/// Interning registry for class declarations.
///
/// Construction is a single-writer phase (`resolve`, `add_type_param` and
/// `register` take `&mut self`); every query takes `&self`, so once building
/// is done the store can be shared across worker threads freely. The one
/// cache populated during querying (`array_of`) is behind a lock with a
/// double-checked insert.
#[derive(Debug)]
pub struct TypeStore {
    names: Vec<QualifiedName>,
    defs: Vec<Option<ClassDef>>,
    ids_by_name: HashMap<QualifiedName, ClassId>,
    type_params: Vec<TypeParamDef>,
    well_known: WellKnownTypes,
    array_types: RwLock<HashMap<Type, Type>>,
}

impl TypeStore {
    /// A store whose object root is registered under `root_name`.
    ///
    /// Which qualified name plays the root is configuration; `Default` uses
    /// `java.lang.Object`.
    pub fn new(root_name: &str) -> Self {
        let mut store = Self {
            names: Vec::new(),
            defs: Vec::new(),
            ids_by_name: HashMap::new(),
            type_params: Vec::new(),
            // The root is the first interned name, so its id is known up
            // front.
            well_known: WellKnownTypes::new(ClassId::from_index(0)),
            array_types: RwLock::new(HashMap::new()),
        };
        let root = store.resolve(root_name);
        debug_assert_eq!(root.index(), 0);
        store.defs[root.index()] = Some(ClassDef {
            name: QualifiedName::new(root_name),
            kind: ClassKind::Class,
            is_abstract: false,
            type_params: Vec::new(),
            super_class: None,
            interfaces: Vec::new(),
        });
        store
    }

    /// Intern `name`, creating a forward-reference placeholder on first use.
    ///
    /// Idempotent: the same name always yields the same id, whether or not a
    /// body has been registered for it yet.
    pub fn resolve(&mut self, name: &str) -> ClassId {
        if let Some(&id) = self.ids_by_name.get(name) {
            return id;
        }
        let id = ClassId::from_index(self.names.len());
        let name = QualifiedName::new(name);
        self.names.push(name.clone());
        self.defs.push(None);
        self.ids_by_name.insert(name, id);
        id
    }

    /// Read-only lookup; `None` if the name was never resolved.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.ids_by_name.get(name).copied()
    }

    /// Allocate a type parameter for `owner`, ahead of `owner`'s own
    /// registration so that self-referential supertype edges can mention it.
    pub fn add_type_param(
        &mut self,
        owner: ClassId,
        name: impl Into<Name>,
        bound: Option<Type>,
    ) -> TypeVarId {
        let id = TypeVarId::from_index(self.type_params.len());
        self.type_params.push(TypeParamDef {
            name: name.into(),
            owner,
            bound,
        });
        id
    }

    /// Register the body of a declaration.
    ///
    /// Re-registering an identical body returns the existing id (forward
    /// references are built by `resolve` first, `register` later). A
    /// conflicting body fails with [`TypeModelError::DuplicateDeclaration`];
    /// a body that would make the class its own ancestor fails with
    /// [`TypeModelError::CyclicInheritance`]. Neither failure commits
    /// anything.
    pub fn register(&mut self, def: ClassDef) -> Result<ClassId> {
        let id = self.resolve(def.name.as_str());
        if let Some(existing) = &self.defs[id.index()] {
            if *existing == def {
                return Ok(id);
            }
            tracing::warn!(name = %def.name, "conflicting re-registration rejected");
            return Err(TypeModelError::DuplicateDeclaration { name: def.name });
        }
        if self.would_cycle(id, &def) {
            tracing::warn!(name = %def.name, "cyclic inheritance rejected");
            return Err(TypeModelError::CyclicInheritance { name: def.name });
        }
        tracing::debug!(name = %def.name, kind = ?def.kind, "registered class");
        self.defs[id.index()] = Some(def);
        Ok(id)
    }

    /// Walk the erased ancestor graph from the proposed edges; committing
    /// `def` must not make `id` reachable from itself.
    fn would_cycle(&self, id: ClassId, def: &ClassDef) -> bool {
        let mut stack: Vec<ClassId> = def
            .super_class
            .iter()
            .chain(def.interfaces.iter())
            .filter_map(Type::as_class)
            .collect();
        let mut seen = HashSet::new();
        while let Some(current) = stack.pop() {
            if current == id {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            // Undefined forward references are terminal: they have no edges
            // until their own registration, which runs this same check.
            if let Some(d) = self.class(current) {
                stack.extend(d.super_class.iter().filter_map(Type::as_class));
                stack.extend(d.interfaces.iter().filter_map(Type::as_class));
            }
        }
        false
    }

    /// Build a parameterized use of `class`, checking arity against the
    /// declared type parameters. Fails fast with
    /// [`TypeModelError::ArityMismatch`] rather than deferring to the first
    /// structural query.
    pub fn narrow(&self, class: ClassId, args: Vec<Type>) -> Result<Type> {
        let expected = self
            .class(class)
            .map(|d| d.type_params.len())
            .unwrap_or(0);
        if args.len() != expected {
            let name = self
                .class_name(class)
                .cloned()
                .unwrap_or_else(|| QualifiedName::new("?"));
            return Err(TypeModelError::ArityMismatch {
                name,
                expected,
                found: args.len(),
            });
        }
        Ok(Type::class(class, args))
    }

    /// The array type of `component`, one shared instance per component.
    ///
    /// Safe to call from concurrent readers: the cache entry is created with
    /// a double-checked insert, so every caller observes the same `Arc`.
    pub fn array_of(&self, component: &Type) -> Type {
        if let Some(existing) = self.array_types.read().get(component) {
            return existing.clone();
        }
        let mut cache = self.array_types.write();
        // Re-check under the write lock: another thread may have populated
        // the entry between the two acquisitions.
        cache
            .entry(component.clone())
            .or_insert_with(|| Type::array(component.clone()))
            .clone()
    }

    pub(crate) fn set_well_known(&mut self, well_known: WellKnownTypes) {
        self.well_known = well_known;
    }
}

impl Default for TypeStore {
    fn default() -> Self {
        Self::new("java.lang.Object")
    }
}

impl TypeEnv for TypeStore {
    fn class(&self, id: ClassId) -> Option<&ClassDef> {
        self.defs.get(id.index()).and_then(|d| d.as_ref())
    }

    fn type_param(&self, id: TypeVarId) -> Option<&TypeParamDef> {
        self.type_params.get(id.index())
    }

    fn lookup_class(&self, name: &str) -> Option<ClassId> {
        self.lookup(name)
    }

    fn class_name(&self, id: ClassId) -> Option<&QualifiedName> {
        self.names.get(id.index())
    }

    fn well_known(&self) -> &WellKnownTypes {
        &self.well_known
    }
}
