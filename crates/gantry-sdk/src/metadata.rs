//! Reflected host type descriptors
//!
//! Host types are interned, immutable descriptors behind cheap-to-clone
//! handles. Embedders assemble them with [`HostTypeBuilder`] and group the
//! exported ones into [`Assembly`] values; derived types (arrays, bound
//! generics) are constructed through dedicated constructors so their
//! names stay canonical.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::HostResult;
use crate::identity::TypeIdentity;
use crate::instance::HostInstance;
use crate::value::GuestValue;

// ============================================================================
// Kinds
// ============================================================================

/// Kind of a host type descriptor
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// Builtin value type (numbers, text, booleans)
    Builtin,
    /// Ordinary class
    Class,
    /// Interface
    Interface,
    /// Array of a fixed element type
    Array {
        /// Element type of the array
        element: HostType,
    },
    /// The family root all array types derive from
    ArrayRoot,
    /// Open generic definition
    GenericDefinition {
        /// Number of type arguments the definition takes
        arity: usize,
    },
    /// Fully bound generic instance
    GenericInstance {
        /// The definition this instance was bound from
        definition: HostType,
        /// Bound type arguments, in order
        arguments: Vec<HostType>,
    },
}

// ============================================================================
// Constructor and indexer hooks
// ============================================================================

/// Parameterless companion constructor hook.
///
/// Returns `None` when host-side construction fails.
pub type HostCtor = Arc<dyn Fn() -> Option<HostInstance> + Send + Sync>;

/// Read hook of a host indexer
pub type IndexerGetFn =
    Arc<dyn Fn(&HostInstance, &[GuestValue]) -> HostResult<GuestValue> + Send + Sync>;

/// Write hook of a host indexer.
///
/// Receives the fully assembled argument list, assigned value last.
pub type IndexerSetFn = Arc<dyn Fn(&HostInstance, &[GuestValue]) -> HostResult<()> + Send + Sync>;

/// Declared default value of an optional indexer parameter
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// Absent value
    Null,
    /// Boolean constant
    Bool(bool),
    /// Integer constant
    Int(i64),
    /// Floating-point constant
    Float(f64),
    /// Text constant
    Str(String),
}

/// Declared indexer parameter
#[derive(Debug, Clone)]
pub struct ParamSpec {
    /// Parameter name
    pub name: String,
    /// Declared default, present only on optional parameters
    pub default: Option<DefaultValue>,
}

impl ParamSpec {
    /// A required parameter
    pub fn required(name: &str) -> Self {
        ParamSpec {
            name: name.to_string(),
            default: None,
        }
    }

    /// An optional parameter with a declared default
    pub fn optional(name: &str, default: DefaultValue) -> Self {
        ParamSpec {
            name: name.to_string(),
            default: Some(default),
        }
    }
}

/// Indexer metadata declared by a host type.
///
/// The parameter list covers the index arguments only; the assigned value
/// is appended by the marshaler on writes.
#[derive(Clone)]
pub struct IndexerSpec {
    /// Declared index parameters, in order
    pub params: Vec<ParamSpec>,
    /// Read hook, absent when the indexer is write-only
    pub getter: Option<IndexerGetFn>,
    /// Write hook, absent when the indexer is read-only
    pub setter: Option<IndexerSetFn>,
}

impl IndexerSpec {
    /// Spec with the given parameters and no hooks
    pub fn new(params: Vec<ParamSpec>) -> Self {
        IndexerSpec {
            params,
            getter: None,
            setter: None,
        }
    }

    /// Attach a read hook
    pub fn with_getter(
        mut self,
        getter: impl Fn(&HostInstance, &[GuestValue]) -> HostResult<GuestValue> + Send + Sync + 'static,
    ) -> Self {
        self.getter = Some(Arc::new(getter));
        self
    }

    /// Attach a write hook
    pub fn with_setter(
        mut self,
        setter: impl Fn(&HostInstance, &[GuestValue]) -> HostResult<()> + Send + Sync + 'static,
    ) -> Self {
        self.setter = Some(Arc::new(setter));
        self
    }
}

impl fmt::Debug for IndexerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexerSpec")
            .field("params", &self.params)
            .field("readable", &self.getter.is_some())
            .field("writable", &self.setter.is_some())
            .finish()
    }
}

// ============================================================================
// HostType
// ============================================================================

struct TypeMeta {
    /// Simple name, e.g. `Stream`
    name: String,
    /// Dot-joined namespace, empty for global types
    namespace: String,
    /// Precomputed `namespace.name` form used for registry lookups
    qualified: String,
    kind: TypeKind,
    identity: Option<TypeIdentity>,
    imported: bool,
    companion: Option<HostType>,
    constructor: Option<HostCtor>,
    base: Option<HostType>,
    interfaces: Vec<HostType>,
    indexer: Option<IndexerSpec>,
}

/// Interned, immutable host type descriptor.
///
/// Cloning shares the descriptor. Equality is interned identity, falling
/// back to [`TypeIdentity`] when both sides carry one, then to the
/// qualified name.
#[derive(Clone)]
pub struct HostType {
    meta: Arc<TypeMeta>,
}

static ARRAY_ROOT: Lazy<HostType> = Lazy::new(|| {
    HostTypeBuilder::new("Array")
        .namespace("Host")
        .kind(TypeKind::ArrayRoot)
        .build()
});

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

impl HostType {
    /// The array-family root type (`Host.Array`)
    pub fn array_root() -> HostType {
        ARRAY_ROOT.clone()
    }

    /// Simple name of the type
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Namespace of the type, empty for global types
    pub fn namespace(&self) -> &str {
        &self.meta.namespace
    }

    /// Namespace-qualified name
    pub fn qualified_name(&self) -> &str {
        &self.meta.qualified
    }

    /// Kind of the type
    pub fn kind(&self) -> &TypeKind {
        &self.meta.kind
    }

    /// Late-binding identity, if the type declares one
    pub fn identity(&self) -> Option<TypeIdentity> {
        self.meta.identity
    }

    /// Whether the type is marked as imported from a foreign library
    pub fn is_imported(&self) -> bool {
        self.meta.imported
    }

    /// Whether the type is an interface
    pub fn is_interface(&self) -> bool {
        matches!(self.meta.kind, TypeKind::Interface)
    }

    /// Whether the type is the array-family root
    pub fn is_array_root(&self) -> bool {
        matches!(self.meta.kind, TypeKind::ArrayRoot)
    }

    /// Whether the type is an array type
    pub fn is_array(&self) -> bool {
        matches!(self.meta.kind, TypeKind::Array { .. })
    }

    /// Element type, for array types
    pub fn element_type(&self) -> Option<&HostType> {
        match &self.meta.kind {
            TypeKind::Array { element } => Some(element),
            _ => None,
        }
    }

    /// Declared arity, for generic definitions
    pub fn generic_arity(&self) -> Option<usize> {
        match &self.meta.kind {
            TypeKind::GenericDefinition { arity } => Some(*arity),
            _ => None,
        }
    }

    /// Companion (default implementation) class, for interfaces
    pub fn companion(&self) -> Option<&HostType> {
        self.meta.companion.as_ref()
    }

    /// Parameterless constructor hook, for constructible classes
    pub fn constructor(&self) -> Option<&HostCtor> {
        self.meta.constructor.as_ref()
    }

    /// Base type link
    pub fn base(&self) -> Option<&HostType> {
        self.meta.base.as_ref()
    }

    /// Implemented interfaces
    pub fn interfaces(&self) -> &[HostType] {
        &self.meta.interfaces
    }

    /// Declared indexer metadata
    pub fn indexer(&self) -> Option<&IndexerSpec> {
        self.meta.indexer.as_ref()
    }

    /// The array type of `element`, named `Element[]`
    pub fn array_of(element: &HostType) -> HostType {
        let name = format!("{}[]", element.name());
        let qualified = qualify(element.namespace(), &name);
        HostType {
            meta: Arc::new(TypeMeta {
                name,
                namespace: element.namespace().to_string(),
                qualified,
                kind: TypeKind::Array {
                    element: element.clone(),
                },
                identity: None,
                imported: false,
                companion: None,
                constructor: None,
                base: Some(HostType::array_root()),
                interfaces: Vec::new(),
                indexer: None,
            }),
        }
    }

    /// Bind a generic definition to concrete arguments.
    ///
    /// Returns `None` unless `self` is a generic definition of matching
    /// arity. The instance is named `Definition[Arg,...]`.
    pub fn bind_generic(&self, arguments: &[HostType]) -> Option<HostType> {
        let TypeKind::GenericDefinition { arity } = self.meta.kind else {
            return None;
        };
        if arguments.len() != arity {
            return None;
        }
        let rendered: Vec<&str> = arguments.iter().map(|a| a.qualified_name()).collect();
        let name = format!("{}[{}]", self.name(), rendered.join(","));
        let qualified = qualify(self.namespace(), &name);
        Some(HostType {
            meta: Arc::new(TypeMeta {
                name,
                namespace: self.namespace().to_string(),
                qualified,
                kind: TypeKind::GenericInstance {
                    definition: self.clone(),
                    arguments: arguments.to_vec(),
                },
                identity: None,
                imported: false,
                companion: None,
                constructor: None,
                base: None,
                interfaces: Vec::new(),
                indexer: None,
            }),
        })
    }

    /// Whether a value of type `other` can stand where `self` is expected.
    ///
    /// True for the type itself, for types listing `self` among their
    /// implemented interfaces, and transitively through base links.
    pub fn is_assignable_from(&self, other: &HostType) -> bool {
        let mut current = Some(other.clone());
        while let Some(ty) = current {
            if *self == ty {
                return true;
            }
            if ty
                .interfaces()
                .iter()
                .any(|iface| self.is_assignable_from(iface))
            {
                return true;
            }
            current = ty.base().cloned();
        }
        false
    }
}

impl PartialEq for HostType {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.meta, &other.meta) {
            return true;
        }
        if let (Some(a), Some(b)) = (self.identity(), other.identity()) {
            return a == b;
        }
        self.meta.qualified == other.meta.qualified
    }
}

impl Eq for HostType {}

impl fmt::Debug for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HostType").field(&self.meta.qualified).finish()
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.meta.qualified)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for host type descriptors
pub struct HostTypeBuilder {
    name: String,
    namespace: String,
    kind: TypeKind,
    identity: Option<TypeIdentity>,
    imported: bool,
    companion: Option<HostType>,
    constructor: Option<HostCtor>,
    base: Option<HostType>,
    interfaces: Vec<HostType>,
    indexer: Option<IndexerSpec>,
}

impl HostTypeBuilder {
    /// Start building a class type named `name`
    pub fn new(name: &str) -> Self {
        HostTypeBuilder {
            name: name.to_string(),
            namespace: String::new(),
            kind: TypeKind::Class,
            identity: None,
            imported: false,
            companion: None,
            constructor: None,
            base: None,
            interfaces: Vec::new(),
            indexer: None,
        }
    }

    /// Set the namespace
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    /// Set the kind
    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark the type as an interface
    pub fn interface(self) -> Self {
        self.kind(TypeKind::Interface)
    }

    /// Mark the type as a generic definition of the given arity
    pub fn generic_definition(self, arity: usize) -> Self {
        self.kind(TypeKind::GenericDefinition { arity })
    }

    /// Declare the late-binding identity
    pub fn identity(mut self, identity: TypeIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Mark the type as imported from a foreign library
    pub fn imported(mut self) -> Self {
        self.imported = true;
        self
    }

    /// Link the companion (default implementation) class
    pub fn companion(mut self, companion: &HostType) -> Self {
        self.companion = Some(companion.clone());
        self
    }

    /// Attach a parameterless constructor hook
    pub fn constructor(
        mut self,
        ctor: impl Fn() -> Option<HostInstance> + Send + Sync + 'static,
    ) -> Self {
        self.constructor = Some(Arc::new(ctor));
        self
    }

    /// Set the base type
    pub fn base(mut self, base: &HostType) -> Self {
        self.base = Some(base.clone());
        self
    }

    /// Add an implemented interface
    pub fn implements(mut self, interface: &HostType) -> Self {
        self.interfaces.push(interface.clone());
        self
    }

    /// Declare an indexer
    pub fn indexer(mut self, spec: IndexerSpec) -> Self {
        self.indexer = Some(spec);
        self
    }

    /// Finish building
    pub fn build(self) -> HostType {
        let qualified = qualify(&self.namespace, &self.name);
        HostType {
            meta: Arc::new(TypeMeta {
                name: self.name,
                namespace: self.namespace,
                qualified,
                kind: self.kind,
                identity: self.identity,
                imported: self.imported,
                companion: self.companion,
                constructor: self.constructor,
                base: self.base,
                interfaces: self.interfaces,
                indexer: self.indexer,
            }),
        }
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// A named set of exported host types
#[derive(Clone)]
pub struct Assembly {
    inner: Arc<AssemblyInner>,
}

struct AssemblyInner {
    name: String,
    types: Vec<HostType>,
}

impl Assembly {
    /// Create an assembly exporting `types`
    pub fn new(name: &str, types: Vec<HostType>) -> Self {
        Assembly {
            inner: Arc::new(AssemblyInner {
                name: name.to_string(),
                types,
            }),
        }
    }

    /// Assembly name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Exported types, in declaration order
    pub fn exported_types(&self) -> &[HostType] {
        &self.inner.types
    }

    /// Find an exported type by qualified name
    pub fn find_type(&self, qualified: &str) -> Option<&HostType> {
        self.inner
            .types
            .iter()
            .find(|ty| ty.qualified_name() == qualified)
    }
}

impl fmt::Debug for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assembly")
            .field("name", &self.inner.name)
            .field("types", &self.inner.types.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, namespace: &str) -> HostType {
        HostTypeBuilder::new(name).namespace(namespace).build()
    }

    #[test]
    fn test_builder_qualified_name() {
        let ty = class("Stream", "Acme.Storage");
        assert_eq!(ty.name(), "Stream");
        assert_eq!(ty.namespace(), "Acme.Storage");
        assert_eq!(ty.qualified_name(), "Acme.Storage.Stream");

        let global = HostTypeBuilder::new("Loose").build();
        assert_eq!(global.qualified_name(), "Loose");
    }

    #[test]
    fn test_equality_by_identity_and_name() {
        let id: TypeIdentity = "00000000-0000-0000-0000-0000000000aa".parse().unwrap();
        let a = HostTypeBuilder::new("IStream")
            .namespace("Acme")
            .interface()
            .identity(id)
            .build();
        let b = HostTypeBuilder::new("IStreamAlias")
            .namespace("Other")
            .interface()
            .identity(id)
            .build();
        assert_eq!(a, b);

        let c = class("Stream", "Acme");
        let d = class("Stream", "Acme");
        assert_eq!(c, d);
        assert_ne!(c, class("Stream", "Other"));
    }

    #[test]
    fn test_array_root_singleton() {
        let root = HostType::array_root();
        assert!(root.is_array_root());
        assert_eq!(root.qualified_name(), "Host.Array");
        assert_eq!(root, HostType::array_root());
    }

    #[test]
    fn test_array_of_naming_and_element() {
        let element = class("Stream", "Acme");
        let array = HostType::array_of(&element);
        assert!(array.is_array());
        assert_eq!(array.qualified_name(), "Acme.Stream[]");
        assert_eq!(array.element_type(), Some(&element));
        assert_eq!(array.base(), Some(&HostType::array_root()));
    }

    #[test]
    fn test_bind_generic() {
        let pair = HostTypeBuilder::new("Pair`2")
            .namespace("Acme")
            .generic_definition(2)
            .build();
        let int = class("Int64", "Host");
        let text = class("Text", "Host");

        let bound = pair.bind_generic(&[int.clone(), text.clone()]).unwrap();
        assert_eq!(bound.qualified_name(), "Acme.Pair`2[Host.Int64,Host.Text]");
        match bound.kind() {
            TypeKind::GenericInstance {
                definition,
                arguments,
            } => {
                assert_eq!(definition, &pair);
                assert_eq!(arguments, &[int.clone(), text]);
            }
            other => panic!("unexpected kind: {other:?}"),
        }

        assert!(pair.bind_generic(&[int]).is_none());
        assert!(class("Plain", "Acme").bind_generic(&[]).is_none());
    }

    #[test]
    fn test_assignability_through_interfaces_and_bases() {
        let iface = HostTypeBuilder::new("IStream").namespace("Acme").interface().build();
        let base = HostTypeBuilder::new("StreamBase")
            .namespace("Acme")
            .implements(&iface)
            .build();
        let derived = HostTypeBuilder::new("FileStream")
            .namespace("Acme")
            .base(&base)
            .build();
        let unrelated = class("Widget", "Acme");

        assert!(iface.is_assignable_from(&base));
        assert!(iface.is_assignable_from(&derived));
        assert!(base.is_assignable_from(&derived));
        assert!(iface.is_assignable_from(&iface));
        assert!(!iface.is_assignable_from(&unrelated));
        assert!(!derived.is_assignable_from(&base));
    }

    #[test]
    fn test_interface_inheritance_assignability() {
        let top = HostTypeBuilder::new("IBase").interface().build();
        let narrow = HostTypeBuilder::new("INarrow")
            .interface()
            .implements(&top)
            .build();
        let implementor = HostTypeBuilder::new("Impl").implements(&narrow).build();

        assert!(top.is_assignable_from(&implementor));
        assert!(narrow.is_assignable_from(&implementor));
    }

    #[test]
    fn test_assembly_find_type() {
        let stream = class("Stream", "Acme");
        let widget = class("Widget", "Acme");
        let assembly = Assembly::new("acme.core", vec![stream.clone(), widget]);

        assert_eq!(assembly.name(), "acme.core");
        assert_eq!(assembly.exported_types().len(), 2);
        assert_eq!(assembly.find_type("Acme.Stream"), Some(&stream));
        assert!(assembly.find_type("Acme.Missing").is_none());
    }

    #[test]
    fn test_param_spec_constructors() {
        let required = ParamSpec::required("index");
        assert!(required.default.is_none());

        let optional = ParamSpec::optional("key", DefaultValue::Str("x".to_string()));
        assert_eq!(optional.default, Some(DefaultValue::Str("x".to_string())));
    }
}
