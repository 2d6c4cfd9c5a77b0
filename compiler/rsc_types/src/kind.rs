//! Type kind discriminants.
//!
//! `TypeKind` names the shape of a `BaseType` without its payload. It is
//! what inference hints record and what diagnostics print when the full
//! type is not at hand.

use std::fmt;

/// Discriminant of a `BaseType`, one per `TypeData` variant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Bool,
    Char,
    Int,
    Uint,
    USize,
    ISize,
    Float,
    Closure,
    Function,
    Inferred,
    Never,
    Str,
    Tuple,
    Parameter,
    Adt,
    Error,
    Array,
    Projection,
    Dynamic,
    FunctionPointer,
    Placeholder,
    Slice,
    RawPointer,
    Reference,
}

impl TypeKind {
    /// Every kind, in declaration order.
    pub const ALL: [TypeKind; 24] = [
        TypeKind::Bool,
        TypeKind::Char,
        TypeKind::Int,
        TypeKind::Uint,
        TypeKind::USize,
        TypeKind::ISize,
        TypeKind::Float,
        TypeKind::Closure,
        TypeKind::Function,
        TypeKind::Inferred,
        TypeKind::Never,
        TypeKind::Str,
        TypeKind::Tuple,
        TypeKind::Parameter,
        TypeKind::Adt,
        TypeKind::Error,
        TypeKind::Array,
        TypeKind::Projection,
        TypeKind::Dynamic,
        TypeKind::FunctionPointer,
        TypeKind::Placeholder,
        TypeKind::Slice,
        TypeKind::RawPointer,
        TypeKind::Reference,
    ];

    /// Signed integers: `i8`..`i128` and `isize`.
    pub const fn is_signed_integer_like(self) -> bool {
        matches!(self, TypeKind::Int | TypeKind::ISize)
    }

    /// Any integer, signed or not.
    pub const fn is_integer_like(self) -> bool {
        matches!(
            self,
            TypeKind::Int | TypeKind::Uint | TypeKind::USize | TypeKind::ISize
        )
    }

    /// Floating point types.
    pub const fn is_float_like(self) -> bool {
        matches!(self, TypeKind::Float)
    }

    /// Kinds that redirect to another type instead of being one.
    pub const fn is_indirection(self) -> bool {
        matches!(
            self,
            TypeKind::Parameter | TypeKind::Placeholder | TypeKind::Projection
        )
    }

    /// Human-readable kind name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TypeKind::Bool => "bool",
            TypeKind::Char => "char",
            TypeKind::Int => "int",
            TypeKind::Uint => "uint",
            TypeKind::USize => "usize",
            TypeKind::ISize => "isize",
            TypeKind::Float => "float",
            TypeKind::Closure => "closure",
            TypeKind::Function => "function",
            TypeKind::Inferred => "inferred",
            TypeKind::Never => "never",
            TypeKind::Str => "str",
            TypeKind::Tuple => "tuple",
            TypeKind::Parameter => "parameter",
            TypeKind::Adt => "adt",
            TypeKind::Error => "error",
            TypeKind::Array => "array",
            TypeKind::Projection => "projection",
            TypeKind::Dynamic => "dynamic",
            TypeKind::FunctionPointer => "function pointer",
            TypeKind::Placeholder => "placeholder",
            TypeKind::Slice => "slice",
            TypeKind::RawPointer => "raw pointer",
            TypeKind::Reference => "reference",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Width of a signed integer type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
    I128,
}

impl IntKind {
    pub const fn name(self) -> &'static str {
        match self {
            IntKind::I8 => "i8",
            IntKind::I16 => "i16",
            IntKind::I32 => "i32",
            IntKind::I64 => "i64",
            IntKind::I128 => "i128",
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            IntKind::I8 => 8,
            IntKind::I16 => 16,
            IntKind::I32 => 32,
            IntKind::I64 => 64,
            IntKind::I128 => 128,
        }
    }
}

/// Width of an unsigned integer type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UintKind {
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl UintKind {
    pub const fn name(self) -> &'static str {
        match self {
            UintKind::U8 => "u8",
            UintKind::U16 => "u16",
            UintKind::U32 => "u32",
            UintKind::U64 => "u64",
            UintKind::U128 => "u128",
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            UintKind::U8 => 8,
            UintKind::U16 => 16,
            UintKind::U32 => 32,
            UintKind::U64 => 64,
            UintKind::U128 => 128,
        }
    }
}

/// Width of a floating point type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FloatKind {
    F32,
    F64,
}

impl FloatKind {
    pub const fn name(self) -> &'static str {
        match self {
            FloatKind::F32 => "f32",
            FloatKind::F64 => "f64",
        }
    }

    pub const fn bits(self) -> u32 {
        match self {
            FloatKind::F32 => 32,
            FloatKind::F64 => 64,
        }
    }
}
